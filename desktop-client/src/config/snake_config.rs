use arcade_common::SnakeSettings;
use arcade_common::games::snake::{DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct SnakeConfig {
    pub grid_size: u32,
    pub tick_interval_ms: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
        }
    }
}

impl From<&SnakeConfig> for SnakeSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            grid_size: config.grid_size as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSettings::from(self).validate()
    }
}
