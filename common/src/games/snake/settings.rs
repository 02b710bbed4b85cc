use std::time::Duration;

use crate::config::Validate;

pub const DEFAULT_GRID_SIZE: usize = 15;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const FOOD_SCORE: u32 = 10;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 50;
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub tick_interval: Duration,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            ));
        }
        if !(MIN_TICK_INTERVAL..=MAX_TICK_INTERVAL).contains(&self.tick_interval) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms, got {}ms",
                MIN_TICK_INTERVAL.as_millis(),
                MAX_TICK_INTERVAL.as_millis(),
                self.tick_interval.as_millis()
            ));
        }
        Ok(())
    }
}
