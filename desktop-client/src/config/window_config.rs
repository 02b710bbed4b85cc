use serde::{Deserialize, Serialize};

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub cell_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size: 32 }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(12..=64).contains(&self.cell_size) {
            return Err(format!(
                "Cell size must be between 12 and 64, got {}",
                self.cell_size
            ));
        }
        Ok(())
    }
}
