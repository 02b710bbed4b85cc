use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, SnakeConfig, Validate, WindowConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "toy_arcade_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub snake: SnakeConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
