mod main_config;
mod snake_config;
mod window_config;

pub(crate) use arcade_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub use main_config::{CONFIG_FILE, Config, get_config_manager};
pub use snake_config::SnakeConfig;
pub use window_config::WindowConfig;
