mod config_content_provider;
mod config_manager;
mod config_serializer;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::{CONFIG_FILE, GameConfig, GameConfigManager, LoggingConfig, get_config_manager};
pub use validate::Validate;
