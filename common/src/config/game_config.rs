use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::games::tictactoe::DEFAULT_SAVE_FILE;

pub const CONFIG_FILE: &str = "tic_tac_toe_config.yaml";

pub type GameConfigManager =
    ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

pub fn get_config_manager(file_path: impl Into<PathBuf>) -> GameConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub save_file: String,
    pub logging: LoggingConfig,
    /// Fixed seed for the easy bot; a fresh random seed is drawn when absent.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub use_log_prefix: bool,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.save_file.trim().is_empty() {
            return Err("save_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: DEFAULT_SAVE_FILE.to_string(),
            logging: LoggingConfig {
                verbose: false,
                use_log_prefix: false,
            },
            rng_seed: None,
        }
    }
}
