use serde::{Deserialize, Serialize};
use snake_engine::GameSettings;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const CONFIG_FILE_NAME: &str = "snake_runner.yaml";

const DEFAULT_ITERATIONS: u32 = 1000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameSettings,
    #[serde(default)]
    pub print_board: bool,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameSettings {
                iterations: Some(DEFAULT_ITERATIONS),
                ..GameSettings::default()
            },
            print_board: false,
        }
    }
}
