use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{BoardConfig, SnakeConfig};

const CONFIG_FILE_NAME: &str = "snake_headless_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Manager for `path`, or for the file next to the executable.
pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    #[serde(default)]
    pub board: BoardConfig,
    pub frame_rate: u32,
    #[serde(default = "default_render_board")]
    pub render_board: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_render_board() -> bool {
    true
}

fn default_history_size() -> usize {
    16
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.board.validate()?;
        if self.frame_rate == 0 {
            return Err("frame_rate must be greater than 0".to_string());
        }
        if self.frame_rate > 240 {
            return Err("frame_rate must not exceed 240".to_string());
        }
        if self.history_size == 0 {
            return Err("history_size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            board: BoardConfig::default(),
            frame_rate: 60,
            render_board: default_render_board(),
            seed: None,
            history_size: default_history_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_headless_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_manager_round_trip() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let mut config = Config::default();
        config.snake.columns = 30;
        config.seed = Some(5);
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(reloaded, config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let yaml = "snake:\n  columns: 12\n  rows: 14\n  step_duration_ms: 150\n  score_per_food: 5\nframe_rate: 30\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert!(config.render_board);
        assert_eq!(config.seed, None);
        assert_eq!(config.history_size, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_frame_rate() {
        let config = Config {
            frame_rate: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            frame_rate: 50,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }
}
