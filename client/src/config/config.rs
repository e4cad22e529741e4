use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::MoveSelectorSettings;

use super::FirstPlayerMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_THINK_DELAY_MS: u64 = 10_000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the file next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub computer: MoveSelectorSettings,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    pub think_delay_ms: u64,
}

impl Config {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.computer.validate()?;
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {}, got {}",
                MAX_THINK_DELAY_MS, self.think_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer: MoveSelectorSettings::default(),
            first_player: FirstPlayerMode::Random,
            think_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            computer: MoveSelectorSettings {
                optimal_probability: 0.5,
            },
            first_player: FirstPlayerMode::Computer,
            think_delay_ms: 0,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_documented_yaml_layout_is_accepted() {
        let content = "computer:\n  optimal_probability: 0.85\nfirst_player: Random\nthink_delay_ms: 500\n";
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_first_player_defaults_to_random() {
        let content = "computer:\n  optimal_probability: 1.0\nthink_delay_ms: 0\n";
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Random);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = "computer:\n  optimal_probability: 1.7\nthink_delay_ms: 100\n";
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = Config {
            think_delay_ms: MAX_THINK_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
