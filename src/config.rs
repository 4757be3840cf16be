use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameState, WinCheck, WIDTH};
use crate::logging::LogConfig;
use crate::ui::UiConfig;

/// `[game]` section: rules-engine settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub win_check: WinCheck,
}

impl GameConfig {
    /// Start a new game with these settings
    pub fn new_game(&self) -> GameState {
        GameState::with_win_check(self.win_check)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.player_one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui.player_one_name must not be empty".into(),
            ));
        }
        if self.ui.player_two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui.player_two_name must not be empty".into(),
            ));
        }
        if self.ui.start_column >= WIDTH {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {WIDTH}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        self.log.level_filter()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
win_check = "full"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.win_check, WinCheck::Full);
        // Other fields should be defaults
        assert_eq!(config.ui.start_column, 3);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.win_check, WinCheck::Incremental);
        assert_eq!(config.ui.player_one_name, "Player 1");
        assert_eq!(config.ui.player_two_name, "Player 2");
    }

    #[test]
    fn test_unknown_win_check_fails_to_parse() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nwin_check = \"regex\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.ui.player_two_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_off_board() {
        let mut config = AppConfig::default();
        config.ui.start_column = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "chatty".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.start_column, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
player_one_name = "Ada"
start_column = 0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.player_one_name, "Ada");
        assert_eq!(config.ui.start_column, 0);
        // Others are defaults
        assert_eq!(config.ui.player_two_name, "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\nstart_column = 9\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_game_config_builds_state_with_win_check() {
        let config = GameConfig {
            win_check: WinCheck::Full,
        };
        let state = config.new_game();
        assert_eq!(state.win_check(), WinCheck::Full);
        assert_eq!(state.move_count(), 0);
    }
}
