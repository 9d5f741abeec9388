use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// A person (side A) against a computer agent (side B)
    #[default]
    HumanVsAgent,
    /// Two computer agents
    AgentVsAgent,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Games played back to back (agent-vs-agent only)
    pub rounds: u32,
    /// Seed for the random agents; fresh OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::HumanVsAgent,
            rounds: 1,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
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
            tracing::debug!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation("board.columns must be > 0".into()));
        }
        if self.board.rows < 4 && self.board.columns < 4 {
            return Err(ConfigError::Validation(
                "board must be at least 4 rows or 4 columns for a line of four to fit".into(),
            ));
        }
        if self.board.rows > u16::MAX as usize || self.board.columns > u16::MAX as usize {
            return Err(ConfigError::Validation(
                "board dimensions must be <= 65535".into(),
            ));
        }
        if self.game.rounds == 0 {
            return Err(ConfigError::Validation("game.rounds must be >= 1".into()));
        }
        if self.game.rounds > 1 && self.game.mode != GameMode::AgentVsAgent {
            return Err(ConfigError::Validation(
                "game.rounds > 1 requires mode = \"agent-vs-agent\"".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
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
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.columns, 7);
        assert_eq!(config.game.mode, GameMode::HumanVsAgent);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.columns, 9);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.game.rounds, 1);
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.rows, DEFAULT_ROWS);
        assert_eq!(config.game.mode, GameMode::HumanVsAgent);
    }

    #[test]
    fn test_mode_names() {
        let config: AppConfig = toml::from_str(
            r#"
[game]
mode = "agent-vs-agent"
rounds = 10
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.game.mode, GameMode::AgentVsAgent);
        assert_eq!(config.game.rounds, 10);
        assert_eq!(config.game.seed, Some(7));
        config.validate().unwrap();

        assert!(toml::from_str::<AppConfig>("[game]\nmode = \"bots\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_board_too_small_for_four() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        config.board.columns = 3;
        assert!(config.validate().is_err());

        config.board.columns = 4;
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_zero_rounds() {
        let mut config = AppConfig::default();
        config.game.rounds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_rounds_in_human_mode() {
        let mut config = AppConfig::default();
        config.game.rounds = 3;
        assert!(config.validate().is_err());

        config.game.mode = GameMode::AgentVsAgent;
        config.validate().unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.columns, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8
columns = 10
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.columns, 10);
        assert_eq!(config.game.mode, GameMode::HumanVsAgent);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
