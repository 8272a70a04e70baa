use std::path::Path;

use crate::error::ConfigError;
use crate::game::MAX_CANDY_TYPES;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
        }
    }
}

/// Board dimensions and alphabet size for new games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns on the board.
    pub columns: usize,
    /// Height of each column.
    pub rows: usize,
    /// Number of distinct candy types dealt onto the board.
    pub candy_types: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: 8,
            rows: 5,
            candy_types: 12,
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.columns < 2 {
            return Err(ConfigError::Validation(
                "game.columns must be >= 2 (a move needs a distinct destination)".into(),
            ));
        }
        if self.game.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be > 0".into()));
        }
        if self.game.candy_types == 0 {
            return Err(ConfigError::Validation(
                "game.candy_types must be > 0".into(),
            ));
        }
        if self.game.candy_types > MAX_CANDY_TYPES {
            return Err(ConfigError::Validation(format!(
                "game.candy_types must be <= {MAX_CANDY_TYPES}"
            )));
        }
        Ok(())
    }
}
