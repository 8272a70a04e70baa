use std::path::PathBuf;

/// Errors reported when a game is constructed with unusable parameters.
/// Construction fails outright; no partial board is produced.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a board needs at least one column")]
    ZeroColumns,

    #[error("column height must be at least 1")]
    ZeroHeight,

    #[error("the candy alphabet is empty")]
    EmptyAlphabet,

    #[error("the candy alphabet cannot hold more than 256 types")]
    AlphabetTooLarge,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_display() {
        assert_eq!(
            SetupError::ZeroColumns.to_string(),
            "a board needs at least one column"
        );
        assert_eq!(
            SetupError::ZeroHeight.to_string(),
            "column height must be at least 1"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be > 0"
        );
    }
}
