//! Session configuration, loadable from TOML.
//!
//! ```toml
//! persist = true
//! save_path = "manacala-save.json"
//! save_format = "json"
//! player1_name = "Player1"
//! player2_name = "Player2"
//! ```
//!
//! Every key is optional; missing keys take the defaults above.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store::{FileStore, MemoryStore, SaveFormat, StateStore};
use crate::core::{PLAYER1_NAME, PLAYER2_NAME};
use crate::error::ConfigError;

/// Default save file, next to wherever the game is run from.
pub const DEFAULT_SAVE_PATH: &str = "manacala-save.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keep state on disk between invocations. When false the game only
    /// lives as long as the process.
    pub persist: bool,
    pub save_path: PathBuf,
    pub save_format: SaveFormat,
    pub player1_name: String,
    pub player2_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            persist: true,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            save_format: SaveFormat::Json,
            player1_name: PLAYER1_NAME.to_string(),
            player2_name: PLAYER2_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player1_name.trim().is_empty() || self.player2_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.player1_name.contains(char::is_whitespace)
            || self.player2_name.contains(char::is_whitespace)
        {
            return Err(ConfigError::Validation(
                "player names must be a single word".into(),
            ));
        }
        if self.player1_name.to_lowercase() == self.player2_name.to_lowercase() {
            return Err(ConfigError::Validation(
                "player names must differ".into(),
            ));
        }
        if self.persist && self.save_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "save_path must be set when persist = true".into(),
            ));
        }
        Ok(())
    }

    /// Build the state store this configuration asks for.
    #[must_use]
    pub fn store(&self) -> Box<dyn StateStore> {
        if self.persist {
            Box::new(FileStore::new(&self.save_path, self.save_format))
        } else {
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.persist);
        assert_eq!(config.save_path, PathBuf::from("manacala-save.json"));
        assert_eq!(config.save_format, SaveFormat::Json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SessionConfig::from_toml(
            r#"
            save_format = "bincode"
            player1_name = "Ada"
            "#,
        )
        .unwrap();

        assert_eq!(config.save_format, SaveFormat::Bincode);
        assert_eq!(config.player1_name, "Ada");
        assert_eq!(config.player2_name, "Player2");
        assert!(config.persist);
    }

    #[test]
    fn test_interactive_only() {
        let config = SessionConfig::from_toml("persist = false").unwrap();
        assert!(!config.persist);
    }

    #[test]
    fn test_bad_toml() {
        let err = SessionConfig::from_toml("persist = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_same_names_rejected() {
        let err = SessionConfig::from_toml(
            r#"
            player1_name = "ada"
            player2_name = "ADA"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "config validation error: player names must differ");
    }

    #[test]
    fn test_multi_word_name_rejected() {
        let err = SessionConfig::from_toml("player2_name = \"Grace Hopper\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_save_path_rejected() {
        let err = SessionConfig::from_toml("save_path = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        // Irrelevant when nothing is persisted.
        assert!(SessionConfig::from_toml("persist = false\nsave_path = \"\"").is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SessionConfig::load_or_default(Path::new("/nonexistent/mancala.toml")).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_load_unreadable_path() {
        let err = SessionConfig::load(Path::new("/nonexistent/mancala.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
