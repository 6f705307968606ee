//! Rules configuration.
//!
//! Rule switches live in a small TOML file so a caller can choose between
//! full chess legality and the purely geometric rules without recompiling.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Switches that change which moves the validator accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Accept moves that leave the mover's own king attacked.
    ///
    /// Off by default. When on, legality is geometry plus occupancy only.
    pub allow_self_check: bool,
}

impl RulesConfig {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the configuration at `path`.
    ///
    /// Returns the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("no rules config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_forbid_self_check() {
        assert!(!RulesConfig::default().allow_self_check);
    }

    #[test]
    fn parse_toml() {
        let config = RulesConfig::from_toml_str("allow_self_check = true").unwrap();
        assert!(config.allow_self_check);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = RulesConfig::from_toml_str("allow_self_check = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = RulesConfig::load("does/not/exist/rules.toml").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn load_applies_file_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "allow_self_check = true\n").unwrap();

        let config = RulesConfig::load(&path).unwrap();
        assert!(config.allow_self_check);
    }

    #[test]
    fn load_reports_invalid_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "allow_self_check = 1").unwrap();

        let err = RulesConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RulesConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
