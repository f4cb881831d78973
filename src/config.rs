//! Configuration file support
//!
//! The server reads an optional TOML file:
//!
//! ```toml
//! [board]
//! urgent_window_days = 3
//! unique_titles = true
//! history_limit = 100
//! ```
//!
//! Missing keys fall back to their defaults; unknown keys are rejected.

use crate::board::BoardSettings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board: BoardSettings,
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Load configuration from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges (also used after CLI overrides)
    pub fn validate(&self) -> Result<()> {
        if self.board.urgent_window_days < 0 {
            anyhow::bail!(
                "urgent_window_days must not be negative (got {})",
                self.board.urgent_window_days
            );
        }
        if self.board.history_limit == Some(0) {
            anyhow::bail!("history_limit must be at least 1; omit it for unlimited history");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.board.urgent_window_days, 3);
        assert!(config.board.unique_titles);
        assert_eq!(config.board.history_limit, None);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
    [board]
    urgent_window_days = 7
    "#,
        )
        .unwrap();
        assert_eq!(config.board.urgent_window_days, 7);
        assert!(config.board.unique_titles);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
    [board]
    urgent_window_days = 2
    unique_titles = false
    history_limit = 50
    "#,
        )
        .unwrap();
        assert_eq!(
            config.board,
            BoardSettings {
                urgent_window_days: 2,
                unique_titles: false,
                history_limit: Some(50),
            }
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::from_toml_str("[board]\nurgent_days = 2\n").is_err());
        assert!(Config::from_toml_str("[storage]\npath = \"x\"\n").is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml_str("[board]\nurgent_window_days = -1\n").is_err());
        assert!(Config::from_toml_str("[board]\nhistory_limit = 0\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[board]").unwrap();
        writeln!(file, "history_limit = 10").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.board.history_limit, Some(10));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Config::load("/nonexistent/coursework.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
