//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings file location. Defaults to the standard config directory
    /// when not set here or on the command line.
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file.
    ///
    /// Path resolution: CLI argument, then `TRADELOG_CONFIG`, then
    /// `tradelog.toml`. A missing file is not an error.
    pub fn load(cli_path: Option<&str>) -> AppResult<Self> {
        let config_path = cli_path
            .map(str::to_string)
            .or_else(|| std::env::var("TRADELOG_CONFIG").ok())
            .unwrap_or_else(|| "tradelog.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// The settings file to operate on.
    pub fn settings_file(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(tradelog_persistence::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.settings_path.is_none());
        assert!(config.settings_file().ends_with("settings.json"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "settings_path = \"/tmp/custom/settings.json\"").unwrap();

        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            config.settings_file(),
            PathBuf::from("/tmp/custom/settings.json")
        );
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.settings_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "settings_path = [broken").unwrap();

        let err = AppConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some("/definitely/not/here/tradelog.toml")).unwrap();
        assert!(config.settings_path.is_none());
    }
}
