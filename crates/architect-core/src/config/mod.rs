//! Configuration management for the prompt architect.
//!
//! Configuration is loaded from a platform config directory with sensible
//! defaults; a missing file is not an error. All config structs implement
//! `Default` with values matching the shipped behavior.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model endpoint and generation parameters
    pub model: ModelConfig,

    /// Resource limits for media intake
    pub limits: LimitsConfig,

    /// Instruction templates per synthesis mode
    pub instructions: InstructionConfig,

    /// Export/copy formatting
    pub export: ExportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.architect.architect/config.toml
    /// - Linux: ~/.config/architect/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\architect\config\config.toml
    ///
    /// Falls back to ~/.architect/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "architect", "architect")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".architect").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.name, "gemini-3-pro-preview");
        assert_eq!(config.model.thinking_budget, 32768);
        assert_eq!(config.limits.max_media_size_mb, 20);
    }

    #[test]
    fn test_default_temperature_is_low() {
        let config = Config::default();
        assert!(config.model.temperature <= 0.5);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[model]"));
        assert!(toml.contains("[instructions]"));
        assert!(toml.contains("[export]"));
    }

    #[test]
    fn test_load_from_round_trip() {
        let config = Config::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml().unwrap().as_bytes()).unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.model.name, config.model.name);
        assert_eq!(loaded.export.midjourney, config.export.midjourney);
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[model]\nname = \"gemini-2.5-flash\"\n")
            .unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.model.name, "gemini-2.5-flash");
        // Untouched sections keep their defaults
        assert_eq!(loaded.limits.max_media_size_mb, 20);
        assert!(loaded.instructions.blueprint.contains("{idea}"));
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[model]\ntemperature = 9.0\n").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
