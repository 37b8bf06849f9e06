use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "advanced-counter";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/advanced-counter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("config.toml")
    }

    /// Directory holding the storage file and log file by default.
    pub fn data_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join(APP_DIR)
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The storage key is not blank
    /// - The debounce period is non-zero
    /// - The initial step is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.storage_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "counter.storage_key must not be empty".to_string(),
            });
        }

        if self.persistence.debounce_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "persistence.debounce_ms must be greater than zero".to_string(),
            });
        }

        if self.counter.initial_step < 1 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "counter.initial_step must be positive, got {}",
                    self.counter.initial_step
                ),
            });
        }

        Ok(())
    }

    /// Resolved storage file path.
    pub fn storage_path(&self) -> PathBuf {
        self.persistence
            .storage_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("storage.json"))
    }

    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("advanced-counter.log"))
    }
}
