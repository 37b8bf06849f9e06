use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key the counter value is stored under unless overridden.
pub const DEFAULT_STORAGE_KEY: &str = "advanced-counter-value";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Key the current count is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Step value at mount (default: 1).
    #[serde(default = "default_initial_step")]
    pub initial_step: i64,
}

/// Debounced persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Quiescence period before a write fires, in milliseconds (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Write a pending value on exit instead of dropping it (default: false).
    #[serde(default)]
    pub flush_on_exit: bool,
    /// Storage file location. Defaults to the user data directory.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file location. Defaults to the user data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_initial_step() -> i64 {
    1
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            initial_step: default_initial_step(),
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            flush_on_exit: false,
            storage_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
