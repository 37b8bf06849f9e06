use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal counter with keyboard shortcuts, history and debounced persistence.
#[derive(Debug, Parser)]
#[command(name = "advanced-counter", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/advanced-counter/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file holding the persisted count
    #[arg(long, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Quiet period before the count is written, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Log file (default: data dir/advanced-counter/advanced-counter.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlays command-line values on the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.storage {
            config.persistence.storage_path = Some(path.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config.persistence.debounce_ms = ms;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
