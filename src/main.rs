use std::sync::Arc;

use advanced_counter::cli::Cli;
use advanced_counter::config::Config;
use advanced_counter::logging::init_tracing;
use advanced_counter::storage::{FileStore, KeyValueStore};
use advanced_counter::ui::runtime;
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let log_path = config.log_path();
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let storage_path = config.storage_path();
    tracing::info!(
        storage = %storage_path.display(),
        debounce_ms = config.persistence.debounce_ms,
        "Starting advanced-counter"
    );
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(storage_path));

    runtime::run(&config, store)
        .await
        .context("Terminal UI failed")?;
    Ok(())
}
