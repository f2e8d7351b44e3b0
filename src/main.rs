use std::io;

use anyhow::{Context, Result};
use dedupdb::{config::Config, core::store::RecordStore, shell::Shell};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::default();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_ansi(config.log_color)
        .init();

    let store = RecordStore::open(&config.db_path)
        .with_context(|| format!("Failed to open database: {}", config.db_path.display()))?;

    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout().lock(), config.color);
    shell.run()?;
    Ok(())
}
