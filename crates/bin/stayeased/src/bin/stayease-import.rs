//! # stayease-import: one-shot CSV import
//!
//! Usage: `stayease-import [CSV_PATH]`
//!
//! Recreates the configured `SQLite` database from a bookings CSV. Without an
//! argument the path comes from `import.csv_path`. Exits 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use stayeased::bootstrap;
use stayeased::config::{Config, DEFAULT_LOG_FILTER};
use stayeased::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::load();
    telemetry::init(
        config
            .as_ref()
            .map_or(DEFAULT_LOG_FILTER, |c| c.logging.filter.as_str()),
    );

    let result = match config {
        Ok(config) => run(config).await,
        Err(err) => Err(anyhow::Error::from(err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let csv_path = std::env::args_os()
        .nth(1)
        .map_or(config.import.csv_path, PathBuf::from);

    let count = bootstrap::import_csv(&config.database.path, &csv_path)
        .await
        .with_context(|| format!("import from {} failed", csv_path.display()))?;

    tracing::info!(
        count,
        database = %config.database.path.display(),
        "import complete"
    );
    Ok(())
}
