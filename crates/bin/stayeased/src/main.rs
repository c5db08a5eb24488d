//! # stayeased: stayease API server
//!
//! - Load configuration and initialize tracing
//! - Bootstrap the configured booking store (exit code 1 on failure)
//! - Serve the JSON API until SIGINT/SIGTERM

use std::process::ExitCode;

use anyhow::Context;

use stayease_adapter_storage_sqlite_sqlx::SqliteBookingRepository;
use stayeased::config::{Backend, Config, DEFAULT_LOG_FILTER};
use stayeased::{bootstrap, server, telemetry};

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
    match config.storage.backend {
        Backend::Sqlite => {
            let database =
                bootstrap::ensure_database(&config.database.path, &config.database.setup_script)
                    .await
                    .context("database bootstrap failed")?;
            let repo = SqliteBookingRepository::new(database.pool().clone());
            let served = server::serve(repo, &config).await;
            database.close().await;
            served
        }
        Backend::Document => {
            let repo = server::open_document_repository(config.storage.document_path.as_deref())
                .await
                .context("failed to open document collection")?;
            server::serve(repo, &config).await
        }
    }
}
