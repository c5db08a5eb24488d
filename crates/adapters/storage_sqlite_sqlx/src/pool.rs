//! `SQLite` connection pool setup, migration runner and setup-script execution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite::memory:`), used when `filename` is unset.
    pub database_url: String,
    /// Database file, passed through verbatim instead of being parsed as a URL.
    pub filename: Option<PathBuf>,
}

impl Config {
    /// Configuration for a connection URL.
    #[must_use]
    pub fn from_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            filename: None,
        }
    }

    /// Configuration for a database file at `path`.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        Self {
            database_url: String::new(),
            filename: Some(path.to_path_buf()),
        }
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, StorageError> {
        let options = match &self.filename {
            Some(path) => SqliteConnectOptions::new().filename(path),
            None => SqliteConnectOptions::from_str(&self.database_url)?,
        };
        Ok(options.create_if_missing(true))
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(self.connect_options()?).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
#[derive(Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    async fn initialize(options: SqliteConnectOptions) -> Result<Self, StorageError> {
        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a multi-statement SQL script inside a single transaction.
    ///
    /// Either every statement applies or none does.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if any statement fails.
    pub async fn run_script(&self, script: &str) -> Result<(), StorageError> {
        tracing::debug!(bytes = script.len(), "running setup script");
        let mut tx = self.pool.begin().await?;
        sqlx::raw_sql(script).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Close every pooled connection, releasing the database file.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
