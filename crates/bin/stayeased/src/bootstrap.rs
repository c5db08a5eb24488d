//! Store bootstrap: first-run database creation and the CSV import routine.
//!
//! Both leave no half-built database behind: a failed first run removes the
//! file it created, and the import inserts every row in one transaction.

use std::io;
use std::path::{Path, PathBuf};

use stayease_adapter_csv::CsvImportError;
use stayease_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, Database, SqliteBookingRepository, StorageError,
};
use stayease_domain::error::StayEaseError;

/// Errors that stop the process before it serves or imports anything.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The setup script needed to create the database is absent.
    #[error("setup script {} not found", path.display())]
    MissingScript { path: PathBuf },

    /// A file could not be read or removed.
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening the database or running the setup script failed.
    #[error("could not create database")]
    Storage(#[from] StorageError),

    /// The bookings CSV could not be parsed.
    #[error("could not read bookings csv")]
    Csv(#[from] CsvImportError),

    /// Inserting the imported bookings failed.
    #[error("could not insert bookings")]
    Insert(#[source] StayEaseError),
}

/// Open the database at `path`, creating it from `setup_script` if it does
/// not exist yet.
///
/// An existing file is opened as is; its pending migrations still run.
///
/// # Errors
///
/// Returns [`BootstrapError`] if the script is missing or unreadable, or if
/// creating the database fails. In the latter case the partial file is removed
/// and the creation error is returned even when the removal fails too.
pub async fn ensure_database(path: &Path, setup_script: &Path) -> Result<Database, BootstrapError> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "database found");
        return Ok(DatabaseConfig::for_path(path).build().await?);
    }

    tracing::info!(
        path = %path.display(),
        script = %setup_script.display(),
        "database not found, creating it"
    );
    let script = read_script(setup_script).await?;

    match create_database(path, &script).await {
        Ok(database) => {
            tracing::info!(path = %path.display(), "database created");
            Ok(database)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "database creation failed");
            if let Err(cleanup) = remove_database(path).await {
                tracing::warn!(error = %cleanup, "could not remove partial database");
            }
            Err(err.into())
        }
    }
}

async fn read_script(path: &Path) -> Result<String, BootstrapError> {
    match tokio::fs::read_to_string(path).await {
        Ok(script) => Ok(script),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(BootstrapError::MissingScript {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn create_database(path: &Path, script: &str) -> Result<Database, StorageError> {
    let database = DatabaseConfig::for_path(path).build().await?;
    if let Err(err) = database.run_script(script).await {
        database.close().await;
        return Err(err);
    }
    Ok(database)
}

async fn remove_database(path: &Path) -> Result<(), BootstrapError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::warn!(path = %path.display(), "removed partial database");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replace the database at `database_path` with the bookings read from `csv_path`.
///
/// The CSV is parsed in full before the old database is touched, and the rows
/// are inserted in a single transaction, so a bad file changes nothing and a
/// failed insert leaves an empty table.
///
/// Returns the number of imported bookings.
///
/// # Errors
///
/// Returns [`BootstrapError`] if the CSV is unreadable or malformed, or if
/// the database cannot be recreated or written.
pub async fn import_csv(database_path: &Path, csv_path: &Path) -> Result<usize, BootstrapError> {
    let bookings = stayease_adapter_csv::read_bookings_from_path(csv_path)?;
    tracing::info!(path = %csv_path.display(), rows = bookings.len(), "parsed bookings csv");

    if remove_existing(database_path).await? {
        tracing::info!(path = %database_path.display(), "removed old database");
    }

    let database = DatabaseConfig::for_path(database_path).build().await?;
    let repo = SqliteBookingRepository::new(database.pool().clone());
    let inserted = repo.insert_all(&bookings).await;
    database.close().await;

    let count = inserted.map_err(BootstrapError::Insert)?;
    tracing::info!(count, path = %database_path.display(), "imported bookings");
    Ok(count)
}

async fn remove_existing(path: &Path) -> Result<bool, BootstrapError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayease_app::ports::BookingRepository;

    const SCRIPT: &str = "
        CREATE TABLE IF NOT EXISTS bookings (booking_id TEXT PRIMARY KEY, name TEXT);
        INSERT INTO bookings (booking_id, name, email, cancelled)
        VALUES ('BK-1', 'Ann Lee', 'ann@example.com', 0);
    ";

    #[tokio::test]
    async fn should_create_database_from_script_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        let script_path = dir.path().join("setup.sql");
        std::fs::write(&script_path, SCRIPT).unwrap();

        let database = ensure_database(&db_path, &script_path).await.unwrap();

        let repo = SqliteBookingRepository::new(database.pool().clone());
        let found = repo.find_by_email("ann@example.com").await.unwrap();
        assert_eq!(found.unwrap().name, "Ann Lee");
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn should_open_existing_database_without_script() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        DatabaseConfig::for_path(&db_path)
            .build()
            .await
            .unwrap()
            .close()
            .await;

        let result = ensure_database(&db_path, &dir.path().join("absent.sql")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_without_creating_file_when_script_missing() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");

        let err = ensure_database(&db_path, &dir.path().join("absent.sql"))
            .await
            .unwrap_err();

        assert!(matches!(err, BootstrapError::MissingScript { .. }));
        assert!(!db_path.exists());
    }

    #[tokio::test]
    async fn should_remove_partial_database_when_script_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        let script_path = dir.path().join("setup.sql");
        std::fs::write(&script_path, "INSERT INTO no_such_table VALUES (1);").unwrap();

        let err = ensure_database(&db_path, &script_path).await.unwrap_err();

        assert!(matches!(err, BootstrapError::Storage(_)));
        assert!(!db_path.exists());
    }

    #[tokio::test]
    async fn should_report_creation_error_when_cleanup_also_fails() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        std::fs::write(&not_a_dir, "").unwrap();
        let script_path = dir.path().join("setup.sql");
        std::fs::write(&script_path, SCRIPT).unwrap();

        let err = ensure_database(&not_a_dir.join("stayease.db"), &script_path)
            .await
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Storage(_)));
    }

    const CSV: &str = "booking_id,name,age,gender,country,email,phone,booking_date,checkin_date,checkout_date,days_stayed,number_of_guests,room_type,price_per_night,promo_code,discount_pct,subtotal,total_paid,payment_method,booking_channel,special_requests,repeat_guest,cancelled,rating,review
BK-001,Ann Lee,34,Female,USA,ann@example.com,555-0101,2025-01-02,2025-02-01,2025-02-04,3,2,Deluxe,149.5,,0,448.5,448.5,Credit Card,Website,,FALSE,FALSE,4.5,Great";

    #[tokio::test]
    async fn should_replace_existing_database_when_importing() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        let csv_path = dir.path().join("bookings.csv");
        std::fs::write(&csv_path, CSV).unwrap();

        assert_eq!(import_csv(&db_path, &csv_path).await.unwrap(), 1);
        assert_eq!(import_csv(&db_path, &csv_path).await.unwrap(), 1);

        let database = DatabaseConfig::for_path(&db_path).build().await.unwrap();
        let repo = SqliteBookingRepository::new(database.pool().clone());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_keep_existing_database_when_csv_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        let csv_path = dir.path().join("bookings.csv");
        std::fs::write(&csv_path, CSV).unwrap();
        import_csv(&db_path, &csv_path).await.unwrap();

        std::fs::write(&csv_path, CSV.replace(",34,", ",old,")).unwrap();
        let err = import_csv(&db_path, &csv_path).await.unwrap_err();

        assert!(matches!(err, BootstrapError::Csv(_)));
        let database = DatabaseConfig::for_path(&db_path).build().await.unwrap();
        let repo = SqliteBookingRepository::new(database.pool().clone());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_leave_empty_table_when_insert_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stayease.db");
        let csv_path = dir.path().join("bookings.csv");
        let duplicated = format!("{CSV}\n{}", CSV.lines().nth(1).unwrap());
        std::fs::write(&csv_path, duplicated).unwrap();

        let err = import_csv(&db_path, &csv_path).await.unwrap_err();

        assert!(matches!(err, BootstrapError::Insert(_)));
        let database = DatabaseConfig::for_path(&db_path).build().await.unwrap();
        let repo = SqliteBookingRepository::new(database.pool().clone());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
