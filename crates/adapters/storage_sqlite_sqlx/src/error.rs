//! Storage-specific error type wrapping sqlx errors.

use stayease_domain::error::StayEaseError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for StayEaseError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_storage_variant() {
        let err: StayEaseError = StorageError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, StayEaseError::Storage(_)));
    }

    #[test]
    fn should_expose_sqlx_message_in_full_message() {
        let err: StayEaseError = StorageError::Database(sqlx::Error::RowNotFound).into();
        let message = err.full_message();
        assert!(message.starts_with("storage error: database error: "));
        assert!(message.contains("no rows returned"));
    }
}
