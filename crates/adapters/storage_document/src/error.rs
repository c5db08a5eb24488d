//! Document store error types.

use std::path::PathBuf;

use stayease_domain::error::StayEaseError;

/// Errors originating from the document collection.
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access collection file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file or a stored document is not valid JSON for its target type.
    #[error("malformed document")]
    Json(#[from] serde_json::Error),
}

impl From<DocumentStoreError> for StayEaseError {
    fn from(err: DocumentStoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}
