//! Storage-specific error type wrapping IO and JSON errors.

use wanderlog_domain::error::WanderlogError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing or renaming a document failed.
    #[error("document io error")]
    Io(#[from] std::io::Error),

    /// A document is not a JSON array of records, or a record failed to
    /// serialize.
    #[error("document json error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for WanderlogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
