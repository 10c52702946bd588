//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WanderlogError`] via `#[from]`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum WanderlogError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A request carried data that cannot become a record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or falsy.
    #[error("missing required data fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// A visit referenced a landmark that does not exist.
    #[error("unknown landmark {0}")]
    UnknownLandmark(String),
}

/// No record with the requested id exists in the collection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
