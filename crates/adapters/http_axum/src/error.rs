//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wanderlog_domain::error::{ValidationError, WanderlogError};

pub const NOT_FOUND: &str = "Not found";
pub const MISSING_FIELDS: &str = "Missing required data fields";
pub const UNKNOWN_LANDMARK: &str = "Unknown landmark";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// JSON body used for errors and plain confirmations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl MessageBody {
    #[must_use]
    pub fn json(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

/// Maps [`WanderlogError`] to an HTTP response with appropriate status code.
pub struct ApiError {
    error: WanderlogError,
    storage_message: &'static str,
}

impl ApiError {
    /// Replace the message reported for storage failures on this route.
    #[must_use]
    pub fn storage_message(mut self, message: &'static str) -> Self {
        self.storage_message = message;
        self
    }
}

impl From<WanderlogError> for ApiError {
    fn from(error: WanderlogError) -> Self {
        Self {
            error,
            storage_message: INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.error {
            WanderlogError::Validation(ValidationError::MissingRequiredFields(_)) => {
                (StatusCode::BAD_REQUEST, MISSING_FIELDS)
            }
            WanderlogError::Validation(ValidationError::UnknownLandmark(_)) => {
                (StatusCode::BAD_REQUEST, UNKNOWN_LANDMARK)
            }
            WanderlogError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND),
            WanderlogError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.storage_message)
            }
        };

        (status, MessageBody::json(message)).into_response()
    }
}
