//! Error responses for the student API.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::repository::RepositoryError;

/// Which mutation failed to persist. Selects the 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Save => write!(f, "save"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// An API failure, rendered as `{"error": <message>}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The body did not parse as JSON of the expected shape.
    #[error("Invalid JSON")]
    InvalidJson,
    /// A create body lacked one of the required fields.
    #[error("Missing required fields")]
    MissingFields,
    /// Create with an id that is already stored.
    #[error("Student ID already exists")]
    DuplicateId,
    /// Update or delete of an id that is not stored.
    #[error("Student not found")]
    NotFound,
    /// The data file could not be rewritten.
    #[error("Failed to {0} data")]
    PersistFailed(Operation),
}

impl ApiError {
    /// Map a repository failure for the given mutation.
    pub fn from_repository(err: RepositoryError, operation: Operation) -> Self {
        match err {
            RepositoryError::DuplicateId(_) => ApiError::DuplicateId,
            RepositoryError::NotFound(_) => ApiError::NotFound,
            RepositoryError::Persist(_) => ApiError::PersistFailed(operation),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::DuplicateId => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PersistFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
