//! Portfolio API — error types.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The content catalog could not be loaded.
    #[error("content error: {0}")]
    Content(DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain operation failed.
    Domain(DomainError),
    /// A path parameter could not be extracted.
    Path(PathRejection),
    /// An id segment was not a plain non-negative integer.
    InvalidId(String),
    /// A request body was not a JSON object.
    Body(JsonRejection),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Path(rejection)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(DomainError::NotFound { kind, .. }) => {
                (StatusCode::NOT_FOUND, format!("{kind} not found"))
            }
            Self::Domain(err @ (DomainError::DuplicateId { .. } | DomainError::Validation(_))) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(DomainError::Infrastructure(detail)) => {
                tracing::error!(%detail, "infrastructure error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
            Self::Path(rejection) => {
                tracing::debug!(%rejection, "path parameter rejected");
                (StatusCode::NOT_FOUND, "Not found".to_owned())
            }
            Self::InvalidId(raw) => {
                tracing::debug!(%raw, "malformed id rejected");
                (StatusCode::NOT_FOUND, "Not found".to_owned())
            }
            Self::Body(rejection) => {
                tracing::warn!(%rejection, "request body rejected");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_owned())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
