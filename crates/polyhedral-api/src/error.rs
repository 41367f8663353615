//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use polyhedral_core::error::DomainError;
use polyhedral_registry::ManifestError;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Registry construction failed; startup must abort.
    #[error("registry error: {0}")]
    Registry(#[from] ManifestError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error for request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed `(system, version)` has no registered implementation.
    /// The registry reports this as plain absence; it only becomes a 404
    /// here, at the edge.
    #[error("system not supported: {0}")]
    SystemNotSupported(String),

    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::SystemNotSupported(_) => (StatusCode::NOT_FOUND, "system_not_supported"),
            Self::Domain(err) => match err {
                DomainError::CampaignNotFound(_) => (StatusCode::NOT_FOUND, "campaign_not_found"),
                DomainError::UnsupportedCommand { .. } => {
                    (StatusCode::BAD_REQUEST, "unsupported_command")
                }
                DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                DomainError::Infrastructure(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                }
            },
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
