use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export_client::ExportError;
use crate::print::SnapshotError;
use crate::resumes::session::SessionError;
use crate::sources::SourceError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Access(String),

    #[error("Resume content not found. Please try again.")]
    RenderTargetMissing,

    /// The export service answered with an error. `message` is user-facing.
    #[error("Export service error (status {status}): {message}")]
    ExportService { status: u16, message: String },

    #[error("Export service unreachable: {0}")]
    ExportUnavailable(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(slug) => AppError::NotFound(format!("Resume '{slug}' not found")),
            SourceError::Access(slug) => {
                AppError::Access(format!("Resume '{slug}' is not public"))
            }
            SourceError::Unavailable(msg) => AppError::Upstream(msg),
            SourceError::Decode(msg) => AppError::Upstream(format!("Malformed resume record: {msg}")),
            SourceError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        let message = err.user_message();
        match err {
            ExportError::Timeout(_) => AppError::Timeout(message),
            ExportError::Network(_) => AppError::ExportUnavailable(message),
            ExportError::Service { status, .. } => AppError::ExportService { status, message },
        }
    }
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::RenderTargetMissing => AppError::RenderTargetMissing,
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Access(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            AppError::RenderTargetMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "RENDER_TARGET_MISSING",
                self.to_string(),
            ),
            AppError::ExportService { status, message } => {
                tracing::warn!(upstream_status = status, "Export service error: {message}");
                (StatusCode::BAD_GATEWAY, "EXPORT_FAILED", message.clone())
            }
            AppError::ExportUnavailable(msg) => {
                tracing::error!("Export service unreachable: {msg}");
                (StatusCode::BAD_GATEWAY, "EXPORT_UNAVAILABLE", msg.clone())
            }
            AppError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The resume service is unavailable. Please try again.".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
