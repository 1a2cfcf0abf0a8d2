use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to the wire envelope `{status, error, message}` —
/// numeric status code, HTTP reason phrase, human-readable message. No raw
/// stack trace ever crosses the request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generation provider returned a non-success status or the call
    /// itself failed. Terminal for the request; never retried.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating resume: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating resume: {e}"),
                )
            }
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "message": message,
        }));

        (status, body).into_response()
    }
}
