//! Error types and result aliases for the usage dashboard

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] crate::services::UpstreamError),

    #[error("Usage error: {0}")]
    Usage(#[from] crate::services::UsageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

/// Error response structure for the HTTP API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        let (code, message) = match &err {
            AppError::Upstream(e) => ("UPSTREAM_ERROR", e.to_string()),
            AppError::Usage(e) => ("USAGE_ERROR", e.to_string()),
            AppError::Io(e) => ("IO_ERROR", e.to_string()),
        };

        ErrorResponse {
            code: code.to_string(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorResponse::from(self);
        (status, Json(body)).into_response()
    }
}
