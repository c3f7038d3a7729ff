//! Error types for the NeuroTask server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::tasks::TaskError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("File too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Tasks(#[from] TaskError),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
            }
            AppError::Extract(e) => match e {
                ExtractError::UnsupportedFormat(_) => {
                    (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_format")
                }
                ExtractError::ConversionFailure(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "conversion_failure")
                }
                ExtractError::ReadFailure(_) => {
                    tracing::error!("read failure: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "read_failure")
                }
            },
            AppError::Tasks(e) => {
                tracing::error!("task generation failed: {}", e);
                match e {
                    TaskError::Api(_) => (StatusCode::BAD_GATEWAY, "api_error"),
                    TaskError::EmptyResponse => (StatusCode::BAD_GATEWAY, "empty_response"),
                    TaskError::Malformed(_) => (StatusCode::BAD_GATEWAY, "malformed_response"),
                }
            }
            AppError::Multipart(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
