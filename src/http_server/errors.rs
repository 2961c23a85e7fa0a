//! HTTP API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the HTTP boundary.
///
/// Upload failures keep the original service contract: anything the
/// normalizer, schema synthesizer, or store rejects during ingest maps to a
/// 500 with the detail string. 400 covers request-shape problems (no file
/// part, empty or malformed JSON body).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed request body or missing upload part
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// No table exists yet (pre-upload state)
    #[error("no table has been uploaded yet")]
    NoTable,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Ingest failure (normalizer, schema, or store)
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// Unexpected failure in a record operation
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NoTable => StatusCode::NOT_FOUND,
            ApiError::UploadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NoTable.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UploadFailed("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_carries_code_and_detail() {
        let body = ErrorResponse::from(ApiError::UploadFailed("CSV has no header row".into()));
        assert_eq!(body.code, 500);
        assert!(body.error.contains("no header row"));
    }
}
