//! # HTTP Errors
//!
//! Error types returned by the plant routes. Every error renders as a
//! `{"error": "..."}` body with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::plants::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Route errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No plant with the requested id
    #[error("Plant not found")]
    NotFound,

    /// Storage rejected the insert
    #[error("Plant could not be created")]
    CreateFailed,

    /// Body is not JSON, or a field has the wrong type
    #[error("Invalid request body")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure or anything else unexpected
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::CreateFailed => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a store error from the create path.
    ///
    /// Constraint rejections become a 400; anything else stays a 500.
    pub fn from_create(err: StoreError) -> Self {
        if err.is_constraint() {
            ApiError::CreateFailed
        } else {
            ApiError::from(err)
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!(%detail, "request failed"),
            ApiError::InvalidBody(detail) => debug!(%detail, "rejected request body"),
            _ => {}
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::CreateFailed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidBody("expected value".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_hides_detail() {
        let body = ErrorResponse::from(&ApiError::Internal("disk full".to_string()));
        assert_eq!(body.error, "Internal server error");

        let body = ErrorResponse::from(&ApiError::NotFound);
        assert_eq!(body.error, "Plant not found");
    }

    #[test]
    fn test_create_maps_constraint_to_bad_request() {
        let err = ApiError::from_create(StoreError::Constraint("NOT NULL".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Plant could not be created");

        let err = ApiError::from_create(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
