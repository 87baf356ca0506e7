//! API Error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reklamap_core::error::LedgerError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation {
        message: String,
        mismatches: Vec<String>,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            mismatches: Vec::new(),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation {
                message,
                mismatches,
            } => Self::Validation {
                message,
                mismatches,
            },
            LedgerError::NotFound(msg) => Self::NotFound(msg),
            LedgerError::Authorization(msg) => Self::Forbidden(msg),
            other => Self::InternalError(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.to_string(),
            mismatches: Vec::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new("NOT_FOUND", msg)),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg))
            }
            ApiError::Validation {
                message,
                mismatches,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    mismatches,
                    ..ErrorResponse::new("VALIDATION_ERROR", message)
                },
            ),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("UNAUTHORIZED", msg))
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse::new("FORBIDDEN", msg)),
            ApiError::InternalError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_errors_map_to_http() {
        let err: ApiError = LedgerError::mismatch("Mismatch", vec!["Lot Assignment".into()]).into();
        assert!(matches!(&err, ApiError::Validation { mismatches, .. } if mismatches.len() == 1));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: ApiError = LedgerError::NotFound("Complaint 9 not found".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err: ApiError = LedgerError::Authorization("no".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

        let err: ApiError = LedgerError::Storage("disk".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_omits_empty_mismatches() {
        let body = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "gone")).unwrap();
        assert_eq!(body["success"], false);
        assert!(body.get("mismatches").is_none());
    }
}
