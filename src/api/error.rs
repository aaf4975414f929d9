//--------------------------------------------------------------------------------------------------
// ENUMS
//--------------------------------------------------------------------------------------------------
// | Name            | Description                                      | Key Methods         |
// |-----------------|--------------------------------------------------|---------------------|
// | ApiError        | Error types for the API                          | internal, into_response |
//--------------------------------------------------------------------------------------------------

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The request was invalid
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error; `message` is the user-facing summary, `detail`
    /// carries the underlying failure text
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    /// Internal error carrying a user-facing summary plus the underlying
    /// store failure text.
    pub fn internal(message: impl Into<String>, err: StoreError) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            Self::Internal { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message, "error": detail })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ConnectError;

    #[test]
    fn test_api_error_display() {
        let bad_request = ApiError::BadRequest("Invalid slug format".to_string());
        assert_eq!(format!("{}", bad_request), "Invalid slug format");

        let internal = ApiError::Internal {
            message: "Failed to fetch event".to_string(),
            detail: "timed out".to_string(),
        };
        assert_eq!(format!("{}", internal), "Failed to fetch event: timed out");
    }

    #[test]
    fn test_internal_wraps_the_store_failure() {
        let err = ApiError::internal(
            "Failed to fetch event",
            StoreError::Connect(ConnectError::Unreachable("refused".to_string())),
        );
        match err {
            ApiError::Internal { message, detail } => {
                assert_eq!(message, "Failed to fetch event");
                assert_eq!(detail, "database unreachable: refused");
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
