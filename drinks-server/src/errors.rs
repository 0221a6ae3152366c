use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope shared by every failed response
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// HTTP status code
    pub error: u16,
    /// Human readable description
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new ApiError with a message and status code
    pub fn new<S: ToString>(message: S, status_code: StatusCode) -> Self {
        Self {
            message: message.to_string(),
            status_code,
        }
    }

    /// Not Found (404)
    pub fn not_found() -> Self {
        Self::new("resource not found", StatusCode::NOT_FOUND)
    }

    /// Unprocessable Entity (422)
    pub fn unprocessable() -> Self {
        Self::new("unprocessable", StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Internal Server Error (500)
    pub fn internal() -> Self {
        Self::new("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Error for a failed public listing, using the configured status code.
    /// Codes outside the valid range fall back to 500.
    pub fn listing_failed(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(status_code) => Self::new("unable to list drinks", status_code),
            Err(_) => Self::internal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse {
            success: false,
            error: self.status_code.as_u16(),
            message: self.message,
        };
        (self.status_code, Json(body)).into_response()
    }
}
