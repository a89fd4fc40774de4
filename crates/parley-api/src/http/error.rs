//! Application error type mapping to HTTP status codes.
//!
//! Validation failures surface as `400 {"error": <message>}`; store failures
//! surface generically as `500 {"error": <message>}`. No other shapes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use parley_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Chat operation failure (validation or store).
    Chat(ChatError),
    /// Request-shape validation failure outside the core.
    Validation(String),
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        ApiError::Chat(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Chat(e) if e.is_validation() => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Chat(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
