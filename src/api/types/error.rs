//! Uniform error payload returned by every handler.
//!
//! All failures are reported as HTTP 200 with an `error` key; callers
//! distinguish success by the shape of the body, not the status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// `{"error": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Handler outcome: the endpoint's success body or the uniform error payload.
///
/// This is the single place a `Result` from the services becomes a JSON
/// response; the error message text is preserved verbatim.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Success(T),
    Error(ErrorResponse),
}

impl<T> From<Result<T, DomainError>> for ApiResponse<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(err) => Self::Error(ErrorResponse::new(err.to_string())),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(err) => (StatusCode::OK, Json(err)).into_response(),
        }
    }
}
