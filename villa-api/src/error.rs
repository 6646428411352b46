use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;
use villa_data::DataError;

use crate::response::ApiResponse;

/// API error taxonomy. Client-shape problems and business-rule conflicts map
/// to 400, missing rows to 404, everything unexpected to 500. No retries
/// anywhere; failures surface immediately.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Business-rule conflict (duplicate villa name). Kept distinct from
    /// `BadRequest` for logging, but answered with the same 400 class.
    Conflict(String),
    Validation(Vec<String>),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, messages) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "write rejected by constraint");
                (StatusCode::BAD_REQUEST, vec![msg])
            }
            ApiError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "unexpected failure");
                (StatusCode::INTERNAL_SERVER_ERROR, vec![msg])
            }
        };
        ApiResponse::failure(status, messages).into_response()
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => ApiError::NotFound(msg),
            DataError::Conflict(msg) => ApiError::Conflict(msg),
            DataError::Database(e) => ApiError::Internal(e.to_string()),
            DataError::Other(msg) => ApiError::Internal(msg),
        }
    }
}

/// Flatten `validator` output into per-field `"field: message"` entries for
/// the envelope's error list.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let detail = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            messages.push(format!("{field}: {detail}"));
        }
    }
    messages.sort();
    messages
}
