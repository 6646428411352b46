use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;

/// Uniform response envelope wrapping every bodied result:
/// `{ statusCode, isSuccess, errorMessages, content }`.
///
/// The envelope's status code always equals the transport status; an earlier
/// evolution of the handlers returned HTTP 200 with a failed envelope, which
/// was a bug and is not reproduced. 204 responses carry no body and bypass
/// the envelope entirely.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub error_messages: Vec<String>,
    pub content: Value,
}

impl ApiResponse {
    pub fn success(status: StatusCode, content: impl Serialize) -> Self {
        Self {
            status,
            error_messages: Vec::new(),
            content: serde_json::to_value(content).unwrap_or(Value::Null),
        }
    }

    pub fn failure(status: StatusCode, error_messages: Vec<String>) -> Self {
        Self {
            status,
            error_messages,
            content: Value::Null,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "isSuccess": self.status.is_success(),
            "errorMessages": self.error_messages,
            "content": self.content,
        });
        (self.status, Json(body)).into_response()
    }
}
