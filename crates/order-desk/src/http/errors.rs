use crate::desk::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            OrderError::MalformedInput(_) => (StatusCode::BAD_REQUEST, "malformed_input"),
            OrderError::ProductNotFound(_) | OrderError::OrderNotFound(_) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            OrderError::InsufficientStock { .. } => (StatusCode::CONFLICT, "insufficient_stock"),
            OrderError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        };
        json_error(status, code, self.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub async fn method_not_supported() -> Response {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_supported",
        "method not supported on this path",
    )
}

pub async fn route_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "no such route")
}
