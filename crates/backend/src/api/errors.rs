use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error body shared by every API route: `{"error": "<message>"}`.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Error body that still carries the created product, for workflows
/// that fail after the create step already succeeded.
pub fn json_error_with_product(
    status: StatusCode,
    message: &str,
    product: serde_json::Value,
) -> Response {
    (
        status,
        Json(json!({ "error": message, "product": product })),
    )
        .into_response()
}
