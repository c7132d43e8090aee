//! REST API handlers grouped by domain.

pub mod generate;
pub mod history;
pub mod settings;

use axum::Json;
use serde_json::{Value, json};

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::from_u16(status)
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// 422 response carrying per-field validation messages.
pub fn validation_json(
    report: &qr_payload::ValidationReport,
) -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "status": "error", "errors": report.to_map() })),
    )
}
