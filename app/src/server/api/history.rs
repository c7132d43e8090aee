//! Generation history API:
//!   GET    /api/history – recent generated codes
//!   DELETE /api/history – clear history

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use super::err_json;
use crate::app::SharedState;

type ApiResult = Result<Json<Value>, (axum::http::StatusCode, Json<Value>)>;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    limit: Option<u32>,
}

/// GET /api/history
pub async fn get_history(
    State(state): State<SharedState>,
    Query(params): Query<HistoryParams>,
) -> ApiResult {
    let limit = match params.limit {
        Some(n) => n,
        None => state.config().await.history_limit,
    };

    let entries = state
        .db()
        .recent_history(limit)
        .map_err(|e| err_json(500, &format!("Failed to read history: {e}")))?;

    let count = entries.len();
    Ok(Json(json!({ "history": entries, "count": count })))
}

/// DELETE /api/history
pub async fn clear_history(State(state): State<SharedState>) -> ApiResult {
    state
        .db()
        .clear_history()
        .map_err(|e| err_json(500, &format!("Failed to clear history: {e}")))?;
    Ok(Json(json!({ "success": true })))
}
