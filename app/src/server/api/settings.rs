//! Settings management API:
//!   GET  /api/settings        – all settings merged over defaults
//!   PUT  /api/settings        – update settings
//!   POST /api/settings/reset  – reset settings to defaults
//!   POST /api/theme/toggle    – flip the light/dark theme

use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use super::err_json;
use crate::app::SharedState;
use crate::config::SettingsManager;

type ApiResult = Result<Json<Value>, (axum::http::StatusCode, Json<Value>)>;

/// GET /api/settings
pub async fn get_settings(State(state): State<SharedState>) -> ApiResult {
    let sm = SettingsManager::new(state.db().clone());
    Ok(Json(json!({ "settings": sm.get_all_settings() })))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<SharedState>,
    Json(body): Json<HashMap<String, String>>,
) -> ApiResult {
    let sm = SettingsManager::new(state.db().clone());

    // All-or-nothing: a batch with one bad entry writes nothing.
    let updated = sm
        .update_bulk(&body)
        .map_err(|e| err_json(400, &e.to_string()))?;

    state.reload_config().await;

    Ok(Json(json!({
        "success": true,
        "message": format!("Updated {updated} setting(s) successfully"),
        "settings": sm.get_all_settings(),
    })))
}

/// POST /api/settings/reset
pub async fn reset_settings(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> ApiResult {
    let sm = SettingsManager::new(state.db().clone());
    let keys: Vec<String> = body
        .get("keys")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    let reset = sm.reset(&keys);
    state.reload_config().await;

    Ok(Json(json!({
        "success": true,
        "reset": reset,
        "settings": sm.get_all_settings(),
    })))
}

/// POST /api/theme/toggle
pub async fn toggle_theme(State(state): State<SharedState>) -> ApiResult {
    let sm = SettingsManager::new(state.db().clone());

    let next = if sm.get_setting("THEME") == "light" {
        "dark"
    } else {
        "light"
    };
    sm.set_setting("THEME", next)
        .map_err(|e| err_json(500, &e.to_string()))?;
    state.reload_config().await;

    Ok(Json(json!({ "theme": next })))
}
