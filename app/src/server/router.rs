use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::{api, assets, websocket};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        // --- Generation ---
        .route("/api/qr", post(api::generate::generate_json))
        .route("/api/qr/png", post(api::generate::generate_png))
        // --- Settings ---
        .route(
            "/api/settings",
            get(api::settings::get_settings).put(api::settings::update_settings),
        )
        .route("/api/settings/reset", post(api::settings::reset_settings))
        .route("/api/theme/toggle", post(api::settings::toggle_theme))
        // --- History ---
        .route(
            "/api/history",
            get(api::history::get_history).delete(api::history::clear_history),
        )
        // --- Frontend ---
        .route("/", get(assets::index))
        .fallback(assets::fallback)
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
