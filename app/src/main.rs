//! QR Studio server binary.
//!
//! Starts the axum web server serving the embedded frontend, the
//! generation API, and the WebSocket live preview.

use tracing_subscriber::EnvFilter;

use qr_studio::app::SharedState;
use qr_studio::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting QR Studio");

    let (db, config, dir) = qr_studio::init_foundation()?;
    let state = SharedState::new(db, config, dir);

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(
        port = state.server_port(),
        "QR Studio running. Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    state.shutdown_token().cancel();
    let _ = server_handle.await;

    Ok(())
}
