pub mod app;
pub mod config;
pub mod debounce;
pub mod server;
pub mod services;

use std::path::PathBuf;

use qr_db::Database;

use config::{AppConfig, SettingsManager};

/// Determine the data directory for the application.
/// Priority: QR_STUDIO_DATA_DIR env var > ~/.qr-studio
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("QR_STUDIO_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".qr-studio")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Open the database, seed default settings, load the config snapshot.
///
/// A broken on-disk database degrades to an in-memory one: preferences
/// stop persisting but the application keeps working on defaults.
pub fn init_foundation() -> Result<(Database, AppConfig, PathBuf), anyhow::Error> {
    load_dotenv();

    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    let db_path = dir.join("local.db");

    tracing::info!("Opening database at {}", db_path.display());
    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database, falling back to in-memory: {e}");
            Database::open_in_memory()?
        }
    };

    let sm = SettingsManager::new(db.clone());
    if let Err(e) = sm.initialize_defaults() {
        tracing::error!("Failed to seed default settings: {e}");
    }

    let config = AppConfig::load(&sm);

    Ok((db, config, dir))
}
