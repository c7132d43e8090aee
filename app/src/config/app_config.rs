//! Runtime application configuration loaded from the settings store.

use qr_render::{ErrorCorrection, RenderOptions, parse_hex_color};

use super::manager::SettingsManager;

/// Runtime configuration snapshot populated from the settings store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub foreground_color: String,
    pub background_color: String,
    pub size: u32,
    pub error_correction_level: ErrorCorrection,
    pub theme: String,
    pub server_port: u16,
    pub debounce_ms: u64,
    pub history_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            foreground_color: "#000000".into(),
            background_color: "#ffffff".into(),
            size: 256,
            error_correction_level: ErrorCorrection::M,
            theme: "light".into(),
            server_port: 8080,
            debounce_ms: 500,
            history_limit: 50,
        }
    }
}

impl AppConfig {
    /// Load configuration from the settings manager. Unparseable stored
    /// values fall back to defaults; SERVER_PORT may be overridden from
    /// the environment.
    pub fn load(sm: &SettingsManager) -> Self {
        let g = |key: &str| sm.get_setting(key);

        let mut server_port = parse_u16(&g("SERVER_PORT"), 8080);
        if let Ok(v) = std::env::var("SERVER_PORT") {
            if let Ok(p) = v.parse::<u16>() {
                server_port = p;
            }
        }

        Self {
            foreground_color: non_empty(g("FOREGROUND_COLOR"), "#000000"),
            background_color: non_empty(g("BACKGROUND_COLOR"), "#ffffff"),
            size: parse_u32(&g("QR_SIZE"), 256),
            error_correction_level: ErrorCorrection::from_label(&g("ERROR_CORRECTION_LEVEL")),
            theme: non_empty(g("THEME"), "light"),
            server_port,
            debounce_ms: parse_u64(&g("DEBOUNCE_MS"), 500),
            history_limit: parse_u32(&g("HISTORY_LIMIT"), 50),
        }
    }

    /// Reload config from the settings manager.
    pub fn reload(&mut self, sm: &SettingsManager) {
        *self = Self::load(sm);
    }

    /// Render options for the current settings. Colors that fail to
    /// parse degrade to black-on-white.
    pub fn render_options(&self) -> RenderOptions {
        let foreground = parse_hex_color(&self.foreground_color).unwrap_or_else(|e| {
            tracing::warn!("Bad foreground color, using default: {e}");
            [0, 0, 0]
        });
        let background = parse_hex_color(&self.background_color).unwrap_or_else(|e| {
            tracing::warn!("Bad background color, using default: {e}");
            [255, 255, 255]
        });

        RenderOptions {
            size: self.size,
            foreground,
            background,
            error_correction: self.error_correction_level,
        }
    }
}

fn non_empty(s: String, default: &str) -> String {
    if s.is_empty() { default.to_string() } else { s }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_u32(s: &str, default: u32) -> u32 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
