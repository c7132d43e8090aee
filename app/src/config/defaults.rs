//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

const DEFS: &[SettingDef] = &[
    SettingDef {
        key: "FOREGROUND_COLOR",
        default: "#000000",
        description: "QR module color (#rrggbb)",
    },
    SettingDef {
        key: "BACKGROUND_COLOR",
        default: "#ffffff",
        description: "QR background color (#rrggbb)",
    },
    SettingDef {
        key: "QR_SIZE",
        default: "256",
        description: "Rendered image edge length in pixels",
    },
    SettingDef {
        key: "ERROR_CORRECTION_LEVEL",
        default: "M",
        description: "QR error correction level (L, M, Q, H)",
    },
    SettingDef {
        key: "THEME",
        default: "light",
        description: "Frontend theme (light or dark)",
    },
    SettingDef {
        key: "SERVER_PORT",
        default: "8080",
        description: "HTTP server port",
    },
    SettingDef {
        key: "DEBOUNCE_MS",
        default: "500",
        description: "Live-preview debounce delay in milliseconds",
    },
    SettingDef {
        key: "HISTORY_LIMIT",
        default: "50",
        description: "Number of generated codes kept in history",
    },
];

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, &'static SettingDef>> =
    LazyLock::new(|| DEFS.iter().map(|def| (def.key, def)).collect());

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_record() {
        assert_eq!(get_default("FOREGROUND_COLOR"), Some("#000000"));
        assert_eq!(get_default("BACKGROUND_COLOR"), Some("#ffffff"));
        assert_eq!(get_default("QR_SIZE"), Some("256"));
        assert_eq!(get_default("ERROR_CORRECTION_LEVEL"), Some("M"));
        assert_eq!(get_default("THEME"), Some("light"));
        assert_eq!(get_default("NOT_A_KEY"), None);
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(DEFAULT_SETTINGS.len(), DEFS.len());
    }
}
