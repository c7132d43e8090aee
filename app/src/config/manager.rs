//! SettingsManager: store-backed settings with defaults and validation.
//!
//! Reads merge over defaults and never fail the caller; write failures
//! against the store are logged and swallowed so a broken database
//! degrades to session-only preferences.

use std::collections::HashMap;

use qr_db::Database;

use super::SettingInfo;
use super::defaults::DEFAULT_SETTINGS;
use super::validation::validate_setting;

/// Wraps [`Database`] to provide high-level settings operations.
pub struct SettingsManager {
    db: Database,
}

impl SettingsManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a setting value, falling back to its default. Unknown keys
    /// yield an empty string.
    pub fn get_setting(&self, key: &str) -> String {
        match self.db.get_setting(key) {
            Ok(Some(val)) => return val,
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read setting {key}: {e}"),
        }
        super::defaults::get_default(key).unwrap_or("").to_string()
    }

    /// Check a key/value pair without writing it.
    pub fn validate(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        if !DEFAULT_SETTINGS.contains_key(key) {
            anyhow::bail!("unknown setting key: {key}");
        }
        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))
    }

    /// Set a setting value with validation. Persistence failures are
    /// logged, not surfaced.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        self.validate(key, value)?;

        if let Err(e) = self.db.set_setting(key, value) {
            tracing::error!("Failed to persist setting {key}: {e}");
        }
        Ok(())
    }

    /// Apply a batch of settings. Every entry is validated before any
    /// write happens, so a batch with one bad entry changes nothing.
    pub fn update_bulk(&self, entries: &HashMap<String, String>) -> Result<u32, anyhow::Error> {
        for (key, value) in entries {
            self.validate(key, value)?;
        }

        let mut updated = 0u32;
        for (key, value) in entries {
            self.set_setting(key, value)?;
            updated += 1;
        }
        Ok(updated)
    }

    /// Get all settings, filling in defaults for missing keys.
    pub fn get_all_settings(&self) -> HashMap<String, SettingInfo> {
        let stored = match self.db.get_all_settings() {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to read settings, using defaults: {e}");
                HashMap::new()
            }
        };

        DEFAULT_SETTINGS
            .values()
            .map(|def| {
                let value = stored.get(def.key).cloned().unwrap_or_else(|| def.default.to_string());
                (
                    def.key.to_string(),
                    SettingInfo {
                        key: def.key.to_string(),
                        value,
                        default: def.default.to_string(),
                        description: def.description.to_string(),
                    },
                )
            })
            .collect()
    }

    /// Initialize default settings in the store (skip existing).
    pub fn initialize_defaults(&self) -> Result<(), anyhow::Error> {
        for def in DEFAULT_SETTINGS.values() {
            if self.db.get_setting(def.key)?.is_some() {
                continue;
            }
            self.db.set_setting(def.key, def.default)?;
        }
        Ok(())
    }

    /// Reset the given keys (or every known key) to their defaults.
    pub fn reset(&self, keys: &[String]) -> Vec<String> {
        let targets: Vec<&'static str> = if keys.is_empty() {
            DEFAULT_SETTINGS.keys().copied().collect()
        } else {
            keys.iter()
                .filter_map(|k| DEFAULT_SETTINGS.get(k.as_str()).map(|d| d.key))
                .collect()
        };

        let mut reset = Vec::new();
        for key in targets {
            let default = super::defaults::get_default(key).unwrap_or("");
            if let Err(e) = self.db.set_setting(key, default) {
                tracing::error!("Failed to reset setting {key}: {e}");
                continue;
            }
            reset.push(key.to_string());
        }
        reset
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manager() -> SettingsManager {
        SettingsManager::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let sm = test_manager();
        assert_eq!(sm.get_setting("THEME"), "light");
        assert_eq!(sm.get_setting("QR_SIZE"), "256");
        assert_eq!(sm.get_setting("NO_SUCH_KEY"), "");
    }

    #[test]
    fn set_then_get_round_trips() {
        let sm = test_manager();
        sm.set_setting("THEME", "dark").unwrap();
        assert_eq!(sm.get_setting("THEME"), "dark");
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let sm = test_manager();
        assert!(sm.set_setting("BOGUS", "1").is_err());
        assert!(sm.set_setting("QR_SIZE", "banana").is_err());
        // Rejected writes leave the stored value untouched.
        assert_eq!(sm.get_setting("QR_SIZE"), "256");
    }

    #[test]
    fn bulk_update_with_a_bad_entry_changes_nothing() {
        let sm = test_manager();
        let batch: HashMap<String, String> = [
            ("THEME", "dark"),
            ("QR_SIZE", "512"),
            ("FOREGROUND_COLOR", "#ff0000"),
            ("DEBOUNCE_MS", "banana"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert!(sm.update_bulk(&batch).is_err());
        assert_eq!(sm.get_setting("THEME"), "light");
        assert_eq!(sm.get_setting("QR_SIZE"), "256");
        assert_eq!(sm.get_setting("FOREGROUND_COLOR"), "#000000");
    }

    #[test]
    fn bulk_update_applies_valid_batches() {
        let sm = test_manager();
        let batch: HashMap<String, String> = [("THEME", "dark"), ("QR_SIZE", "512")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(sm.update_bulk(&batch).unwrap(), 2);
        assert_eq!(sm.get_setting("THEME"), "dark");
        assert_eq!(sm.get_setting("QR_SIZE"), "512");
    }

    #[test]
    fn get_all_merges_stored_values_over_defaults() {
        let sm = test_manager();
        sm.set_setting("FOREGROUND_COLOR", "#ff0000").unwrap();

        let all = sm.get_all_settings();
        assert_eq!(all["FOREGROUND_COLOR"].value, "#ff0000");
        assert_eq!(all["FOREGROUND_COLOR"].default, "#000000");
        assert_eq!(all["BACKGROUND_COLOR"].value, "#ffffff");
        assert_eq!(all.len(), DEFAULT_SETTINGS.len());
    }

    #[test]
    fn reset_restores_defaults() {
        let sm = test_manager();
        sm.set_setting("THEME", "dark").unwrap();
        sm.set_setting("QR_SIZE", "512").unwrap();

        let reset = sm.reset(&["THEME".to_string()]);
        assert_eq!(reset, vec!["THEME".to_string()]);
        assert_eq!(sm.get_setting("THEME"), "light");
        assert_eq!(sm.get_setting("QR_SIZE"), "512");

        sm.reset(&[]);
        assert_eq!(sm.get_setting("QR_SIZE"), "256");
    }
}
