//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "FOREGROUND_COLOR" | "BACKGROUND_COLOR" => {
            if !RE_HEX_COLOR.is_match(value) {
                return Err("must be a #rrggbb hex color".into());
            }
        }
        "QR_SIZE" => validate_int_range(value, 64, 1024)?,
        "ERROR_CORRECTION_LEVEL" => {
            if !matches!(value, "L" | "M" | "Q" | "H") {
                return Err("must be one of L, M, Q, H".into());
            }
        }
        "THEME" => {
            if value != "light" && value != "dark" {
                return Err("must be 'light' or 'dark'".into());
            }
        }
        "SERVER_PORT" => {
            let v: u16 = value.parse().map_err(|_| "must be a port number")?;
            if v == 0 {
                return Err("must be non-zero".into());
            }
        }
        "DEBOUNCE_MS" => validate_int_range(value, 0, 5000)?,
        "HISTORY_LIMIT" => validate_int_range(value, 0, 1000)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_must_be_six_digit_hex() {
        assert!(validate_setting("FOREGROUND_COLOR", "#1a2B3c").is_ok());
        assert!(validate_setting("FOREGROUND_COLOR", "#fff").is_err());
        assert!(validate_setting("BACKGROUND_COLOR", "white").is_err());
    }

    #[test]
    fn size_is_range_checked() {
        assert!(validate_setting("QR_SIZE", "256").is_ok());
        assert!(validate_setting("QR_SIZE", "32").is_err());
        assert!(validate_setting("QR_SIZE", "4096").is_err());
        assert!(validate_setting("QR_SIZE", "big").is_err());
    }

    #[test]
    fn error_correction_level_is_a_closed_set() {
        for lvl in ["L", "M", "Q", "H"] {
            assert!(validate_setting("ERROR_CORRECTION_LEVEL", lvl).is_ok());
        }
        assert!(validate_setting("ERROR_CORRECTION_LEVEL", "X").is_err());
        assert!(validate_setting("ERROR_CORRECTION_LEVEL", "m").is_err());
    }

    #[test]
    fn theme_is_light_or_dark() {
        assert!(validate_setting("THEME", "light").is_ok());
        assert!(validate_setting("THEME", "dark").is_ok());
        assert!(validate_setting("THEME", "solarized").is_err());
    }

    #[test]
    fn unknown_keys_pass_value_validation() {
        // Key existence is checked by the settings manager, not here.
        assert!(validate_setting("SOMETHING_ELSE", "whatever").is_ok());
    }
}
