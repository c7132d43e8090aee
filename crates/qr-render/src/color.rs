//! Hex color parsing for render options.

use crate::RenderError;

/// Parse a `#rrggbb` color as used by the customization panel.
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], RenderError> {
    let hex = s.trim();
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| RenderError::InvalidColor(s.to_string()))?;

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| RenderError::InvalidColor(s.to_string()))
    };

    Ok([byte(0..2)?, byte(2..4)?, byte(4..6)?])
}
