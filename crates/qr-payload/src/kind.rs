//! Input type selection.

use serde::{Deserialize, Serialize};

/// The content type currently being edited. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Url,
    Text,
    Wifi,
    Email,
    Sms,
}

impl InputKind {
    pub const ALL: [InputKind; 5] = [
        InputKind::Url,
        InputKind::Text,
        InputKind::Wifi,
        InputKind::Email,
        InputKind::Sms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Url => "url",
            InputKind::Text => "text",
            InputKind::Wifi => "wifi",
            InputKind::Email => "email",
            InputKind::Sms => "sms",
        }
    }

    /// Parse a kind label as sent by the frontend.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "url" => Some(InputKind::Url),
            "text" => Some(InputKind::Text),
            "wifi" => Some(InputKind::Wifi),
            "email" => Some(InputKind::Email),
            "sms" => Some(InputKind::Sms),
            _ => None,
        }
    }
}

/// The URL tab is active on startup.
impl Default for InputKind {
    fn default() -> Self {
        InputKind::Url
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
