//! Typed field sets per input kind.
//!
//! The UI glue builds these from whatever widgets exist; the core never
//! reaches into a UI tree. Values are raw strings, possibly empty —
//! trimming happens in the validator and formatter.

use serde::{Deserialize, Serialize};

use crate::kind::InputKind;

/// Wi-Fi security label, inserted verbatim into the `WIFI:` payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiSecurity {
    pub fn label(&self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Nopass => "nopass",
        }
    }

    /// Parse a security label from the frontend. Unknown values fall back
    /// to WPA, the same default an absent selection gets.
    pub fn from_label(s: &str) -> Self {
        match s {
            "WEP" => WifiSecurity::Wep,
            "nopass" => WifiSecurity::Nopass,
            _ => WifiSecurity::Wpa,
        }
    }
}

/// The raw field values for one input kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldSet {
    Url {
        url: String,
    },
    Text {
        text: String,
    },
    Wifi {
        ssid: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        security: WifiSecurity,
    },
    Email {
        address: String,
        #[serde(default)]
        subject: String,
        #[serde(default)]
        body: String,
    },
    Sms {
        phone: String,
        #[serde(default)]
        message: String,
    },
}

impl FieldSet {
    pub fn kind(&self) -> InputKind {
        match self {
            FieldSet::Url { .. } => InputKind::Url,
            FieldSet::Text { .. } => InputKind::Text,
            FieldSet::Wifi { .. } => InputKind::Wifi,
            FieldSet::Email { .. } => InputKind::Email,
            FieldSet::Sms { .. } => InputKind::Sms,
        }
    }

    /// An empty field set for the given kind.
    pub fn empty(kind: InputKind) -> Self {
        match kind {
            InputKind::Url => FieldSet::Url { url: String::new() },
            InputKind::Text => FieldSet::Text { text: String::new() },
            InputKind::Wifi => FieldSet::Wifi {
                ssid: String::new(),
                password: String::new(),
                security: WifiSecurity::default(),
            },
            InputKind::Email => FieldSet::Email {
                address: String::new(),
                subject: String::new(),
                body: String::new(),
            },
            InputKind::Sms => FieldSet::Sms {
                phone: String::new(),
                message: String::new(),
            },
        }
    }
}
