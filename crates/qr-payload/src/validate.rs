//! Required-field and shape validation, gating the formatter.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::fields::FieldSet;

/// Permissive `local@domain.tld` shape. Intentionally not the full
/// email grammar.
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    InvalidFormat,
}

/// One validation failure, tied to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Outcome of validating one field set. Empty means the payload
/// may be formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Field name → message mapping, as the frontend displays it.
    pub fn to_map(&self) -> HashMap<&'static str, &'static str> {
        self.errors.iter().map(|e| (e.field, e.message)).collect()
    }

    fn push(&mut self, field: &'static str, kind: ErrorKind, message: &'static str) {
        self.errors.push(FieldError {
            field,
            kind,
            message,
        });
    }
}

/// Validate a field set. All fields are trimmed before checking.
/// Pure function of its inputs; no side effects.
pub fn validate(fields: &FieldSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    match fields {
        FieldSet::Url { url } => {
            let url = url.trim();
            if url.is_empty() {
                report.push("url", ErrorKind::MissingField, "Please enter a URL");
            } else if !is_valid_url(url) {
                report.push("url", ErrorKind::InvalidFormat, "Please enter a valid URL");
            }
        }
        FieldSet::Text { text } => {
            if text.trim().is_empty() {
                report.push("text", ErrorKind::MissingField, "Please enter some text");
            }
        }
        FieldSet::Wifi { ssid, .. } => {
            // Password and security are never validated.
            if ssid.trim().is_empty() {
                report.push(
                    "ssid",
                    ErrorKind::MissingField,
                    "Please enter a network name (SSID)",
                );
            }
        }
        FieldSet::Email { address, .. } => {
            let address = address.trim();
            if address.is_empty() {
                report.push(
                    "address",
                    ErrorKind::MissingField,
                    "Please enter an email address",
                );
            } else if !RE_EMAIL.is_match(address) {
                report.push(
                    "address",
                    ErrorKind::InvalidFormat,
                    "Please enter a valid email address",
                );
            }
        }
        FieldSet::Sms { phone, .. } => {
            if phone.trim().is_empty() {
                report.push(
                    "phone",
                    ErrorKind::MissingField,
                    "Please enter a phone number",
                );
            }
        }
    }

    report
}

/// True when the string already carries an explicit `http://` or
/// `https://` scheme (case-insensitive).
pub(crate) fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// A string is a valid URL if it parses under generic URL syntax once
/// `https://` is prepended when no scheme is present. Deliberately
/// permissive: dot-less hosts like `localhost` are accepted.
fn is_valid_url(raw: &str) -> bool {
    if has_http_scheme(raw) {
        url::Url::parse(raw).is_ok()
    } else {
        url::Url::parse(&format!("https://{raw}")).is_ok()
    }
}
