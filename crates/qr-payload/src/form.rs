//! Application form state.
//!
//! Holds the raw values of every tab's fields plus the active tab, the
//! way the original form kept all inputs mounted at once. The UI glue
//! owns one of these per session and mutates it on the single
//! event-handling thread of control; the core stays stateless.

use crate::fields::{FieldSet, WifiSecurity};
use crate::kind::InputKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    current: InputKind,
    url: String,
    text: String,
    wifi_ssid: String,
    wifi_password: String,
    wifi_security: WifiSecurity,
    email_address: String,
    email_subject: String,
    email_body: String,
    sms_phone: String,
    sms_message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field '{field}' for kind '{kind}'")]
    UnknownField { kind: InputKind, field: String },
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> InputKind {
        self.current
    }

    /// Switch the active tab. Field values of other tabs are retained.
    pub fn switch_to(&mut self, kind: InputKind) {
        self.current = kind;
    }

    /// Store a raw field value for the given kind.
    pub fn set_field(&mut self, kind: InputKind, field: &str, value: String) -> Result<(), FormError> {
        let slot = match (kind, field) {
            (InputKind::Url, "url") => &mut self.url,
            (InputKind::Text, "text") => &mut self.text,
            (InputKind::Wifi, "ssid") => &mut self.wifi_ssid,
            (InputKind::Wifi, "password") => &mut self.wifi_password,
            (InputKind::Wifi, "security") => {
                self.wifi_security = WifiSecurity::from_label(&value);
                return Ok(());
            }
            (InputKind::Email, "address") => &mut self.email_address,
            (InputKind::Email, "subject") => &mut self.email_subject,
            (InputKind::Email, "body") => &mut self.email_body,
            (InputKind::Sms, "phone") => &mut self.sms_phone,
            (InputKind::Sms, "message") => &mut self.sms_message,
            _ => {
                return Err(FormError::UnknownField {
                    kind,
                    field: field.to_string(),
                });
            }
        };
        *slot = value;
        Ok(())
    }

    /// Snapshot the typed field set for one kind.
    pub fn field_set(&self, kind: InputKind) -> FieldSet {
        match kind {
            InputKind::Url => FieldSet::Url {
                url: self.url.clone(),
            },
            InputKind::Text => FieldSet::Text {
                text: self.text.clone(),
            },
            InputKind::Wifi => FieldSet::Wifi {
                ssid: self.wifi_ssid.clone(),
                password: self.wifi_password.clone(),
                security: self.wifi_security,
            },
            InputKind::Email => FieldSet::Email {
                address: self.email_address.clone(),
                subject: self.email_subject.clone(),
                body: self.email_body.clone(),
            },
            InputKind::Sms => FieldSet::Sms {
                phone: self.sms_phone.clone(),
                message: self.sms_message.clone(),
            },
        }
    }

    /// Snapshot the active tab's field set.
    pub fn active_field_set(&self) -> FieldSet {
        self.field_set(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_url_tab() {
        let form = FormState::new();
        assert_eq!(form.current(), InputKind::Url);
        assert_eq!(form.active_field_set(), FieldSet::Url { url: String::new() });
    }

    #[test]
    fn set_field_routes_to_the_right_slot() {
        let mut form = FormState::new();
        form.set_field(InputKind::Wifi, "ssid", "Home".into()).unwrap();
        form.set_field(InputKind::Wifi, "security", "WEP".into()).unwrap();

        assert_eq!(
            form.field_set(InputKind::Wifi),
            FieldSet::Wifi {
                ssid: "Home".into(),
                password: String::new(),
                security: WifiSecurity::Wep,
            }
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = FormState::new();
        let err = form
            .set_field(InputKind::Url, "address", "x".into())
            .unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                kind: InputKind::Url,
                field: "address".into(),
            }
        );
    }

    #[test]
    fn tab_switch_retains_other_tabs_values() {
        let mut form = FormState::new();
        form.set_field(InputKind::Text, "text", "note".into()).unwrap();
        form.switch_to(InputKind::Sms);
        form.switch_to(InputKind::Text);
        assert_eq!(
            form.active_field_set(),
            FieldSet::Text { text: "note".into() }
        );
    }
}
