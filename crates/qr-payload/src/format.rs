//! Canonical payload construction.
//!
//! Each function here is total and deterministic: the same field set
//! always produces the same string. Callers are expected to run
//! [`validate`](crate::validate::validate) first; [`try_encode`] bundles
//! both steps.

use crate::fields::FieldSet;
use crate::validate::{ValidationReport, has_http_scheme, validate};

/// Format a field set into the payload string the renderer encodes.
///
/// Field values are trimmed first. Percent-encoding applies only where
/// the payload grammar calls for it (mailto/sms parameters).
pub fn encode(fields: &FieldSet) -> String {
    match fields {
        FieldSet::Url { url } => {
            let url = url.trim();
            if has_http_scheme(url) {
                url.to_string()
            } else {
                format!("https://{url}")
            }
        }
        FieldSet::Text { text } => text.trim().to_string(),
        FieldSet::Wifi {
            ssid,
            password,
            security,
        } => {
            // WIFI-reserved characters (; : \ ") are inserted verbatim,
            // matching the behavior QR scanners saw from the original
            // frontend. SSIDs containing them produce corrupt payloads.
            format!(
                "WIFI:T:{};S:{};P:{};H:false;;",
                security.label(),
                ssid.trim(),
                password.trim()
            )
        }
        FieldSet::Email {
            address,
            subject,
            body,
        } => {
            let mut out = format!("mailto:{}", address.trim());
            let mut params = Vec::new();
            let subject = subject.trim();
            let body = body.trim();
            if !subject.is_empty() {
                params.push(format!("subject={}", urlencoding::encode(subject)));
            }
            if !body.is_empty() {
                params.push(format!("body={}", urlencoding::encode(body)));
            }
            if !params.is_empty() {
                out.push('?');
                out.push_str(&params.join("&"));
            }
            out
        }
        FieldSet::Sms { phone, message } => {
            let phone = phone.trim();
            let message = message.trim();
            if message.is_empty() {
                format!("sms:{phone}")
            } else {
                format!("sms:{phone}?body={}", urlencoding::encode(message))
            }
        }
    }
}

/// Validate, then format. Returns the validation report unchanged when
/// the field set is rejected, so callers can surface per-field messages.
pub fn try_encode(fields: &FieldSet) -> Result<String, ValidationReport> {
    let report = validate(fields);
    if report.is_valid() {
        Ok(encode(fields))
    } else {
        Err(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::WifiSecurity;

    fn wifi(ssid: &str, password: &str, security: WifiSecurity) -> FieldSet {
        FieldSet::Wifi {
            ssid: ssid.into(),
            password: password.into(),
            security,
        }
    }

    fn email(address: &str, subject: &str, body: &str) -> FieldSet {
        FieldSet::Email {
            address: address.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    #[test]
    fn url_gets_https_prefix_when_scheme_is_absent() {
        let fs = FieldSet::Url {
            url: "example.com".into(),
        };
        assert_eq!(encode(&fs), "https://example.com");
    }

    #[test]
    fn url_with_scheme_passes_through_unchanged() {
        let fs = FieldSet::Url {
            url: "http://example.com".into(),
        };
        assert_eq!(encode(&fs), "http://example.com");

        // Prefix check is case-insensitive; the value is not rewritten.
        let fs = FieldSet::Url {
            url: "HTTPS://X.com".into(),
        };
        assert_eq!(encode(&fs), "HTTPS://X.com");
    }

    #[test]
    fn text_is_trimmed_and_otherwise_untouched() {
        let fs = FieldSet::Text {
            text: "  hello world  ".into(),
        };
        assert_eq!(encode(&fs), "hello world");
    }

    #[test]
    fn wifi_payload_shape() {
        assert_eq!(
            encode(&wifi("Home", "secret", WifiSecurity::Wep)),
            "WIFI:T:WEP;S:Home;P:secret;H:false;;"
        );
    }

    #[test]
    fn wifi_defaults_to_wpa_and_empty_password() {
        assert_eq!(
            encode(&wifi("Home", "", WifiSecurity::default())),
            "WIFI:T:WPA;S:Home;P:;H:false;;"
        );
    }

    #[test]
    fn wifi_reserved_characters_pass_through_verbatim() {
        assert_eq!(
            encode(&wifi("a;b", "p:w", WifiSecurity::Wpa)),
            "WIFI:T:WPA;S:a;b;P:p:w;H:false;;"
        );
    }

    #[test]
    fn mailto_with_subject_only() {
        assert_eq!(
            encode(&email("a@b.com", "Hi", "")),
            "mailto:a@b.com?subject=Hi"
        );
    }

    #[test]
    fn mailto_without_parameters_has_no_question_mark() {
        assert_eq!(encode(&email("a@b.com", "", "")), "mailto:a@b.com");
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        assert_eq!(
            encode(&email("a@b.com", "Hello there", "line & co")),
            "mailto:a@b.com?subject=Hello%20there&body=line%20%26%20co"
        );
    }

    #[test]
    fn sms_with_and_without_message() {
        let fs = FieldSet::Sms {
            phone: "555".into(),
            message: "hey".into(),
        };
        assert_eq!(encode(&fs), "sms:555?body=hey");

        let fs = FieldSet::Sms {
            phone: "555".into(),
            message: String::new(),
        };
        assert_eq!(encode(&fs), "sms:555");
    }

    #[test]
    fn encoding_is_idempotent_across_calls() {
        let fs = wifi("Home", "secret", WifiSecurity::Wpa);
        assert_eq!(encode(&fs), encode(&fs));
    }

    #[test]
    fn try_encode_refuses_invalid_field_sets() {
        let err = try_encode(&FieldSet::Url { url: String::new() }).unwrap_err();
        assert!(!err.is_valid());

        let ok = try_encode(&FieldSet::Text { text: "hi".into() }).unwrap();
        assert_eq!(ok, "hi");
    }
}
