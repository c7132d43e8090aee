//! Validate → format → render orchestration.
//!
//! This is the only control flow the core imposes: validation gates the
//! formatter, and only a formatted payload reaches the renderer.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use qr_payload::{FieldSet, InputKind, ValidationReport, encode, validate};
use qr_render::RenderError;

use crate::app::SharedState;

/// Result of one generation attempt with a valid renderer.
#[derive(Debug)]
pub enum Outcome {
    /// Validation failed; no payload was formatted, no rendering happened.
    Invalid(ValidationReport),
    /// Payload formatted and rendered.
    Rendered(Rendered),
}

#[derive(Debug)]
pub struct Rendered {
    pub kind: InputKind,
    pub payload: String,
    pub png: Vec<u8>,
    pub size: u32,
}

impl Rendered {
    /// Inline data URL for JSON responses and WebSocket previews.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }
}

/// Run the full pipeline for one field set. When `record` is set, a
/// successful render is written to history (failures there are logged,
/// never fatal).
pub async fn generate(
    state: &SharedState,
    fields: &FieldSet,
    record: bool,
) -> Result<Outcome, RenderError> {
    let report = validate(fields);
    if !report.is_valid() {
        return Ok(Outcome::Invalid(report));
    }

    let payload = encode(fields);
    let (opts, history_limit) = {
        let config = state.config().await;
        (config.render_options(), config.history_limit)
    };
    let size = opts.size;
    let png = qr_render::render_png(&payload, &opts)?;

    let kind = fields.kind();
    if record {
        record_history(state, kind, &payload, history_limit);
    }

    Ok(Outcome::Rendered(Rendered {
        kind,
        payload,
        png,
        size,
    }))
}

fn record_history(state: &SharedState, kind: InputKind, payload: &str, limit: u32) {
    if limit == 0 {
        return;
    }
    if let Err(e) = state.db().insert_history(kind.as_str(), payload) {
        tracing::warn!("Failed to record history: {e}");
        return;
    }
    if let Err(e) = state.db().prune_history(limit) {
        tracing::warn!("Failed to prune history: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, SettingsManager};
    use qr_db::Database;

    fn test_state() -> SharedState {
        let db = Database::open_in_memory().unwrap();
        let config = AppConfig::load(&SettingsManager::new(db.clone()));
        SharedState::new(db, config, std::env::temp_dir())
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_renderer() {
        let state = test_state();
        let fields = FieldSet::Url { url: String::new() };

        match generate(&state, &fields, true).await.unwrap() {
            Outcome::Invalid(report) => assert!(!report.is_valid()),
            other => panic!("expected Invalid, got {other:?}"),
        }
        // Nothing recorded for a rejected field set.
        assert!(state.db().recent_history(10).unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_input_renders_and_records() {
        let state = test_state();
        let fields = FieldSet::Text { text: "hello".into() };

        match generate(&state, &fields, true).await.unwrap() {
            Outcome::Rendered(r) => {
                assert_eq!(r.payload, "hello");
                assert_eq!(r.size, 256);
                assert!(r.data_url().starts_with("data:image/png;base64,"));
            }
            other => panic!("expected Rendered, got {other:?}"),
        }

        let history = state.db().recent_history(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, "text");
        assert_eq!(history[0].payload, "hello");
    }

    #[tokio::test]
    async fn oversized_payload_surfaces_a_render_failure() {
        let state = test_state();
        // Well past the ~3 KB byte-mode capacity of the largest symbol.
        let fields = FieldSet::Text {
            text: "x".repeat(8000),
        };

        let err = generate(&state, &fields, true).await.unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
        // A failed render records nothing.
        assert!(state.db().recent_history(10).unwrap().is_empty());
    }

    #[tokio::test]
    async fn preview_runs_do_not_touch_history() {
        let state = test_state();
        let fields = FieldSet::Sms {
            phone: "555".into(),
            message: String::new(),
        };

        let outcome = generate(&state, &fields, false).await.unwrap();
        assert!(matches!(outcome, Outcome::Rendered(_)));
        assert!(state.db().recent_history(10).unwrap().is_empty());
    }
}
