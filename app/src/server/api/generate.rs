//! QR generation API:
//!   POST /api/qr      – JSON response with payload + inline PNG
//!   POST /api/qr/png  – raw PNG, optionally as a download attachment

use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use qr_payload::FieldSet;

use super::{err_json, validation_json};
use crate::app::SharedState;
use crate::services::generate::{Outcome, generate};

/// POST /api/qr
pub async fn generate_json(
    State(state): State<SharedState>,
    Json(fields): Json<FieldSet>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match generate(&state, &fields, true).await {
        Ok(Outcome::Invalid(report)) => Err(validation_json(&report)),
        Ok(Outcome::Rendered(r)) => Ok(Json(json!({
            "kind": r.kind,
            "payload": r.payload,
            "image": r.data_url(),
            "size": r.size,
        }))),
        Err(e) => {
            tracing::error!("Error generating QR code: {e}");
            Err(err_json(500, "Error generating QR code"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PngParams {
    #[serde(default, deserialize_with = "flag")]
    download: bool,
}

/// Accept both `?download=1` and `?download=true`.
fn flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(de)?;
    Ok(matches!(s.as_str(), "1" | "true"))
}

/// POST /api/qr/png
pub async fn generate_png(
    State(state): State<SharedState>,
    Query(params): Query<PngParams>,
    Json(fields): Json<FieldSet>,
) -> Result<axum::response::Response, (StatusCode, Json<Value>)> {
    let rendered = match generate(&state, &fields, true).await {
        Ok(Outcome::Invalid(report)) => return Err(validation_json(&report)),
        Ok(Outcome::Rendered(r)) => r,
        Err(e) => {
            tracing::error!("Error generating QR code: {e}");
            return Err(err_json(500, "Error generating QR code"));
        }
    };

    let mut builder = axum::response::Response::builder()
        .header(header::CONTENT_TYPE, "image/png");

    if params.download {
        let filename = format!(
            "qr-code-{}-{}.png",
            rendered.kind,
            chrono::Utc::now().timestamp_millis()
        );
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        );
    }

    builder
        .body(Body::from(rendered.png))
        .map_err(|e| err_json(500, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::PngParams;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &str) -> PngParams {
        let uri: Uri = uri.parse().unwrap();
        let Query(params) = Query::<PngParams>::try_from_uri(&uri).unwrap();
        params
    }

    #[test]
    fn download_flag_accepts_numeric_and_boolean_forms() {
        assert!(parse("/api/qr/png?download=1").download);
        assert!(parse("/api/qr/png?download=true").download);
    }

    #[test]
    fn download_flag_defaults_off() {
        assert!(!parse("/api/qr/png").download);
        assert!(!parse("/api/qr/png?download=0").download);
        assert!(!parse("/api/qr/png?download=false").download);
    }
}
