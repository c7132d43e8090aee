//! Live preview session over WebSocket.
//!
//! Mirrors the original form's event loop: every field edit schedules a
//! debounced validate → format → render pass, tab switches and explicit
//! submits fire immediately, and a newer event always supersedes a
//! pending one. Form state is owned by the single receive task, so no
//! mutation is ever concurrent.

use std::time::Duration;

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use qr_payload::{FieldSet, FormState, InputKind};

use crate::app::SharedState;
use crate::debounce::Debouncer;
use crate::services::generate::{Outcome, generate};

const OUTBOX_CAPACITY: usize = 32;

/// Events sent by the frontend.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ClientEvent {
    /// A field value changed (keystroke, select change).
    Field {
        kind: InputKind,
        field: String,
        value: String,
    },
    /// The active tab changed.
    Tab { kind: InputKind },
    /// Enter pressed / explicit generate.
    Submit,
}

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<String>(OUTBOX_CAPACITY);

    let client_id = uuid::Uuid::new_v4().to_string();
    let welcome = serde_json::json!({
        "type": "connected",
        "data": { "clientId": client_id }
    });
    if sender
        .send(Message::Text(welcome.to_string().into()))
        .await
        .is_err()
    {
        return;
    }

    tracing::info!("Preview client connected: {}", client_id);

    // Forward outbox messages to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Receive events from this client and drive the preview pipeline
    let recv_state = state.clone();
    let cid = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        let mut form = FormState::new();
        let mut debouncer = Debouncer::new();

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    handle_client_event(
                        text.as_str(),
                        &mut form,
                        &mut debouncer,
                        &recv_state,
                        &out_tx,
                    )
                    .await;
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::info!("Preview client disconnected: {}", cid);
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

async fn handle_client_event(
    text: &str,
    form: &mut FormState,
    debouncer: &mut Debouncer,
    state: &SharedState,
    out_tx: &mpsc::Sender<String>,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Ignoring malformed client event: {e}");
            return;
        }
    };

    match event {
        ClientEvent::Field { kind, field, value } => {
            if let Err(e) = form.set_field(kind, &field, value) {
                tracing::warn!("Ignoring field event: {e}");
                return;
            }
            let delay = Duration::from_millis(state.config().await.debounce_ms);
            debouncer.schedule(
                delay,
                preview(state.clone(), out_tx.clone(), form.active_field_set(), false),
            );
        }
        ClientEvent::Tab { kind } => {
            form.switch_to(kind);
            debouncer.fire_now(preview(
                state.clone(),
                out_tx.clone(),
                form.active_field_set(),
                false,
            ));
        }
        ClientEvent::Submit => {
            debouncer.fire_now(preview(
                state.clone(),
                out_tx.clone(),
                form.active_field_set(),
                true,
            ));
        }
    }
}

/// One validate/format/render pass, reported back to the client.
async fn preview(
    state: SharedState,
    out_tx: mpsc::Sender<String>,
    fields: FieldSet,
    record: bool,
) {
    let msg = match generate(&state, &fields, record).await {
        Ok(Outcome::Invalid(report)) => serde_json::json!({
            "type": "errors",
            "kind": fields.kind(),
            "errors": report.to_map(),
        }),
        Ok(Outcome::Rendered(r)) => serde_json::json!({
            "type": "preview",
            "kind": r.kind,
            "payload": r.payload,
            "image": r.data_url(),
            "size": r.size,
        }),
        Err(e) => {
            tracing::error!("Error generating QR code: {e}");
            serde_json::json!({
                "type": "error",
                "message": "Error generating QR code",
            })
        }
    };

    let _ = out_tx.send(msg.to_string()).await;
}
