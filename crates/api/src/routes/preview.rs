//! WebSocket stream of debounced conversion previews.
//!
//! The client sends the transfer form as JSON text frames on every change.
//! Once the form has been quiet for the configured period the server answers
//! with a single preview for the latest form state.

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
    routing::get,
};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use yala_core::preview::{PreviewInput, debounce, preview_for};
use yala_shared::types::UserId;

use crate::{AppState, middleware::AuthUser};

const CHANNEL_CAPACITY: usize = 32;

/// Creates the preview routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/ws/preview", get(preview_socket))
}

/// Frame sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreviewEvent {
    /// Preview for the latest form state.
    Preview {
        /// Preview text, absent when the form does not warrant one.
        preview: Option<String>,
    },
    /// A frame could not be understood.
    Error {
        /// What went wrong.
        message: String,
    },
}

/// GET `/ws/preview` - Upgrade to the preview stream.
async fn preview_socket(
    State(state): State<AppState>,
    auth: AuthUser,
    ws: WebSocketUpgrade,
) -> Response {
    let user_id = auth.user_id().clone();
    ws.on_upgrade(move |socket| handle_socket(socket, state, user_id))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_id: UserId) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<PreviewEvent>(CHANNEL_CAPACITY);
    let (input_tx, input_rx) = mpsc::channel::<PreviewInput>(CHANNEL_CAPACITY);

    let sender_task = tokio::spawn(async move {
        while let Some(event) = out_rx.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };
            if ws_sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut debounced = debounce(input_rx, state.config.preview.debounce());
    let preview_tx = out_tx.clone();
    let preview_user = user_id.clone();
    let preview_task = tokio::spawn(async move {
        while let Some(input) = debounced.recv().await {
            let event = PreviewEvent::Preview {
                preview: preview_for(&preview_user, &input),
            };
            if preview_tx.send(event).await.is_err() {
                break;
            }
        }
    });

    while let Some(frame) = ws_receiver.next().await {
        match frame {
            Ok(Message::Text(text)) => match serde_json::from_str::<PreviewInput>(text.as_str()) {
                Ok(input) => {
                    if input_tx.send(input).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(user_id = %user_id, error = %e, "Invalid preview frame");
                    let event = PreviewEvent::Error {
                        message: "Invalid preview input.".to_string(),
                    };
                    if out_tx.send(event).await.is_err() {
                        break;
                    }
                }
            },
            Ok(Message::Close(_)) => break,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Preview socket error");
                break;
            }
            Ok(_) => {}
        }
    }

    // Closing the input drops any preview still waiting out its quiet period.
    drop(input_tx);
    drop(out_tx);
    let _ = preview_task.await;
    let _ = sender_task.await;
    debug!(user_id = %user_id, "Preview socket closed");
}
