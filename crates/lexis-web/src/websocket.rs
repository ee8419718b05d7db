//! WebSocket feed of busy-indicator changes.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::state::{AppState, PageEvent};

#[derive(Deserialize)]
pub struct SocketQuery {
    #[serde(default)]
    pub session: String,
}

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<SocketQuery>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, query.session))
}

/// Handle individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: AppState, session_id: String) {
    let (mut sender, mut receiver) = socket.split();
    let session = state.socket_session(&session_id);
    let mut rx = session.tx.subscribe();

    info!(session = %session_id, sessions = state.session_count(), "Page connected");

    // Late joiners start with the current indicator state.
    let initial = PageEvent::Busy { visible: session.busy.is_busy() };

    let send_task = tokio::spawn(async move {
        if send_event(&mut sender, &initial).await.is_err() {
            return;
        }
        while let Ok(event) = rx.recv().await {
            if send_event(&mut sender, &event).await.is_err() {
                debug!("WebSocket send failed, page disconnected");
                break;
            }
        }
    });

    // Pages never send anything meaningful; drain until close.
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                debug!("Page sent close frame");
                break;
            }
        }
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    state.close_session(&session_id);
    info!(session = %session_id, "Page disconnected");
}

async fn send_event<S>(sender: &mut S, event: &PageEvent) -> Result<(), ()>
where
    S: SinkExt<Message> + Unpin,
{
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to encode page event");
            return Ok(());
        }
    };
    debug!(message = %json, "Sending page event");
    sender.send(Message::Text(json.into())).await.map_err(|_| ())
}
