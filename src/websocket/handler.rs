use crate::{
    websocket::{
        messages::{ClientMessage, ServerMessage},
        session::run_session,
    },
    AppState, SessionInfo,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<ClientMessage>(32);

    state.sessions.insert(session_id, SessionInfo::new(session_id));
    tracing::info!("WebSocket session {} established", session_id);

    // Outbound: serialize whatever the session actor publishes
    let mut send_task = tokio::spawn(async move {
        while let Some(outgoing) = rx.recv().await {
            let json = match serde_json::to_string(&outgoing) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!(
                        "Session {} could not encode {:?}: {}",
                        session_id,
                        outgoing,
                        e
                    );
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound: decode commands and hand them to the actor
    let reject_tx = tx.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(frame)) = receiver.next().await {
            let text = match frame {
                Message::Text(text) => text,
                Message::Close(_) => {
                    tracing::info!("Client closed session {}", session_id);
                    break;
                }
                _ => continue,
            };

            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(command) => {
                    tracing::debug!("Session {} received {:?}", session_id, command);
                    if cmd_tx.send(command).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Session {} sent an unreadable command: {}", session_id, e);
                    // Reply and keep the socket open; the game is unaffected
                    let reply = ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    };
                    if reject_tx.send(reply).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    // The game itself runs in its own actor
    let mut game_task = tokio::spawn(run_session(state.clone(), session_id, cmd_rx, tx));

    // Whichever side stops first tears down the other two
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
            game_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
            game_task.abort();
        }
        _ = (&mut game_task) => {
            send_task.abort();
            recv_task.abort();
        }
    }

    if let Some((_, info)) = state.sessions.remove(&session_id) {
        tracing::info!(
            "WebSocket session {} closed with score {}",
            session_id,
            info.score
        );
    }
}
