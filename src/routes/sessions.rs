use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppState, SessionInfo};

#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub active_sessions: usize,
    pub sessions: Vec<SessionInfo>,
}

/// List live game sessions, oldest first
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<SessionsResponse> {
    let mut sessions: Vec<SessionInfo> = state
        .sessions
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    sessions.sort_by_key(|s| s.connected_at);

    Json(SessionsResponse {
        active_sessions: sessions.len(),
        sessions,
    })
}
