//! QuickSpell: a timed word game.
//!
//! The rules live in [`game::GameEngine`], a plain state container with no
//! clock, no I/O and an observer hook for presentation layers. The rest of the
//! crate is a thin axum server that gives every WebSocket connection its own
//! engine and drives it with a once-per-second timer.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;
pub mod websocket;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

pub use config::Config;
pub use dictionary::Dictionary;
pub use error::StartupError;
pub use game::{GameEngine, GameObserver};

/// Summary of a live WebSocket session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub connected_at: DateTime<Utc>,
    pub score: u32,
    pub is_over: bool,
}

impl SessionInfo {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            connected_at: Utc::now(),
            score: 0,
            is_over: false,
        }
    }
}

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<Dictionary>,
    /// Live sessions keyed by session id
    pub sessions: DashMap<Uuid, SessionInfo>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary: Arc::new(dictionary),
            sessions: DashMap::new(),
        }
    }

    /// A fresh engine configured for this server
    pub fn create_engine(&self) -> GameEngine {
        let engine = GameEngine::new(self.dictionary.clone()).with_rules(self.config.game.rules());
        match self.config.game.letter_seed {
            Some(seed) => engine.with_letters(utils::RandomLetters::seeded(seed)),
            None => engine,
        }
    }
}
