use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Number of tiles dealt at the start of a game
pub const DEFAULT_RACK_SIZE: usize = 9;
/// Clock value at the start of a game
pub const DEFAULT_STARTING_SECONDS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No game has been dealt yet
    NotStarted,
    Running,
    /// The clock ran out; only a new game leaves this phase
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub rack_size: usize,
    pub starting_seconds: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            rack_size: DEFAULT_RACK_SIZE,
            starting_seconds: DEFAULT_STARTING_SECONDS,
        }
    }
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub word: String,
    pub points: u32,
    pub bonus_seconds: u32,
}

/// Which pool a tile sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    Available,
    Staged,
}

/// Notifications delivered to engine observers after each state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        seconds_remaining: u32,
    },
    TileStaged {
        tile_id: TileId,
    },
    TileUnstaged {
        tile_id: TileId,
    },
    WordAccepted {
        submission: Submission,
        score: u32,
    },
    Ticked {
        seconds_remaining: u32,
    },
    GameOver {
        score: u32,
    },
}

/// Read-only copy of everything a presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub available: Vec<Tile>,
    pub staged: Vec<Tile>,
    pub candidate: String,
    pub candidate_valid: bool,
    /// A submit would be accepted now (valid word and game still running)
    pub can_submit: bool,
    pub seconds_remaining: u32,
    pub score: u32,
    pub is_over: bool,
    pub used_words: Vec<String>,
}

impl GameSnapshot {
    /// Which pool holds the given tile, if any
    pub fn pool_of(&self, tile_id: TileId) -> Option<Pool> {
        if self.available.iter().any(|t| t.id() == tile_id) {
            Some(Pool::Available)
        } else if self.staged.iter().any(|t| t.id() == tile_id) {
            Some(Pool::Staged)
        } else {
            None
        }
    }
}
