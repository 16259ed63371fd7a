use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{GameEvent, GameSnapshot, TileId};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame,
    Stage { tile_id: TileId },
    Unstage { tile_id: TileId },
    Submit,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        session_id: Uuid,
    },
    State {
        snapshot: GameSnapshot,
    },
    WordAccepted {
        word: String,
        points: u32,
        bonus_seconds: u32,
        score: u32,
    },
    InvalidWord {
        word: String,
        reason: String,
    },
    GameOver {
        score: u32,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    /// Events worth announcing on their own; everything else is covered by
    /// the state message that follows
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WordAccepted { submission, score } => Some(ServerMessage::WordAccepted {
                word: submission.word.clone(),
                points: submission.points,
                bonus_seconds: submission.bonus_seconds,
                score: *score,
            }),
            GameEvent::GameOver { score } => Some(ServerMessage::GameOver { score: *score }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;

    #[test]
    fn test_parse_client_messages() {
        let id = TileId::new();
        let json = format!(r#"{{"type":"stage","tile_id":"{}"}}"#, id);
        match serde_json::from_str::<ClientMessage>(&json).unwrap() {
            ClientMessage::Stage { tile_id } => assert_eq!(tile_id, id),
            other => panic!("Unexpected message: {:?}", other),
        }

        assert!(matches!(
            serde_json::from_str::<ClientMessage>(r#"{"type":"new_game"}"#).unwrap(),
            ClientMessage::NewGame
        ));
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"stage"}"#).is_err());
    }

    #[test]
    fn test_word_accepted_from_event() {
        let event = GameEvent::WordAccepted {
            submission: Submission {
                word: "cat".to_string(),
                points: 9,
                bonus_seconds: 6,
            },
            score: 9,
        };
        let json = serde_json::to_value(ServerMessage::from_event(&event).unwrap()).unwrap();
        assert_eq!(json["type"], "word_accepted");
        assert_eq!(json["word"], "cat");
        assert_eq!(json["points"], 9);
    }

    #[test]
    fn test_tick_events_are_not_announced() {
        let event = GameEvent::Ticked {
            seconds_remaining: 3,
        };
        assert!(ServerMessage::from_event(&event).is_none());
    }
}
