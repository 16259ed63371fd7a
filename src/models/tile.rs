use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::LetterSource;

/// Synthetic tile identity, distinct from the tile's letter so duplicate
/// letters can still be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(Uuid);

impl TileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TileId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single drawn letter. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    character: char,
}

impl Tile {
    /// Draw a fresh tile from the given source
    pub fn draw(letters: &mut dyn LetterSource) -> Self {
        Self::with_character(letters.next_letter())
    }

    pub fn with_character(character: char) -> Self {
        Self {
            id: TileId::new(),
            character: character.to_ascii_uppercase(),
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn character(&self) -> char {
        self.character
    }
}
