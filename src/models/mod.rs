pub mod game;
pub mod tile;

pub use game::{GameEvent, GamePhase, GameRules, GameSnapshot, Pool, Submission};
pub use tile::{Tile, TileId};
