// Game rules: tile pools, word validation, scoring and the clock

pub mod engine;
pub mod scorer;
pub mod validator;

pub use engine::{GameEngine, GameObserver};
pub use scorer::Scorer;
pub use validator::WordValidator;
