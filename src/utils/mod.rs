pub mod letters;

pub use letters::{LetterSource, RandomLetters, ScriptedLetters};
