use std::collections::HashSet;
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::models::Tile;

/// Checks candidate words against the dictionary and the words already
/// played this game.
#[derive(Debug, Clone)]
pub struct WordValidator {
    dictionary: Arc<Dictionary>,
}

impl WordValidator {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Build the candidate word from staged tiles, in order, lowercased
    pub fn extract_word(tiles: &[Tile]) -> String {
        tiles
            .iter()
            .map(|tile| tile.character().to_ascii_lowercase())
            .collect()
    }

    /// A word is playable when it is non-empty, in the dictionary and not yet used
    pub fn is_playable(&self, word: &str, used_words: &HashSet<String>) -> bool {
        if word.is_empty() {
            return false;
        }

        let word = word.to_lowercase();
        !used_words.contains(&word) && self.dictionary.contains(&word)
    }
}
