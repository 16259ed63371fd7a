use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::StartupError;

/// Immutable set of lowercase words accepted by the game.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| StartupError::DictionaryUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::parse(&content);
        if dictionary.is_empty() {
            return Err(StartupError::DictionaryEmpty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from word-list text (blank lines are skipped)
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Check if a word exists in the dictionary, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
