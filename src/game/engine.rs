use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    dictionary::Dictionary,
    game::{Scorer, WordValidator},
    models::{GameEvent, GamePhase, GameRules, GameSnapshot, Submission, Tile, TileId},
    utils::{LetterSource, RandomLetters},
};

/// Receives engine notifications after each state change.
///
/// Any `FnMut(&GameEvent) + Send` closure is an observer.
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Owns the state of one game: the two tile pools, the clock, the score and
/// the words already played.
///
/// Every operation is total. Calls that don't apply to the current state
/// (unknown tile, invalid word, ticking a finished game) leave the state
/// untouched and notify nobody.
pub struct GameEngine {
    validator: WordValidator,
    letters: Box<dyn LetterSource>,
    rules: GameRules,
    phase: GamePhase,
    available: Vec<Tile>,
    staged: Vec<Tile>,
    seconds_remaining: u32,
    score: u32,
    used_words: HashSet<String>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create an engine with default rules and uniformly random letters.
    /// No game is dealt until [`GameEngine::new_game`] is called.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            validator: WordValidator::new(dictionary),
            letters: Box::new(RandomLetters::new()),
            rules: GameRules::default(),
            phase: GamePhase::NotStarted,
            available: Vec::new(),
            staged: Vec::new(),
            seconds_remaining: 0,
            score: 0,
            used_words: HashSet::new(),
            observers: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_letters(mut self, letters: impl LetterSource + 'static) -> Self {
        self.letters = Box::new(letters);
        self
    }

    /// Register an observer for all subsequent events
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Discard any game in progress and deal a fresh rack
    pub fn new_game(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.seconds_remaining = self.rules.starting_seconds;
        self.staged.clear();
        self.used_words.clear();
        self.available = self.draw_tiles(self.rules.rack_size);

        tracing::info!(
            "New game dealt: {} tiles, {} seconds",
            self.available.len(),
            self.seconds_remaining
        );
        self.emit(GameEvent::GameStarted {
            seconds_remaining: self.seconds_remaining,
        });
    }

    /// Move a tile from the available pool to the end of the staged word.
    /// Returns false (and changes nothing) if the tile is not available.
    pub fn move_to_staged(&mut self, tile_id: TileId) -> bool {
        let Some(index) = self.available.iter().position(|t| t.id() == tile_id) else {
            return false;
        };

        let tile = self.available.remove(index);
        tracing::debug!("Staged tile {} ({})", tile_id, tile.character());
        self.staged.push(tile);
        self.emit(GameEvent::TileStaged { tile_id });
        true
    }

    /// Move a tile from the staged word back to the end of the available pool.
    /// Returns false (and changes nothing) if the tile is not staged.
    pub fn move_to_available(&mut self, tile_id: TileId) -> bool {
        let Some(index) = self.staged.iter().position(|t| t.id() == tile_id) else {
            return false;
        };

        let tile = self.staged.remove(index);
        tracing::debug!("Unstaged tile {} ({})", tile_id, tile.character());
        self.available.push(tile);
        self.emit(GameEvent::TileUnstaged { tile_id });
        true
    }

    /// The staged tiles as a lowercase word
    pub fn candidate_word(&self) -> String {
        WordValidator::extract_word(&self.staged)
    }

    pub fn is_candidate_valid(&self) -> bool {
        self.validator.is_playable(&self.candidate_word(), &self.used_words)
    }

    /// Whether [`GameEngine::submit`] would accept the staged word right now.
    /// Unlike `is_candidate_valid`, this is false once the game is over.
    pub fn can_submit(&self) -> bool {
        self.phase == GamePhase::Running && self.is_candidate_valid()
    }

    /// Play the staged word.
    ///
    /// Returns `None` without touching any state when the candidate is not
    /// playable or the phase is not `Running` (before the first deal, or after
    /// the clock ran out). Score and clock saturate at `u32::MAX`.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let submission = Scorer::score_word(&self.candidate_word());
        let replacements = self.draw_tiles(self.staged.len());

        self.used_words.insert(submission.word.clone());
        self.score = self.score.saturating_add(submission.points);
        self.seconds_remaining = self
            .seconds_remaining
            .saturating_add(submission.bonus_seconds);
        self.available.extend(replacements);
        self.staged.clear();

        tracing::info!(
            "Accepted '{}' for {} points (+{}s), score now {}",
            submission.word,
            submission.points,
            submission.bonus_seconds,
            self.score
        );
        self.emit(GameEvent::WordAccepted {
            submission: submission.clone(),
            score: self.score,
        });

        Some(submission)
    }

    /// Advance the clock by one second.
    ///
    /// The game ends on the tick that finds the clock already at zero, so a
    /// player always sees "0" for one full second before it is over.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        if self.seconds_remaining == 0 {
            self.phase = GamePhase::Over;
            tracing::info!("Game over with score {}", self.score);
            self.emit(GameEvent::GameOver { score: self.score });
        } else {
            self.seconds_remaining -= 1;
            tracing::debug!("Tick: {} seconds remaining", self.seconds_remaining);
            self.emit(GameEvent::Ticked {
                seconds_remaining: self.seconds_remaining,
            });
        }
    }

    pub fn available_tiles(&self) -> &[Tile] {
        &self.available
    }

    pub fn staged_tiles(&self) -> &[Tile] {
        &self.staged
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.validator.dictionary()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut used_words: Vec<String> = self.used_words.iter().cloned().collect();
        used_words.sort();

        GameSnapshot {
            phase: self.phase,
            available: self.available.clone(),
            staged: self.staged.clone(),
            candidate: self.candidate_word(),
            candidate_valid: self.is_candidate_valid(),
            can_submit: self.can_submit(),
            seconds_remaining: self.seconds_remaining,
            score: self.score,
            is_over: self.is_over(),
            used_words,
        }
    }

    fn draw_tiles(&mut self, count: usize) -> Vec<Tile> {
        (0..count)
            .map(|_| Tile::draw(self.letters.as_mut()))
            .collect()
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}
