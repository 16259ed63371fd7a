use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters a tile can carry
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Supplies the character for each freshly drawn tile.
pub trait LetterSource: Send {
    fn next_letter(&mut self) -> char;
}

/// Uniform A-Z letters.
///
/// Unseeded sources draw from the thread-local RNG; seeded ones replay the
/// same sequence for the same seed.
#[derive(Debug, Default)]
pub struct RandomLetters {
    seeded: Option<StdRng>,
}

impl RandomLetters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl LetterSource for RandomLetters {
    fn next_letter(&mut self) -> char {
        match self.seeded.as_mut() {
            Some(rng) => random_letter(rng),
            None => random_letter(&mut rand::rng()),
        }
    }
}

fn random_letter(rng: &mut impl Rng) -> char {
    let idx = rng.random_range(0..ALPHABET.len());
    ALPHABET[idx] as char
}

/// Replays a fixed letter sequence, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedLetters {
    letters: Vec<char>,
    cursor: usize,
}

impl ScriptedLetters {
    /// Letters are uppercased; non-alphabetic characters are dropped.
    /// An empty script falls back to `A`.
    pub fn new(script: &str) -> Self {
        let mut letters: Vec<char> = script
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if letters.is_empty() {
            letters.push('A');
        }

        Self { letters, cursor: 0 }
    }
}

impl LetterSource for ScriptedLetters {
    fn next_letter(&mut self) -> char {
        let letter = self.letters[self.cursor];
        self.cursor = (self.cursor + 1) % self.letters.len();
        letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_letters_are_uppercase_ascii() {
        let mut source = RandomLetters::new();
        for _ in 0..500 {
            let letter = source.next_letter();
            assert!(
                letter.is_ascii_uppercase(),
                "Letter '{}' should be an uppercase ASCII letter",
                letter
            );
        }
    }

    #[test]
    fn test_seeded_letters_are_reproducible() {
        let mut a = RandomLetters::seeded(42);
        let mut b = RandomLetters::seeded(42);
        let first: String = (0..32).map(|_| a.next_letter()).collect();
        let second: String = (0..32).map(|_| b.next_letter()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_letters_cover_alphabet() {
        let mut source = RandomLetters::seeded(7);
        let mut seen = [false; 26];
        for _ in 0..5000 {
            let letter = source.next_letter();
            seen[(letter as u8 - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "Every letter should eventually be drawn");
    }

    #[test]
    fn test_scripted_letters_wrap() {
        let mut source = ScriptedLetters::new("ca-t");
        let drawn: String = (0..5).map(|_| source.next_letter()).collect();
        assert_eq!(drawn, "CATCA");
    }

    #[test]
    fn test_empty_script_falls_back() {
        let mut source = ScriptedLetters::new("123");
        assert_eq!(source.next_letter(), 'A');
    }
}
