use crate::models::Submission;

pub struct Scorer;

impl Scorer {
    /// Price an accepted word.
    ///
    /// Scoring rules:
    /// - Points grow with the square of the word length
    /// - Bonus time grows linearly, two seconds per letter
    ///
    /// Long words pay off far more in score than in time, so the player trades
    /// survival against points.
    pub fn score_word(word: &str) -> Submission {
        let length = word.chars().count();
        Submission {
            word: word.to_string(),
            points: Self::points(length),
            bonus_seconds: Self::bonus_seconds(length),
        }
    }

    /// Points for a word of `length` letters
    pub fn points(length: usize) -> u32 {
        let n = u32::try_from(length).unwrap_or(u32::MAX);
        n.saturating_mul(n)
    }

    /// Seconds added to the clock for a word of `length` letters
    pub fn bonus_seconds(length: usize) -> u32 {
        u32::try_from(length).unwrap_or(u32::MAX).saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_quadratic() {
        assert_eq!(Scorer::points(1), 1);
        assert_eq!(Scorer::points(3), 9);
        assert_eq!(Scorer::points(5), 25);
        assert_eq!(Scorer::points(9), 81);
    }

    #[test]
    fn test_bonus_seconds_are_linear() {
        assert_eq!(Scorer::bonus_seconds(1), 2);
        assert_eq!(Scorer::bonus_seconds(3), 6);
        assert_eq!(Scorer::bonus_seconds(9), 18);
    }

    #[test]
    fn test_huge_lengths_saturate() {
        assert_eq!(Scorer::points(70_000), u32::MAX);
        assert_eq!(Scorer::bonus_seconds(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_score_word() {
        let submission = Scorer::score_word("cat");
        assert_eq!(submission.word, "cat");
        assert_eq!(submission.points, 9);
        assert_eq!(submission.bonus_seconds, 6);
    }
}
