//! Per-letter clue outcomes for a guess
//!
//! Each position of a guess receives one of three outcomes:
//! - Correct: the letter is in the correct position (green)
//! - Present: the letter occurs elsewhere in the answer (yellow)
//! - Absent: no unaccounted copy of the letter remains (gray)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    Correct,
    Present,
    Absent,
}

impl Clue {
    /// Parse from a feedback character
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present, '-'/'_'/⬜ for absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether this outcome confirms an occurrence of the letter
    #[inline]
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// The clues for a complete guess, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clues([Clue; WORD_LENGTH]);

impl Clues {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Clue::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(clues: [Clue; WORD_LENGTH]) -> Self {
        Self(clues)
    }

    /// Compare `guess` against `answer` using Wordle's duplicate-letter rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the answer's letter pool
    /// 2. Second pass: mark present letters while the pool still holds a copy
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Clues, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let clues = Clues::calculate(&guess, &answer);
    ///
    /// assert_eq!(clues.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Clue::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        for (i, clue) in result.iter_mut().enumerate() {
            if guess.char_at(i) == answer.char_at(i) {
                *clue = Clue::Correct;
                if let Some(count) = answer_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, clue) in result.iter_mut().enumerate() {
            if *clue == Clue::Absent
                && let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *clue = Clue::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Clue; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, kind: Clue) -> usize {
        self.0.iter().filter(|&&clue| clue == kind).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|clue| clue.to_emoji()).collect()
    }
}

impl std::str::FromStr for Clues {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Option<Vec<Clue>> = s.chars().map(Clue::from_char).collect();
        parsed
            .and_then(|clues| <[Clue; WORD_LENGTH]>::try_from(clues).ok())
            .map(Self)
            .ok_or_else(|| format!("Invalid clue string: {s}"))
    }
}

impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clues(guess: &str, answer: &str) -> Clues {
        Clues::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn all_absent() {
        let result = clues("abcde", "fghij");
        assert_eq!(result.count(Clue::Absent), 5);
    }

    #[test]
    fn self_comparison_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(clues(word, word).is_perfect());
        }
    }

    #[test]
    fn duplicate_guess_letter_single_answer_copy() {
        // SASSY vs CLASS: the S at index 3 is exact, the remaining S copy goes to
        // index 0, and the S at index 2 finds nothing left.
        let result = clues("sassy", "class");
        assert_eq!(result, "YY-G-".parse().unwrap());
        assert_eq!(result.as_array()[2], Clue::Absent);
    }

    #[test]
    fn green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: the second O is exact, the first O uses the remaining copy.
        let result = clues("robot", "floor");
        assert_eq!(result, "YY-G-".parse().unwrap());
        assert_eq!(result.count(Clue::Correct), 1);
        assert_eq!(result.count(Clue::Present), 2);
    }

    #[test]
    fn excess_copies_are_absent() {
        // SPEED vs ABIDE: only one E in the answer, so the second E is absent.
        let result = clues("speed", "abide");
        assert_eq!(result, "--Y-Y".parse().unwrap());
    }

    #[test]
    fn from_str_accepts_emoji_and_rejects_garbage() {
        let ascii: Clues = "GY-_g".parse().unwrap();
        let emoji: Clues = "🟩🟨⬜⬜🟩".parse().unwrap();
        assert_eq!(ascii, emoji);
        assert!("GYG".parse::<Clues>().is_err());
        assert!("GXGGY".parse::<Clues>().is_err());
        assert!("GGGGGG".parse::<Clues>().is_err());
    }

    #[test]
    fn display_matches_emoji() {
        let result = clues("crane", "slate");
        assert_eq!(result.to_string(), "⬜⬜🟩⬜🟩");
    }
}
