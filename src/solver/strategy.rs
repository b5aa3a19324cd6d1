//! Guess selection strategies
//!
//! Defines the Strategy trait and the letter-coverage implementation.

use super::selector::best_by_coverage;
use crate::core::Word;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the next guess given the surviving candidates
    ///
    /// `guess_pool` holds guess-only words that may be played but can never be the
    /// answer. Returns `None` when no guess can be made.
    fn select_guess<'a>(&self, candidates: &[&'a Word], guess_pool: &'a [Word])
    -> Option<&'a Word>;
}

/// Letter-coverage strategy with small-set shortcuts
///
/// With exactly three candidates the first one is played without scoring. The
/// shortcut is on by default; turning it off scores the three like any other set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageStrategy {
    pub three_candidate_shortcut: bool,
}

impl CoverageStrategy {
    #[must_use]
    pub const fn new(three_candidate_shortcut: bool) -> Self {
        Self {
            three_candidate_shortcut,
        }
    }
}

impl Default for CoverageStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Strategy for CoverageStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        guess_pool: &'a [Word],
    ) -> Option<&'a Word> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            [first, _, _] if self.three_candidate_shortcut => Some(*first),
            _ => best_by_coverage(candidates, guess_pool),
        }
    }
}
