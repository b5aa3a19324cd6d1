//! Cumulative knowledge gathered from clues during one attempt
//!
//! The state only ever tightens: locks are set, minimum counts grow, and letters
//! are added to exclusion sets. It is built fresh for every attempt.

use crate::core::{ALPHABET_SIZE, Clue, Clues, LetterSet, WORD_LENGTH, Word, letter_index};

/// Constraints accumulated from every clue seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    position_locks: [Option<u8>; WORD_LENGTH],
    minimum_counts: [u8; ALPHABET_SIZE],
    position_exclusions: [LetterSet; WORD_LENGTH],
    excluded_letters: LetterSet,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the clues for `guess` against `answer` and fold them into the state
    ///
    /// Returns the per-position outcome. The answer is only read.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    /// use wordle_sim::solver::ConstraintState;
    ///
    /// let mut state = ConstraintState::new();
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("crate").unwrap();
    ///
    /// let clues = state.derive_clues(&guess, &answer);
    /// assert_eq!(clues.to_emoji(), "🟩🟩🟩⬜🟩");
    /// assert_eq!(state.position_lock(0), Some(b'c'));
    /// assert!(state.is_excluded(b'n'));
    /// ```
    pub fn derive_clues(&mut self, guess: &Word, answer: &Word) -> Clues {
        let clues = Clues::calculate(guess, answer);
        self.record(guess, &clues);
        clues
    }

    /// Fold an already computed set of clues for `guess` into the state
    pub fn record(&mut self, guess: &Word, clues: &Clues) {
        let mut confirmed = [0u8; ALPHABET_SIZE];

        for (i, &clue) in clues.as_array().iter().enumerate() {
            let letter = guess.char_at(i);
            match clue {
                Clue::Correct => self.position_locks[i] = Some(letter),
                Clue::Present => {
                    self.position_exclusions[i].insert(letter);
                }
                Clue::Absent => {}
            }
            if clue.confirms_letter() {
                confirmed[letter_index(letter)] += 1;
            }
        }

        // Per-guess counts only; earlier guesses contribute through the running max.
        for (minimum, &seen) in self.minimum_counts.iter_mut().zip(&confirmed) {
            *minimum = (*minimum).max(seen);
        }

        for (i, &clue) in clues.as_array().iter().enumerate() {
            let letter = guess.char_at(i);
            if clue == Clue::Absent && self.minimum_count(letter) == 0 {
                self.excluded_letters.insert(letter);
            }
        }
    }

    /// Whether `word` is consistent with every accumulated constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let locks_hold = self
            .position_locks
            .iter()
            .enumerate()
            .all(|(i, lock)| lock.is_none_or(|letter| word.char_at(i) == letter));
        if !locks_hold {
            return false;
        }

        let placement_allowed = word
            .chars()
            .iter()
            .zip(&self.position_exclusions)
            .all(|(&letter, excluded)| !excluded.contains(letter));
        if !placement_allowed {
            return false;
        }

        let counts_met = (b'a'..=b'z').all(|letter| {
            let minimum = self.minimum_count(letter) as usize;
            minimum == 0 || word.count_of(letter) >= minimum
        });
        if !counts_met {
            return false;
        }

        self.excluded_letters
            .iter()
            .all(|letter| !word.has_letter(letter))
    }

    /// Letter locked at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn position_lock(&self, position: usize) -> Option<u8> {
        self.position_locks[position]
    }

    /// Minimum number of occurrences of `letter` known to be in the answer
    #[must_use]
    pub const fn minimum_count(&self, letter: u8) -> u8 {
        self.minimum_counts[letter_index(letter)]
    }

    /// Letters known not to sit at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn position_exclusions(&self, position: usize) -> LetterSet {
        self.position_exclusions[position]
    }

    #[must_use]
    pub const fn excluded_letters(&self) -> LetterSet {
        self.excluded_letters
    }

    #[must_use]
    pub const fn is_excluded(&self, letter: u8) -> bool {
        self.excluded_letters.contains(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fresh_state_admits_everything() {
        let state = ConstraintState::new();
        for text in ["crane", "zzzzz", "sassy"] {
            assert!(state.admits(&word(text)));
        }
    }

    #[test]
    fn correct_letters_lock_positions() {
        let mut state = ConstraintState::new();
        state.derive_clues(&word("crane"), &word("crate"));

        for (i, &letter) in b"cra".iter().enumerate() {
            assert_eq!(state.position_lock(i), Some(letter));
        }
        assert_eq!(state.position_lock(3), None);
        assert_eq!(state.position_lock(4), Some(b'e'));
        assert_eq!(state.excluded_letters().to_string(), "n");
    }

    #[test]
    fn present_letters_exclude_their_position() {
        let mut state = ConstraintState::new();
        // TRACE vs CRATE: T and C swap places.
        let clues = state.derive_clues(&word("trace"), &word("crate"));
        assert_eq!(clues, "YGGYG".parse().unwrap());

        assert!(state.position_exclusions(0).contains(b't'));
        assert!(state.position_exclusions(3).contains(b'c'));
        assert_eq!(state.minimum_count(b't'), 1);
        assert_eq!(state.minimum_count(b'c'), 1);
        assert!(state.excluded_letters().is_empty());
    }

    #[test]
    fn duplicate_guess_letters_count_once_per_copy() {
        let mut state = ConstraintState::new();
        state.derive_clues(&word("sassy"), &word("class"));

        // Two S copies confirmed by this guess (one exact, one present).
        assert_eq!(state.minimum_count(b's'), 2);
        assert_eq!(state.minimum_count(b'a'), 1);
        // The third S is absent but S is confirmed, so it is not excluded outright.
        assert!(!state.is_excluded(b's'));
        assert!(state.is_excluded(b'y'));
    }

    #[test]
    fn minimum_counts_take_max_not_sum() {
        let mut state = ConstraintState::new();
        let answer = word("eerie");
        state.derive_clues(&word("emcee"), &answer);
        assert_eq!(state.minimum_count(b'e'), 3);

        // A later guess with a single confirmed E must not lower or add to the count.
        state.derive_clues(&word("crane"), &answer);
        assert_eq!(state.minimum_count(b'e'), 3);
    }

    #[test]
    fn confirmed_letter_never_excluded_by_later_excess_copy() {
        let mut state = ConstraintState::new();
        let answer = word("abide");
        state.derive_clues(&word("crane"), &answer);
        assert_eq!(state.minimum_count(b'e'), 1);

        // SPEED shows one E present and the extra E absent.
        state.derive_clues(&word("speed"), &answer);
        assert!(!state.is_excluded(b'e'));
        assert!(state.admits(&answer));
    }

    #[test]
    fn absent_copy_beside_present_copy_is_not_excluded() {
        let mut state = ConstraintState::new();
        let answer = word("lapse");

        state.derive_clues(&word("moody"), &answer);
        assert!(state.is_excluded(b'o'));

        // Counts are raised before the exclusion pass, so surplus gray copies of a
        // letter that is yellow elsewhere in the same guess leave it allowed.
        state.derive_clues(&word("esses"), &answer);
        assert_eq!(state.minimum_count(b's'), 1);
        assert_eq!(state.minimum_count(b'e'), 1);
        assert!(!state.is_excluded(b's'));
        assert!(!state.is_excluded(b'e'));
    }

    #[test]
    fn admits_checks_each_constraint_kind() {
        let mut state = ConstraintState::new();
        state.derive_clues(&word("trace"), &word("crate"));

        assert!(state.admits(&word("crate")));
        // T at position 0 is forbidden.
        assert!(!state.admits(&word("trace")));
        // Missing the required T.
        assert!(!state.admits(&word("craze")));
        // R not locked at position 1.
        assert!(!state.admits(&word("cater")));
    }

    #[test]
    fn admits_rejects_excluded_letters() {
        let mut state = ConstraintState::new();
        state.derive_clues(&word("crane"), &word("slate"));

        assert!(state.is_excluded(b'c'));
        assert!(state.is_excluded(b'r'));
        assert!(state.is_excluded(b'n'));
        assert!(state.admits(&word("slate")));
        assert!(!state.admits(&word("crate")));
    }
}
