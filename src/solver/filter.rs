//! Candidate filtering against accumulated constraints

use super::ConstraintState;
use crate::core::Word;

/// Keep the candidates consistent with `state`, preserving their order
///
/// Callers pass the previous round's survivors, so the result never contains a
/// word that an earlier round eliminated.
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::solver::{ConstraintState, filter_candidates};
///
/// let corpus: Vec<Word> = ["crane", "slate", "crate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = corpus.iter().collect();
///
/// let mut state = ConstraintState::new();
/// state.derive_clues(&corpus[0], &corpus[2]);
///
/// let survivors = filter_candidates(&candidates, &state);
/// assert_eq!(survivors, vec![&corpus[2]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(candidates: &[&'a Word], state: &ConstraintState) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|word| state.admits(word))
        .collect()
}
