//! Word solving command
//!
//! Solves a specific target word and returns the full trace of the attempt.

use crate::core::{Word, WordError};
use crate::solver::{AttemptRecord, Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Solve a specific word using the given solver
///
/// The target does not have to be in the answer list; an unknown word simply
/// runs out of candidates.
///
/// # Errors
///
/// Returns a [`WordError`] if the target is not a five-letter ASCII word.
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<AttemptRecord, WordError> {
    let target = Word::new(config.target.as_str())?;
    if !solver.answer_words().contains(&target) {
        log::info!("{target} is not in the answer list");
    }
    Ok(solver.solve_one(&target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CoverageStrategy, Outcome, SolveError, SolverConfig};
    use crate::wordlists::loader::words_from_slice;

    fn solver_for(answers: &[Word]) -> Solver<'_, CoverageStrategy> {
        let config = SolverConfig::new(Word::new("crane").unwrap(), 6);
        Solver::new(CoverageStrategy::default(), answers, &[], config)
    }

    #[test]
    fn solve_word_traces_every_round() {
        let answers = words_from_slice(&["crane", "slate", "crate"]);
        let solver = solver_for(&answers);

        let record = solve_word(&SolveConfig::new("crate".to_string()), &solver).unwrap();
        assert_eq!(record.outcome, Outcome::Solved(2));
        assert_eq!(record.steps.len(), 2);
        for step in &record.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(record.steps[1].clues.is_perfect());
    }

    #[test]
    fn target_is_case_insensitive() {
        let answers = words_from_slice(&["crane", "slate", "crate"]);
        let solver = solver_for(&answers);

        let record = solve_word(&SolveConfig::new("SLATE".to_string()), &solver).unwrap();
        assert_eq!(record.answer.text(), "slate");
        assert!(record.is_solved());
    }

    #[test]
    fn invalid_target_returns_error() {
        let answers = words_from_slice(&["crane"]);
        let solver = solver_for(&answers);

        let err = solve_word(&SolveConfig::new("toolong".to_string()), &solver);
        assert_eq!(err.unwrap_err(), WordError::InvalidLength(7));
    }

    #[test]
    fn unknown_target_runs_out_of_candidates() {
        let answers = words_from_slice(&["crane", "slate", "crate"]);
        let solver = solver_for(&answers);

        let record = solve_word(&SolveConfig::new("ghost".to_string()), &solver).unwrap();
        assert_eq!(
            record.outcome,
            Outcome::Failed(SolveError::ExhaustedCandidates { round: 2 })
        );
    }
}
