//! Single-answer solving loop
//!
//! Each call to [`Solver::solve_one`] owns a fresh [`ConstraintState`] and its own
//! candidate list, so attempts are independent and can run on any thread.

use super::filter::filter_candidates;
use super::strategy::Strategy;
use super::ConstraintState;
use crate::core::{Clues, Word};
use std::fmt;

/// Round limit of the standard game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Opening guess used when none is configured
pub const DEFAULT_OPENING: &str = "salet";

/// Why an attempt ended without finding the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// No candidate survived filtering, so no guess could be chosen
    ExhaustedCandidates { round: usize },
    /// Every permitted round was played without a match
    RoundLimitExceeded { max_rounds: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedCandidates { round } => {
                write!(f, "no candidates left in round {round}")
            }
            Self::RoundLimitExceeded { max_rounds } => {
                write!(f, "not solved within {max_rounds} guesses")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Terminal state of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The answer was played in this round (1-based)
    Solved(usize),
    Failed(SolveError),
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: Word,
    pub clues: Clues,
    /// Candidates the guess was chosen from
    pub candidates_before: usize,
    /// Candidates left once the clues were applied (1 after a perfect clue)
    pub candidates_after: usize,
}

/// Full record of one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub answer: Word,
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
}

impl AttemptRecord {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    /// Round in which the answer was found
    #[must_use]
    pub const fn solved_in(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Solved(round) => Some(round),
            Outcome::Failed(_) => None,
        }
    }

    /// Guesses in the order they were played
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.steps.iter().map(|step| &step.word)
    }
}

/// Settings shared by every attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub opening: Word,
    pub max_rounds: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(opening: Word, max_rounds: usize) -> Self {
        Self {
            opening,
            max_rounds,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let opening = Word::new(DEFAULT_OPENING).expect("default opening is a valid word");
        Self::new(opening, DEFAULT_MAX_ROUNDS)
    }
}

/// Main Wordle solver
///
/// Borrows both corpora read-only; nothing is shared mutably between attempts.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    answer_words: &'a [Word],
    guess_words: &'a [Word],
    config: SolverConfig,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `strategy`: picks every guess after the opening
    /// - `answer_words`: possible answers, the initial candidate set
    /// - `guess_words`: guess-only words consulted as a fallback
    /// - `config`: opening word and round limit
    pub const fn new(
        strategy: S,
        answer_words: &'a [Word],
        guess_words: &'a [Word],
        config: SolverConfig,
    ) -> Self {
        Self {
            strategy,
            answer_words,
            guess_words,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    /// Play one full game against `answer`
    ///
    /// Never plays more than `max_rounds` guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    /// use wordle_sim::solver::{CoverageStrategy, Outcome, Solver, SolverConfig};
    ///
    /// let answers: Vec<Word> = ["crane", "slate", "crate"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let config = SolverConfig::new(Word::new("crane").unwrap(), 6);
    /// let solver = Solver::new(CoverageStrategy::default(), &answers, &[], config);
    ///
    /// let record = solver.solve_one(&answers[2]);
    /// assert_eq!(record.outcome, Outcome::Solved(2));
    /// ```
    pub fn solve_one(&self, answer: &Word) -> AttemptRecord {
        let mut state = ConstraintState::new();
        let mut candidates: Vec<&'a Word> = self.answer_words.iter().collect();
        let mut steps: Vec<GuessStep> = Vec::new();

        for round in 1..=self.config.max_rounds {
            let guess = if round == 1 {
                &self.config.opening
            } else if let Some(guess) = self.strategy.select_guess(&candidates, self.guess_words)
            {
                guess
            } else {
                log::debug!("{answer}: no candidates left in round {round}");
                return AttemptRecord {
                    answer: answer.clone(),
                    steps,
                    outcome: Outcome::Failed(SolveError::ExhaustedCandidates { round }),
                };
            };

            let candidates_before = candidates.len();

            if guess == answer {
                log::debug!("{answer}: solved in round {round}");
                steps.push(GuessStep {
                    word: guess.clone(),
                    clues: Clues::PERFECT,
                    candidates_before,
                    candidates_after: 1,
                });
                return AttemptRecord {
                    answer: answer.clone(),
                    steps,
                    outcome: Outcome::Solved(round),
                };
            }

            let clues = state.derive_clues(guess, answer);
            candidates = filter_candidates(&candidates, &state);
            // A disproven guess can still satisfy every constraint it produced.
            if let Some(index) = candidates.iter().position(|&word| word == guess) {
                candidates.remove(index);
            }

            log::debug!(
                "{answer}: round {round} played {guess} {clues}, candidates {candidates_before} -> {}",
                candidates.len()
            );

            steps.push(GuessStep {
                word: guess.clone(),
                clues,
                candidates_before,
                candidates_after: candidates.len(),
            });
        }

        AttemptRecord {
            answer: answer.clone(),
            steps,
            outcome: Outcome::Failed(SolveError::RoundLimitExceeded {
                max_rounds: self.config.max_rounds,
            }),
        }
    }
}
