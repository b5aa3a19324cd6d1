//! Constraint-based Wordle solving
//!
//! Clues from each guess tighten a [`ConstraintState`], the candidate list is
//! re-filtered against it, and a [`Strategy`] picks the next guess.

mod constraints;
mod engine;
mod filter;
pub mod selector;
pub mod strategy;

pub use constraints::ConstraintState;
pub use engine::{
    AttemptRecord, DEFAULT_MAX_ROUNDS, DEFAULT_OPENING, GuessStep, Outcome, SolveError, Solver,
    SolverConfig,
};
pub use filter::filter_candidates;
pub use selector::select_next;
pub use strategy::{CoverageStrategy, Strategy};
