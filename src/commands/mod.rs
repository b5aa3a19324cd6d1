//! Command implementations

pub mod run;
pub mod solve;

pub use run::{FailedAttempt, RunConfig, RunStatistics, run_all, select_answers};
pub use solve::{SolveConfig, solve_word};
