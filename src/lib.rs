//! Wordle Simulator
//!
//! Plays automated Wordle games against every word of an answer list using a
//! constraint-tracking solver and a letter-frequency coverage heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Clues, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let clues = Clues::calculate(&guess, &answer);
//! assert_eq!(clues.to_emoji(), "⬜⬜🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
