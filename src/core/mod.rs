//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and independent of solving strategy.

mod clue;
mod letters;
mod word;

pub use clue::{Clue, Clues};
pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
