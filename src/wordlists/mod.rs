//! Word lists for Wordle simulation
//!
//! Two lists are read from disk before any solving starts: the answer list, which
//! is also the initial candidate set, and the guess-only list used as a fallback.

pub mod loader;

pub use loader::WordListError;

use crate::core::Word;
use std::path::Path;

/// Default location of the answer list
pub const DEFAULT_ANSWERS_PATH: &str = "wordle-list.txt";

/// Default location of the guess-only list
pub const DEFAULT_GUESSES_PATH: &str = "wordle_possibles.txt";

/// Both corpora, in file order
#[derive(Debug, Clone)]
pub struct WordLists {
    pub answers: Vec<Word>,
    pub guesses: Vec<Word>,
}

impl WordLists {
    /// Load both lists
    ///
    /// The answer list must contain at least one word; the guess list may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if either file is missing or the answer list is empty.
    pub fn load(answers: impl AsRef<Path>, guesses: impl AsRef<Path>) -> Result<Self, WordListError> {
        let answers = loader::load_from_file(answers, false)?;
        let guesses = loader::load_from_file(guesses, true)?;
        Ok(Self { answers, guesses })
    }
}
