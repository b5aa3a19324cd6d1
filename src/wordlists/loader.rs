//! Word list loading utilities
//!
//! Lists are newline-delimited files with one word per line.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised when a word list cannot be used
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be opened or read
    Missing { path: PathBuf, source: io::Error },
    /// The file was read but held no valid words
    Empty { path: PathBuf },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path, .. } => {
                write!(f, "cannot read word list '{}'", path.display())
            }
            Self::Empty { path } => {
                write!(f, "word list '{}' contains no valid words", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Load words from a file
///
/// Blank lines are ignored and invalid entries are skipped. An empty list is an
/// error when `allow_empty` is false.
///
/// # Errors
///
/// Returns [`WordListError::Missing`] if the file cannot be read and
/// [`WordListError::Empty`] if no valid word remains and `allow_empty` is false.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle-list.txt", false).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    allow_empty: bool,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());

    if words.is_empty() && !allow_empty {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// Parse newline-delimited text into words, keeping file order
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::debug!("skipping line {}: '{trimmed}': {e}", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
