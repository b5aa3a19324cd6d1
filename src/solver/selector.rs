//! Letter-coverage guess scoring
//!
//! Frequencies are taken over every letter occurrence of every remaining candidate.
//! A word scores the sum of the frequencies of its distinct letters, so repeated
//! letters add nothing beyond their first copy.

use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Letter occurrence counts across all candidates, duplicates included
#[must_use]
pub fn letter_frequencies(candidates: &[&Word]) -> [usize; ALPHABET_SIZE] {
    let mut freq = [0; ALPHABET_SIZE];
    for word in candidates {
        for &letter in word.chars() {
            freq[letter_index(letter)] += 1;
        }
    }
    freq
}

/// Sum of the frequencies of the distinct letters in `word`
#[must_use]
pub fn coverage_score(word: &Word, freq: &[usize; ALPHABET_SIZE]) -> usize {
    word.distinct_letters()
        .map(|letter| freq[letter_index(letter)])
        .sum()
}

/// Highest-coverage word, scanning candidates first and then the guess pool
///
/// Only a strictly greater score replaces the current best, so the earliest word
/// wins ties and candidates win ties against the guess pool.
#[must_use]
pub fn best_by_coverage<'a>(candidates: &[&'a Word], guess_pool: &'a [Word]) -> Option<&'a Word> {
    let freq = letter_frequencies(candidates);

    candidates
        .iter()
        .copied()
        .chain(guess_pool)
        .fold(None, |best: Option<(&'a Word, usize)>, word| {
            let score = coverage_score(word, &freq);
            match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((word, score)),
            }
        })
        .map(|(word, _)| word)
}

/// Pick the next guess with the default small-set shortcuts
///
/// - no candidates: `None`
/// - one candidate: that candidate
/// - three candidates: the first one, without scoring
/// - otherwise: [`best_by_coverage`]
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::solver::select_next;
///
/// let words: Vec<Word> = ["crate", "grate", "irate", "plate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let pool = [Word::new("clogs").unwrap(), Word::new("pricy").unwrap()];
/// let guess = select_next(&candidates, &pool).unwrap();
/// assert_eq!(guess.text(), "crate");
/// ```
#[must_use]
pub fn select_next<'a>(candidates: &[&'a Word], guess_pool: &'a [Word]) -> Option<&'a Word> {
    use super::{CoverageStrategy, Strategy};

    CoverageStrategy::default().select_guess(candidates, guess_pool)
}
