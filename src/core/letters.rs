//! Compact letter sets over the lowercase ASCII alphabet

use std::fmt;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter (`b'a'` → 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter, returning whether it was newly inserted
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = 1 << letter_index(letter);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'q'));
        assert!(set.contains(b'q'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn alphabet_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'z'), ALPHABET_SIZE - 1);
    }
}
