//! Encoded word representation
//!
//! A Word keeps its original text, its letter codes, and a bitmask of the
//! letters it contains for constant-time membership tests.

use super::Alphabet;
use crate::error::{EngineError, Result};
use std::fmt;

/// Set of letter codes, one bit per code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u128);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn contains(self, code: u8) -> bool {
        self.0 & (1u128 << code) != 0
    }

    #[inline]
    pub fn insert(&mut self, code: u8) {
        self.0 |= 1u128 << code;
    }

    /// True if the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for code in iter {
            set.insert(code);
        }
        set
    }
}

/// A fixed-length word encoded against an [`Alphabet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    codes: Box<[u8]>,
    letters: LetterSet,
}

impl Word {
    /// Encode `text` with `alphabet`, requiring exactly `word_length` letters
    ///
    /// # Errors
    /// - `LengthMismatch` if the letter count differs from `word_length`
    /// - `UnknownLetter` if a letter is missing from the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Alphabet, Word};
    ///
    /// let alphabet = Alphabet::from_words(["crane"]).unwrap();
    /// let word = Word::encode("crane", &alphabet, 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.codes(), &[1, 4, 0, 3, 2]);
    ///
    /// assert!(Word::encode("cran", &alphabet, 5).is_err());
    /// assert!(Word::encode("crank", &alphabet, 5).is_err());
    /// ```
    pub fn encode(text: &str, alphabet: &Alphabet, word_length: usize) -> Result<Self> {
        let actual = text.chars().count();
        if actual != word_length {
            return Err(EngineError::LengthMismatch {
                word: text.to_string(),
                expected: word_length,
                actual,
            });
        }

        let codes = alphabet.encode(text)?.into_boxed_slice();
        let letters = codes.iter().copied().collect();

        Ok(Self {
            text: text.to_string(),
            codes,
            letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Letter code at `position`
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn code_at(&self, position: usize) -> u8 {
        self.codes[position]
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, code: u8) -> bool {
        self.letters.contains(code)
    }

    /// True if `code` occurs at any position other than `position`
    #[inline]
    #[must_use]
    pub fn has_letter_elsewhere(&self, code: u8, position: usize) -> bool {
        self.codes
            .iter()
            .enumerate()
            .any(|(i, &c)| i != position && c == code)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
