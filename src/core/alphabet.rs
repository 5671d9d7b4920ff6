//! Dense letter encoding
//!
//! The alphabet is derived from the words of a run and sorted, so the same
//! input always yields the same letter codes.

use crate::error::{EngineError, Result};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Maximum number of distinct letters an alphabet may hold
///
/// Letter sets are 128-bit masks, one bit per code.
pub const MAX_LETTERS: usize = 128;

/// Bijection between the letters observed in a corpus and `0..len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    codes: FxHashMap<char, u8>,
}

impl Alphabet {
    /// Build an alphabet from every letter appearing in `words`
    ///
    /// # Errors
    /// Returns `AlphabetTooLarge` if more than [`MAX_LETTERS`] distinct letters appear.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_words(["bad", "cab"]).unwrap();
    /// assert_eq!(alphabet.letters(), &['a', 'b', 'c', 'd']);
    /// assert_eq!(alphabet.code_of('c'), Some(2));
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        for word in words {
            seen.extend(word.as_ref().chars());
        }

        if seen.len() > MAX_LETTERS {
            return Err(EngineError::AlphabetTooLarge {
                size: seen.len(),
                max: MAX_LETTERS,
            });
        }

        let letters: Vec<char> = seen.into_iter().collect();
        let codes = letters
            .iter()
            .enumerate()
            .map(|(code, &letter)| (letter, code as u8))
            .collect();

        Ok(Self { letters, codes })
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters in code order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn code_of(&self, letter: char) -> Option<u8> {
        self.codes.get(&letter).copied()
    }

    #[inline]
    #[must_use]
    pub fn letter_of(&self, code: u8) -> Option<char> {
        self.letters.get(usize::from(code)).copied()
    }

    /// Encode a word into letter codes
    ///
    /// # Errors
    /// Returns `UnknownLetter` naming the word if any letter is outside the alphabet.
    pub fn encode(&self, word: &str) -> Result<Vec<u8>> {
        word.chars()
            .map(|letter| {
                self.code_of(letter)
                    .ok_or_else(|| EngineError::UnknownLetter {
                        word: word.to_string(),
                        letter,
                    })
            })
            .collect()
    }

    /// Decode letter codes back into text
    ///
    /// Codes outside the alphabet decode to `'?'`.
    #[must_use]
    pub fn decode(&self, codes: &[u8]) -> String {
        codes
            .iter()
            .map(|&code| self.letter_of(code).unwrap_or('?'))
            .collect()
    }
}
