//! Run context: the alphabet plus every encoded word list
//!
//! Built once from raw word lists and passed by reference to the engine.

use super::{Alphabet, Word};
use crate::error::{EngineError, Result};
use rustc_hash::FxHashSet;
use tracing::info;

/// Encoded guesses and targets sharing one alphabet
#[derive(Debug, Clone)]
pub struct Corpus {
    alphabet: Alphabet,
    word_length: usize,
    guesses: Vec<Word>,
    targets: Vec<Word>,
    candidates: Option<Vec<Word>>,
}

impl Corpus {
    /// Start building a corpus of words with `word_length` letters
    #[must_use]
    pub fn builder(word_length: usize) -> CorpusBuilder {
        CorpusBuilder {
            word_length,
            guesses: Vec::new(),
            targets: Vec::new(),
            candidates: None,
            union_targets: false,
        }
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Targets assumed to be the secret when deriving feedback
    #[must_use]
    pub fn hypotheticals(&self) -> &[Word] {
        &self.targets
    }

    /// Targets tested for consistency with the feedback
    ///
    /// Same as [`Self::hypotheticals`] unless a separate pool was supplied.
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.candidates.as_deref().unwrap_or(&self.targets)
    }

    /// Index of the guess spelled `text`
    #[must_use]
    pub fn guess_index(&self, text: &str) -> Option<usize> {
        self.guesses.iter().position(|w| w.text() == text)
    }
}

/// Collects raw word lists, then encodes them against a shared alphabet
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    word_length: usize,
    guesses: Vec<String>,
    targets: Vec<String>,
    candidates: Option<Vec<String>>,
    union_targets: bool,
}

impl CorpusBuilder {
    #[must_use]
    pub fn guesses<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guesses = words.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn targets<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = words.into_iter().map(Into::into).collect();
        self
    }

    /// Use a separate candidate pool instead of the targets
    #[must_use]
    pub fn candidates<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Append targets missing from the guess list so every answer is a legal guess
    #[must_use]
    pub const fn union_targets(mut self, union: bool) -> Self {
        self.union_targets = union;
        self
    }

    /// Build the alphabet from every list and encode all words
    ///
    /// # Errors
    /// - `InvalidWordLength` if the word length is zero
    /// - `EmptyWordList` if the guess, target or candidate list is empty
    /// - `LengthMismatch` / `UnknownLetter` / `AlphabetTooLarge` from encoding
    pub fn build(self) -> Result<Corpus> {
        let Self {
            word_length,
            mut guesses,
            targets,
            candidates,
            union_targets,
        } = self;

        if word_length == 0 {
            return Err(EngineError::InvalidWordLength);
        }

        if union_targets {
            let mut seen: FxHashSet<String> = guesses.iter().cloned().collect();
            for target in &targets {
                if seen.insert(target.clone()) {
                    guesses.push(target.clone());
                }
            }
        }

        for (list, words) in [
            ("guess", Some(&guesses)),
            ("target", Some(&targets)),
            ("candidate", candidates.as_ref()),
        ] {
            if words.is_some_and(Vec::is_empty) {
                return Err(EngineError::EmptyWordList { list, word_length });
            }
        }

        let alphabet = Alphabet::from_words(
            guesses
                .iter()
                .chain(&targets)
                .chain(candidates.iter().flatten()),
        )?;

        let encode = |words: &[String]| -> Result<Vec<Word>> {
            words
                .iter()
                .map(|w| Word::encode(w, &alphabet, word_length))
                .collect()
        };

        let guesses = encode(&guesses)?;
        let targets = encode(&targets)?;
        let candidates = candidates.as_deref().map(encode).transpose()?;

        info!(
            guesses = guesses.len(),
            targets = targets.len(),
            candidates = candidates.as_ref().map_or(targets.len(), Vec::len),
            letters = alphabet.len(),
            word_length,
            "corpus encoded"
        );

        Ok(Corpus {
            alphabet,
            word_length,
            guesses,
            targets,
            candidates,
        })
    }
}
