//! Error types for corpus preparation and engine configuration
//!
//! Degenerate feedback patterns are not errors: they are absorbed by the
//! scorer's penalty (see [`crate::solver::DegeneratePenalty`]).

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, EngineError>;

/// Everything that can stop a ranking run before it produces scores
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no {list} words of length {word_length} found")]
    EmptyWordList {
        list: &'static str,
        word_length: usize,
    },

    #[error("word '{word}' contains letter '{letter}' which is not in the alphabet")]
    UnknownLetter { word: String, letter: char },

    #[error("word '{word}' has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("alphabet has {size} distinct letters, at most {max} are supported")]
    AlphabetTooLarge { size: usize, max: usize },

    #[error("configured word length {configured} does not match the corpus word length {corpus}")]
    WordLengthMismatch { configured: usize, corpus: usize },

    #[error("word length must be at least 1")]
    InvalidWordLength,

    #[error("{axis} chunk size must be at least 1")]
    InvalidChunkSize { axis: &'static str },

    #[error(
        "a {guesses}x{targets}x{targets} chunk needs {cells} tensor cells, limit is {limit}; \
         choose smaller chunk sizes"
    )]
    ChunkTooLarge {
        guesses: usize,
        targets: usize,
        cells: usize,
        limit: usize,
    },

    #[error("guess '{0}' is not in the guess list")]
    UnknownGuess(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_message_names_list_and_length() {
        let err = EngineError::EmptyWordList {
            list: "target",
            word_length: 5,
        };
        assert_eq!(err.to_string(), "no target words of length 5 found");
    }

    #[test]
    fn unknown_letter_message_names_word() {
        let err = EngineError::UnknownLetter {
            word: "crane".to_string(),
            letter: 'q',
        };
        assert!(err.to_string().contains("'crane'"));
        assert!(err.to_string().contains("'q'"));
    }

    #[test]
    fn chunk_too_large_suggests_fix() {
        let err = EngineError::ChunkTooLarge {
            guesses: 10,
            targets: 20,
            cells: 4000,
            limit: 100,
        };
        assert!(err.to_string().contains("choose smaller chunk sizes"));
    }
}
