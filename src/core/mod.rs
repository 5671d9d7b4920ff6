//! Core domain types
//!
//! Alphabet encoding, encoded words, feedback classification, and the corpus
//! context that ties them together for a run.

mod alphabet;
mod corpus;
mod pattern;
mod word;

pub use alphabet::{Alphabet, MAX_LETTERS};
pub use corpus::{Corpus, CorpusBuilder};
pub use pattern::{Feedback, FeedbackPattern, FeedbackRule};
pub use word::{LetterSet, Word};
