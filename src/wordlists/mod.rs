//! Word lists for a ranking run
//!
//! Loads the guess, target and optional candidate lists and turns them into a
//! [`Corpus`].

pub mod loader;

use crate::config::EngineConfig;
use crate::core::Corpus;
use crate::error::Result;
use loader::load_word_list;
use std::path::Path;

/// Paths of the word lists for one run
#[derive(Debug, Clone, Copy)]
pub struct WordListPaths<'a> {
    pub guesses: &'a Path,
    pub targets: &'a Path,
    /// Separate candidate pool; defaults to the targets
    pub candidates: Option<&'a Path>,
}

/// Load every list, keep words of the configured length, and encode them
///
/// # Errors
///
/// Fails on unreadable files, empty lists after filtering, or encoding errors.
pub fn prepare_corpus(
    paths: WordListPaths<'_>,
    config: &EngineConfig,
    union_targets: bool,
) -> Result<Corpus> {
    let word_length = config.word_length;
    let guesses = load_word_list(paths.guesses, word_length)?;
    let targets = load_word_list(paths.targets, word_length)?;

    let mut builder = Corpus::builder(word_length)
        .guesses(guesses.words)
        .targets(targets.words)
        .union_targets(union_targets);

    if let Some(path) = paths.candidates {
        builder = builder.candidates(load_word_list(path, word_length)?.words);
    }

    builder.build()
}
