//! Word list loading utilities
//!
//! Reads newline-delimited word lists and keeps the entries of the configured
//! length.

use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Words kept from one list, plus how many entries were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
    /// Non-empty entries whose length differed from the requested one
    pub discarded: usize,
}

impl WordList {
    /// Keep trimmed, lowercased lines with exactly `word_length` letters
    ///
    /// Blank lines are skipped without counting as discarded.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::wordlists::loader::WordList;
    ///
    /// let list = WordList::from_lines("Crane\n\nabc\nslate\n".lines(), 5);
    /// assert_eq!(list.words, vec!["crane", "slate"]);
    /// assert_eq!(list.discarded, 1);
    /// ```
    #[must_use]
    pub fn from_lines<'a, I>(lines: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list = Self::default();
        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Lowercasing can change the character count
            let word = trimmed.to_lowercase();
            if word.chars().count() == word_length {
                list.words.push(word);
            } else {
                list.discarded += 1;
            }
        }
        list
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `EngineError::Io` with the path if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_word_list;
///
/// let list = load_word_list("validGuesses.txt", 5).unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P, word_length: usize) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = WordList::from_lines(content.lines(), word_length);
    if list.discarded > 0 {
        warn!(
            path = %path.display(),
            discarded = list.discarded,
            word_length,
            "skipped entries of other lengths"
        );
    }
    debug!(path = %path.display(), words = list.len(), "word list loaded");

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_ranker_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn filters_by_length() {
        let list = WordList::from_lines(["crane", "slates", "irate", "abc"], 5);
        assert_eq!(list.words, ["crane", "irate"]);
        assert_eq!(list.discarded, 2);
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let list = WordList::from_lines(["  CRANE ", "\tSlate"], 5);
        assert_eq!(list.words, ["crane", "slate"]);
    }

    #[test]
    fn length_counts_characters() {
        let list = WordList::from_lines(["ñandú", "naïve"], 5);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn length_is_checked_after_lowercasing() {
        // 'İ' lowercases to 'i' plus a combining dot
        let list = WordList::from_lines(["crane", "İRATE"], 5);
        assert_eq!(list.words, ["crane"]);
        assert_eq!(list.discarded, 1);
    }

    #[test]
    fn empty_input() {
        let list = WordList::from_lines(Vec::<&str>::new(), 5);
        assert!(list.is_empty());
        assert_eq!(list.discarded, 0);
    }

    #[test]
    fn loads_from_file() {
        let path = temp_file("loads.txt", "aa\nab\r\nabc\n\nba\n");
        let list = load_word_list(&path, 2).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.words, ["aa", "ab", "ba"]);
        assert_eq!(list.discarded, 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("wordle_ranker_definitely_missing.txt");
        let err = load_word_list(&path, 5).unwrap_err();
        assert!(matches!(err, EngineError::Io { path: p, .. } if p == path));
    }
}
