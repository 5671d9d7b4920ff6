//! Engine configuration
//!
//! Every knob of a ranking run lives here; the CLI maps its flags onto
//! [`EngineConfig`] and nothing else is read from the environment.

use crate::core::FeedbackRule;
use crate::error::{EngineError, Result};

/// Default ceiling on cells of one materialized consistency tensor (64 Mi)
pub const DEFAULT_MAX_TENSOR_CELLS: usize = 64 * 1024 * 1024;

/// Parameters of a ranking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Letters per word; list entries of any other length are discarded
    pub word_length: usize,
    /// Guesses per block
    pub guess_chunk: usize,
    /// Targets per block, used for both the hypothetical and candidate axes
    pub target_chunk: usize,
    /// Number of best and worst guesses to report
    pub top_k: usize,
    pub feedback_rule: FeedbackRule,
    /// Upper bound on `guess_chunk × target_chunk²` after clamping to the corpus
    pub max_tensor_cells: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            guess_chunk: 256,
            target_chunk: 256,
            top_k: 10,
            feedback_rule: FeedbackRule::Loose,
            max_tensor_cells: DEFAULT_MAX_TENSOR_CELLS,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_chunks(mut self, guess_chunk: usize, target_chunk: usize) -> Self {
        self.guess_chunk = guess_chunk;
        self.target_chunk = target_chunk;
        self
    }

    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub const fn with_feedback_rule(mut self, rule: FeedbackRule) -> Self {
        self.feedback_rule = rule;
        self
    }

    #[must_use]
    pub const fn with_max_tensor_cells(mut self, cells: usize) -> Self {
        self.max_tensor_cells = cells;
        self
    }

    /// Check the parameters that do not depend on corpus size
    ///
    /// The tensor ceiling is checked against the clamped chunk sizes when a
    /// chunk plan is built.
    ///
    /// # Errors
    /// Returns `InvalidWordLength` or `InvalidChunkSize` for zero values.
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(EngineError::InvalidWordLength);
        }
        if self.guess_chunk == 0 {
            return Err(EngineError::InvalidChunkSize { axis: "guess" });
        }
        if self.target_chunk == 0 {
            return Err(EngineError::InvalidChunkSize { axis: "target" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.word_length, 5);
        assert_eq!(config.feedback_rule, FeedbackRule::Loose);
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = EngineConfig::default()
            .with_word_length(2)
            .with_chunks(3, 4)
            .with_top_k(1)
            .with_feedback_rule(FeedbackRule::Exact)
            .with_max_tensor_cells(48);
        assert_eq!(config.word_length, 2);
        assert_eq!((config.guess_chunk, config.target_chunk), (3, 4));
        assert_eq!(config.top_k, 1);
        assert_eq!(config.feedback_rule, FeedbackRule::Exact);
        assert_eq!(config.max_tensor_cells, 48);
    }

    #[test]
    fn zero_sizes_rejected() {
        assert!(matches!(
            EngineConfig::default().with_chunks(0, 4).validate(),
            Err(EngineError::InvalidChunkSize { axis: "guess" })
        ));
        assert!(matches!(
            EngineConfig::default().with_chunks(4, 0).validate(),
            Err(EngineError::InvalidChunkSize { axis: "target" })
        ));
        assert!(matches!(
            EngineConfig::default().with_word_length(0).validate(),
            Err(EngineError::InvalidWordLength)
        ));
    }
}
