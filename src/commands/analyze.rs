//! Guess analysis command
//!
//! Breaks one guess's score down by hypothetical target.

use crate::core::FeedbackPattern;
use crate::error::{EngineError, Result};
use crate::solver::Engine;

/// Feedback and remaining candidates for one hypothetical target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: String,
    pub pattern: FeedbackPattern,
    /// Consistent candidates, or the penalty if there were none
    pub sat_count: u64,
    pub penalized: bool,
}

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub word: String,
    pub score: f64,
    pub total_targets: usize,
    pub total_candidates: usize,
    /// Outcomes ordered from most to fewest remaining candidates
    pub outcomes: Vec<TargetOutcome>,
}

impl GuessAnalysis {
    /// Hypothetical targets the guess identifies outright
    #[must_use]
    pub fn solved_outright(&self) -> usize {
        self.outcomes.iter().filter(|o| o.sat_count == 1).count()
    }

    #[must_use]
    pub fn penalized(&self) -> usize {
        self.outcomes.iter().filter(|o| o.penalized).count()
    }
}

/// Analyze how `word` splits the targets
///
/// # Errors
///
/// Returns `UnknownGuess` if the word is not in the guess list.
pub fn analyze_guess(engine: &Engine<'_>, word: &str) -> Result<GuessAnalysis> {
    let corpus = engine.corpus();
    let text = word.trim().to_lowercase();
    let index = corpus
        .guess_index(&text)
        .ok_or_else(|| EngineError::UnknownGuess(word.to_string()))?;

    let guess = &corpus.guesses()[index];
    let rule = engine.config().feedback_rule;
    let penalty = engine.penalty();

    let raw_counts = engine.raw_sat_counts(index)?;
    let counts: Vec<u64> = raw_counts.iter().map(|&c| penalty.apply(c)).collect();
    let mut outcomes: Vec<TargetOutcome> = corpus
        .hypotheticals()
        .iter()
        .zip(&raw_counts)
        .map(|(target, &raw)| TargetOutcome {
            target: target.text().to_string(),
            pattern: rule.classify(guess, target),
            sat_count: penalty.apply(raw),
            penalized: raw == 0,
        })
        .collect();

    let score = counts.iter().sum::<u64>() as f64 / counts.len() as f64;
    outcomes.sort_by(|a, b| b.sat_count.cmp(&a.sat_count));

    Ok(GuessAnalysis {
        word: text,
        score,
        total_targets: corpus.hypotheticals().len(),
        total_candidates: corpus.candidates().len(),
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::Corpus;

    fn config() -> EngineConfig {
        EngineConfig::default().with_word_length(2)
    }

    #[test]
    fn analyze_two_letter_guess() {
        let words = ["aa", "ab", "ba", "bb"];
        let corpus = Corpus::builder(2).guesses(words).targets(words).build().unwrap();
        let engine = Engine::new(&corpus, &config()).unwrap();

        let analysis = analyze_guess(&engine, "AA").unwrap();

        assert_eq!(analysis.word, "aa");
        assert!((analysis.score - 1.5).abs() < 1e-12);
        assert_eq!(analysis.solved_outright(), 2);
        assert_eq!(analysis.penalized(), 0);

        // Stable sort keeps ab before ba among the two-candidate outcomes
        assert_eq!(analysis.outcomes[0].target, "ab");
        assert_eq!(analysis.outcomes[0].sat_count, 2);
        assert_eq!(
            analysis.outcomes[0].pattern,
            "GY".parse::<FeedbackPattern>().unwrap()
        );
        assert_eq!(analysis.outcomes[1].target, "ba");
    }

    #[test]
    fn analyze_reports_penalized_targets() {
        let corpus = Corpus::builder(2)
            .guesses(["aa", "bb"])
            .targets(["ab", "bb"])
            .candidates(["bb"])
            .build()
            .unwrap();
        let engine = Engine::new(&corpus, &config()).unwrap();

        let analysis = analyze_guess(&engine, "aa").unwrap();
        assert_eq!(analysis.penalized(), 1);
        assert_eq!(analysis.outcomes[0].target, "ab");
        assert_eq!(analysis.outcomes[0].sat_count, 2);
        assert!(analysis.outcomes[0].penalized);
        // (2 + 1) / 2
        assert!((analysis.score - 1.5).abs() < 1e-12);
    }

    #[test]
    fn analyze_unknown_word() {
        let words = ["aa", "ab"];
        let corpus = Corpus::builder(2).guesses(words).targets(words).build().unwrap();
        let engine = Engine::new(&corpus, &config()).unwrap();

        assert!(matches!(
            analyze_guess(&engine, "zz"),
            Err(EngineError::UnknownGuess(w)) if w == "zz"
        ));
    }
}
