//! Main ranking interface

use super::consistency::ConsistencyTensor;
use super::executor::{ChunkPlan, ChunkedExecutor};
use super::ranker::{Ranking, rank};
use super::scorer::{DegeneratePenalty, ScoreAccumulator};
use crate::config::EngineConfig;
use crate::core::Corpus;
use crate::error::{EngineError, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Execution figures of one scoring run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub tasks: usize,
    pub tensors: usize,
    pub peak_tensor_cells: usize,
    pub elapsed: Duration,
}

/// Scores of every guess, in guess order, plus how they were computed
#[derive(Debug, Clone)]
pub struct ScoreRun {
    pub scores: Vec<f64>,
    pub stats: RunStats,
}

/// Progress after one guess in incremental mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessProgress {
    /// Zero-based index of the guess just scored
    pub index: usize,
    pub total: usize,
    pub score: f64,
    /// Best guess among those scored so far; the earliest wins ties
    pub best_index: usize,
    pub best_score: f64,
}

impl GuessProgress {
    /// Share of guesses scored, in percent
    ///
    /// The last guess reports `100.0`, not the `1.0` fraction older step
    /// logs printed next to a `%` sign.
    #[must_use]
    pub fn percent(&self) -> f64 {
        (self.index + 1) as f64 / self.total as f64 * 100.0
    }
}

/// Scores guesses of a corpus with a fixed configuration
///
/// # Examples
/// ```
/// use wordle_ranker::config::EngineConfig;
/// use wordle_ranker::core::Corpus;
/// use wordle_ranker::solver::Engine;
///
/// let corpus = Corpus::builder(2)
///     .guesses(["aa", "ab", "ba", "bb"])
///     .targets(["aa", "ab", "ba", "bb"])
///     .build()
///     .unwrap();
/// let config = EngineConfig::default().with_word_length(2).with_top_k(1);
/// let engine = Engine::new(&corpus, &config).unwrap();
///
/// let run = engine.score_all();
/// assert_eq!(run.scores, vec![1.5, 1.0, 1.0, 1.5]);
/// assert_eq!(engine.rank(&run.scores).best, vec![1]);
/// ```
pub struct Engine<'a> {
    corpus: &'a Corpus,
    config: EngineConfig,
    plan: ChunkPlan,
}

impl<'a> Engine<'a> {
    /// Plan chunked evaluation of `corpus` under `config`
    ///
    /// # Errors
    /// - `WordLengthMismatch` if `config` and `corpus` disagree on the word length
    /// - the configuration errors of [`ChunkPlan::new`]
    pub fn new(corpus: &'a Corpus, config: &EngineConfig) -> Result<Self> {
        if config.word_length != corpus.word_length() {
            return Err(EngineError::WordLengthMismatch {
                configured: config.word_length,
                corpus: corpus.word_length(),
            });
        }
        let plan = ChunkPlan::for_corpus(corpus, config)?;
        Ok(Self {
            corpus,
            config: config.clone(),
            plan,
        })
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn plan(&self) -> &ChunkPlan {
        &self.plan
    }

    fn executor(&self) -> ChunkedExecutor<'a> {
        ChunkedExecutor::new(self.corpus, self.config.feedback_rule)
    }

    fn stats(&self, elapsed: Duration) -> RunStats {
        RunStats {
            tasks: self.plan.task_count(),
            tensors: self.plan.tensor_count(),
            peak_tensor_cells: self.plan.peak_tensor_cells(),
            elapsed,
        }
    }

    /// Score every guess in one parallel batch
    #[must_use]
    pub fn score_all(&self) -> ScoreRun {
        self.score_all_with(|| {})
    }

    /// Score every guess, calling `on_task_done` as each chunk task finishes
    #[instrument(skip_all, fields(guesses = self.corpus.guesses().len()))]
    pub fn score_all_with<F>(&self, on_task_done: F) -> ScoreRun
    where
        F: Fn() + Sync,
    {
        let start = Instant::now();
        let tasks = self.plan.tasks();
        info!(tasks = tasks.len(), rule = ?self.config.feedback_rule, "scoring guesses");

        let accumulator = self.executor().run_tasks(&self.plan, &tasks, |_| on_task_done());

        let stats = self.stats(start.elapsed());
        info!(elapsed_ms = stats.elapsed.as_millis(), "scoring finished");
        ScoreRun {
            scores: accumulator.scores(),
            stats,
        }
    }

    /// Score guesses block by block in input order, reporting after each guess
    ///
    /// Each guess block is evaluated in parallel; progress for its guesses is
    /// reported in order once the whole block is done.
    #[instrument(skip_all, fields(guesses = self.corpus.guesses().len()))]
    pub fn score_incremental<F>(&self, mut on_guess: F) -> ScoreRun
    where
        F: FnMut(&GuessProgress),
    {
        let start = Instant::now();
        let executor = self.executor();
        let total = self.corpus.guesses().len();
        let mut accumulator = ScoreAccumulator::new(total);
        let mut best: Option<(usize, f64)> = None;

        for block in self.plan.guess_blocks() {
            let tasks: Vec<_> = self.plan.tasks_for(block.clone()).collect();
            let partial = executor.run_tasks(&self.plan, &tasks, |_| {});
            debug!(first = block.start, last = block.end - 1, "guess block scored");

            for index in block.clone() {
                let score = partial.score(index).unwrap_or(f64::INFINITY);
                if best.is_none_or(|(_, best_score)| score < best_score) {
                    best = Some((index, score));
                }
                let (best_index, best_score) = best.unwrap_or((index, score));
                on_guess(&GuessProgress {
                    index,
                    total,
                    score,
                    best_index,
                    best_score,
                });
            }

            accumulator = accumulator.merge(partial);
        }

        ScoreRun {
            scores: accumulator.scores(),
            stats: self.stats(start.elapsed()),
        }
    }

    /// Best and worst `top_k` guesses for `scores`
    #[must_use]
    pub fn rank(&self, scores: &[f64]) -> Ranking {
        rank(scores, self.config.top_k)
    }

    /// Stand-in count for feedback no candidate satisfies
    #[must_use]
    pub fn penalty(&self) -> DegeneratePenalty {
        self.executor().penalty()
    }

    /// sat_count of one guess against every hypothetical target, penalty applied
    ///
    /// # Errors
    /// Returns `UnknownGuess` if `guess` is out of range.
    pub fn sat_counts(&self, guess: usize) -> Result<Vec<u64>> {
        let penalty = self.penalty();
        Ok(self
            .raw_sat_counts(guess)?
            .into_iter()
            .map(|c| penalty.apply(c))
            .collect())
    }

    /// Consistent candidate count of one guess against every hypothetical target
    ///
    /// Zero where no candidate fits; see [`DegeneratePenalty`].
    ///
    /// # Errors
    /// Returns `UnknownGuess` if `guess` is out of range.
    pub fn raw_sat_counts(&self, guess: usize) -> Result<Vec<u64>> {
        let Some(word) = self.corpus.guesses().get(guess) else {
            return Err(EngineError::UnknownGuess(guess.to_string()));
        };

        let hypotheticals = self.corpus.hypotheticals();
        let candidates = self.corpus.candidates();
        let chunk = self.config.target_chunk;

        let mut counts = vec![0u64; hypotheticals.len()];
        for (h_block, slots) in hypotheticals.chunks(chunk).zip(counts.chunks_mut(chunk)) {
            for c_block in candidates.chunks(chunk) {
                ConsistencyTensor::evaluate(
                    self.config.feedback_rule,
                    std::slice::from_ref(word),
                    h_block,
                    c_block,
                )
                .accumulate_sat_counts(slots);
            }
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;
    use crate::solver::scorer::score_tensor;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const FOUR: [&str; 4] = ["aa", "ab", "ba", "bb"];

    fn corpus() -> Corpus {
        Corpus::builder(2).guesses(FOUR).targets(FOUR).build().unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig::default().with_word_length(2)
    }

    #[test]
    fn batch_scores_two_letter_corpus() {
        let corpus = corpus();
        let engine = Engine::new(&corpus, &config()).unwrap();
        let run = engine.score_all();
        assert_eq!(run.scores, [1.5, 1.0, 1.0, 1.5]);
        assert_eq!(run.stats.tasks, 1);
        assert_eq!(run.stats.peak_tensor_cells, 64);
    }

    #[test]
    fn exact_rule_scores() {
        let corpus = corpus();
        let config = config().with_feedback_rule(FeedbackRule::Exact);
        let engine = Engine::new(&corpus, &config).unwrap();
        assert_eq!(engine.score_all().scores, [1.0; 4]);
    }

    #[test]
    fn incremental_matches_batch_and_tracks_best() {
        let corpus = corpus();
        let engine = Engine::new(&corpus, &config().with_chunks(3, 1)).unwrap();

        let mut steps = Vec::new();
        let run = engine.score_incremental(|p| steps.push(*p));

        assert_eq!(run.scores, engine.score_all().scores);
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps.iter().map(|s| s.index).collect::<Vec<_>>(),
            [0, 1, 2, 3]
        );
        assert_eq!((steps[0].best_index, steps[0].best_score), (0, 1.5));
        assert_eq!((steps[1].best_index, steps[1].best_score), (1, 1.0));
        // ba ties ab, the earlier guess stays best
        assert_eq!(steps[2].best_index, 1);
        assert_eq!(steps[3].best_index, 1);
        assert!((steps[3].percent() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn sat_counts_for_one_guess() {
        let corpus = corpus();
        let engine = Engine::new(&corpus, &config().with_chunks(1, 3)).unwrap();
        assert_eq!(engine.sat_counts(0).unwrap(), [1, 2, 2, 1]);
        assert_eq!(engine.sat_counts(1).unwrap(), [1, 1, 1, 1]);
        assert!(matches!(
            engine.sat_counts(9),
            Err(EngineError::UnknownGuess(_))
        ));
    }

    #[test]
    fn sentinel_applies_when_candidates_differ() {
        let corpus = Corpus::builder(2)
            .guesses(["aa", "ab", "bb"])
            .targets(["ab"])
            .candidates(["bb"])
            .build()
            .unwrap();
        let engine = Engine::new(&corpus, &config()).unwrap();
        // aa vs ab needs a leading 'a', bb has none: penalty = 3 guesses
        assert_eq!(engine.raw_sat_counts(0).unwrap(), [0]);
        assert_eq!(engine.sat_counts(0).unwrap(), [3]);
        assert_eq!(engine.score_all().scores[0], 3.0);
    }

    #[test]
    fn rank_uses_top_k() {
        let corpus = corpus();
        let engine = Engine::new(&corpus, &config().with_top_k(2)).unwrap();
        let ranking = engine.rank(&engine.score_all().scores);
        assert_eq!(ranking.best, [1, 2]);
        assert_eq!(ranking.worst, [0, 3]);
    }

    fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
        (0..count)
            .map(|_| {
                (0..3)
                    .map(|_| char::from(b'a' + rng.random_range(0..4u8)))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn chunking_never_changes_scores() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..10 {
            let guess_count = rng.random_range(1..14);
            let target_count = rng.random_range(1..9);
            let candidate_count = rng.random_range(1..9);
            let guesses = random_words(&mut rng, guess_count);
            let targets = random_words(&mut rng, target_count);
            // A separate pool lets zero counts occur, so the penalty is exercised
            let candidates = random_words(&mut rng, candidate_count);

            let corpus = Corpus::builder(3)
                .guesses(guesses)
                .targets(targets)
                .candidates(candidates)
                .build()
                .unwrap();

            for rule in [FeedbackRule::Loose, FeedbackRule::Exact] {
                let penalty = DegeneratePenalty::for_guess_count(guess_count);
                let whole = ConsistencyTensor::evaluate(
                    rule,
                    corpus.guesses(),
                    corpus.hypotheticals(),
                    corpus.candidates(),
                );
                let expected = score_tensor(&whole, penalty);

                let widest = target_count.max(candidate_count);
                for (cn, cm) in [(1, 1), (2, 3), (5, 2), (guess_count, widest)] {
                    let config = EngineConfig::default()
                        .with_word_length(3)
                        .with_chunks(cn, cm)
                        .with_feedback_rule(rule);
                    let engine = Engine::new(&corpus, &config).unwrap();

                    let batch = engine.score_all().scores;
                    assert_eq!(batch, expected, "{rule:?} chunks ({cn}, {cm})");
                    assert_eq!(engine.score_all().scores, batch);
                    assert_eq!(engine.score_incremental(|_| {}).scores, expected);
                }
            }
        }
    }

    #[test]
    fn word_length_must_match_corpus() {
        let corpus = corpus();
        assert!(matches!(
            Engine::new(&corpus, &EngineConfig::default()),
            Err(EngineError::WordLengthMismatch {
                configured: 5,
                corpus: 2
            })
        ));
    }

    #[test]
    fn oversized_chunk_is_configuration_error() {
        let corpus = corpus();
        let config = config().with_max_tensor_cells(10);
        assert!(matches!(
            Engine::new(&corpus, &config),
            Err(EngineError::ChunkTooLarge { .. })
        ));
    }
}
