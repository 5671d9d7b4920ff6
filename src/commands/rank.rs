//! Batch ranking command
//!
//! Scores every guess in parallel, then picks the best and worst.

use crate::solver::{Engine, RunStats, ScoreRun};
use indicatif::{ProgressBar, ProgressStyle};

/// A guess with its score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: String,
    pub score: f64,
}

/// Result of a batch ranking run
#[derive(Debug, Clone)]
pub struct RankReport {
    pub total_guesses: usize,
    pub total_targets: usize,
    pub total_candidates: usize,
    pub best: Vec<RankedGuess>,
    pub worst: Vec<RankedGuess>,
    pub stats: RunStats,
}

fn progress_bar(tasks: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(tasks as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) | {elapsed_precise}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

impl RankReport {
    /// Pick the `top_k` extremes out of a finished scoring run
    #[must_use]
    pub fn from_run(engine: &Engine<'_>, run: &ScoreRun) -> Self {
        let corpus = engine.corpus();
        let ranking = engine.rank(&run.scores);
        let ranked = |indices: &[usize]| -> Vec<RankedGuess> {
            indices
                .iter()
                .map(|&i| RankedGuess {
                    word: corpus.guesses()[i].text().to_string(),
                    score: run.scores[i],
                })
                .collect()
        };

        Self {
            total_guesses: corpus.guesses().len(),
            total_targets: corpus.hypotheticals().len(),
            total_candidates: corpus.candidates().len(),
            best: ranked(&ranking.best),
            worst: ranked(&ranking.worst),
            stats: run.stats,
        }
    }
}

/// Score all guesses and keep the `top_k` extremes
pub fn run_rank(engine: &Engine<'_>, show_progress: bool) -> RankReport {
    let pb = progress_bar(engine.plan().task_count(), show_progress);

    let run = engine.score_all_with(|| pb.inc(1));
    pb.finish_and_clear();

    RankReport::from_run(engine, &run)
}
