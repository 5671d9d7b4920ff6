//! Chunked evaluation under a memory ceiling
//!
//! The guess axis is cut into blocks of `cn` words and the target axis (in
//! both its hypothetical and candidate roles) into blocks of `cm` words. A
//! task covers one guess block × one hypothetical block and walks the
//! candidate blocks one at a time, so at most one `cn × cm × cm` tensor is
//! alive per worker. Task results merge through [`ScoreAccumulator::merge`].

use super::consistency::ConsistencyTensor;
use super::scorer::{DegeneratePenalty, ScoreAccumulator};
use crate::config::EngineConfig;
use crate::core::{Corpus, FeedbackRule};
use crate::error::{EngineError, Result};
use rayon::prelude::*;
use std::ops::Range;
use tracing::debug;

/// One unit of independent work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkTask {
    pub guesses: Range<usize>,
    pub hypotheticals: Range<usize>,
}

/// Block boundaries for every axis of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    guess_blocks: Vec<Range<usize>>,
    hypothetical_blocks: Vec<Range<usize>>,
    candidate_blocks: Vec<Range<usize>>,
    peak_tensor_cells: usize,
}

/// Split `0..len` into consecutive ranges of at most `size`
fn blocks(len: usize, size: usize) -> Vec<Range<usize>> {
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

impl ChunkPlan {
    /// Plan blocks for `guesses` × `hypotheticals` × `candidates`
    ///
    /// Chunk sizes are clamped to the axis lengths before the tensor ceiling
    /// is checked.
    ///
    /// # Errors
    /// - `InvalidChunkSize` for a zero chunk size
    /// - `ChunkTooLarge` if one block tensor would exceed `max_tensor_cells`
    pub fn new(
        guesses: usize,
        hypotheticals: usize,
        candidates: usize,
        config: &EngineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let cn = guesses.min(config.guess_chunk);
        let cm_h = hypotheticals.min(config.target_chunk);
        let cm_c = candidates.min(config.target_chunk);

        let peak_tensor_cells = cn
            .checked_mul(cm_h)
            .and_then(|cells| cells.checked_mul(cm_c))
            .unwrap_or(usize::MAX);
        if peak_tensor_cells > config.max_tensor_cells {
            return Err(EngineError::ChunkTooLarge {
                guesses: cn,
                targets: cm_h.max(cm_c),
                cells: peak_tensor_cells,
                limit: config.max_tensor_cells,
            });
        }

        let plan = Self {
            guess_blocks: blocks(guesses, config.guess_chunk),
            hypothetical_blocks: blocks(hypotheticals, config.target_chunk),
            candidate_blocks: blocks(candidates, config.target_chunk),
            peak_tensor_cells,
        };

        debug!(
            guess_blocks = plan.guess_blocks.len(),
            hypothetical_blocks = plan.hypothetical_blocks.len(),
            candidate_blocks = plan.candidate_blocks.len(),
            peak_tensor_cells,
            "chunk plan ready"
        );

        Ok(plan)
    }

    /// Plan for the corpus's own word lists
    ///
    /// # Errors
    /// See [`Self::new`].
    pub fn for_corpus(corpus: &Corpus, config: &EngineConfig) -> Result<Self> {
        Self::new(
            corpus.guesses().len(),
            corpus.hypotheticals().len(),
            corpus.candidates().len(),
            config,
        )
    }

    #[must_use]
    pub fn guess_blocks(&self) -> &[Range<usize>] {
        &self.guess_blocks
    }

    /// Largest tensor, in cells, any single block materializes
    #[must_use]
    pub const fn peak_tensor_cells(&self) -> usize {
        self.peak_tensor_cells
    }

    /// Tasks restricted to one guess block
    pub fn tasks_for(&self, guesses: Range<usize>) -> impl Iterator<Item = ChunkTask> + '_ {
        self.hypothetical_blocks
            .iter()
            .map(move |hypotheticals| ChunkTask {
                guesses: guesses.clone(),
                hypotheticals: hypotheticals.clone(),
            })
    }

    /// Every task of the run
    #[must_use]
    pub fn tasks(&self) -> Vec<ChunkTask> {
        self.guess_blocks
            .iter()
            .flat_map(|guesses| self.tasks_for(guesses.clone()))
            .collect()
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.guess_blocks.len() * self.hypothetical_blocks.len()
    }

    /// Number of tensors materialized over the whole run
    #[must_use]
    pub fn tensor_count(&self) -> usize {
        self.task_count() * self.candidate_blocks.len()
    }
}

/// Runs chunk tasks for one corpus
#[derive(Debug, Clone, Copy)]
pub struct ChunkedExecutor<'a> {
    corpus: &'a Corpus,
    rule: FeedbackRule,
    penalty: DegeneratePenalty,
}

impl<'a> ChunkedExecutor<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus, rule: FeedbackRule) -> Self {
        Self {
            corpus,
            rule,
            penalty: DegeneratePenalty::for_guess_count(corpus.guesses().len()),
        }
    }

    #[must_use]
    pub const fn penalty(&self) -> DegeneratePenalty {
        self.penalty
    }

    /// Evaluate one task, folding its complete sat_counts into `accumulator`
    ///
    /// Counts are summed over every candidate block before the penalty is
    /// applied, since a zero in one block says nothing about the others.
    pub fn run_task(
        &self,
        plan: &ChunkPlan,
        task: &ChunkTask,
        accumulator: &mut ScoreAccumulator,
    ) {
        let guesses = &self.corpus.guesses()[task.guesses.clone()];
        let hypotheticals = &self.corpus.hypotheticals()[task.hypotheticals.clone()];
        let candidates = self.corpus.candidates();

        let mut sat_counts = vec![0u64; guesses.len() * hypotheticals.len()];
        for block in &plan.candidate_blocks {
            ConsistencyTensor::evaluate(
                self.rule,
                guesses,
                hypotheticals,
                &candidates[block.clone()],
            )
            .accumulate_sat_counts(&mut sat_counts);
        }

        accumulator.add_block(
            task.guesses.start,
            hypotheticals.len(),
            &sat_counts,
            self.penalty,
        );
    }

    /// Run `tasks` on the rayon pool and merge their results
    ///
    /// `on_task_done` is called once per finished task, from worker threads.
    pub fn run_tasks<F>(
        &self,
        plan: &ChunkPlan,
        tasks: &[ChunkTask],
        on_task_done: F,
    ) -> ScoreAccumulator
    where
        F: Fn(&ChunkTask) + Sync,
    {
        let guesses = self.corpus.guesses().len();
        tasks
            .par_iter()
            .fold(
                || ScoreAccumulator::new(guesses),
                |mut accumulator, task| {
                    self.run_task(plan, task, &mut accumulator);
                    on_task_done(task);
                    accumulator
                },
            )
            .reduce(|| ScoreAccumulator::new(guesses), ScoreAccumulator::merge)
    }

    /// Run tasks one after another on the calling thread
    #[must_use]
    pub fn run_tasks_sequential(&self, plan: &ChunkPlan, tasks: &[ChunkTask]) -> ScoreAccumulator {
        let mut accumulator = ScoreAccumulator::new(self.corpus.guesses().len());
        for task in tasks {
            self.run_task(plan, task, &mut accumulator);
        }
        accumulator
    }
}
