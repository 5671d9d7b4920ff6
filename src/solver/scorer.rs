//! Reduction of consistency counts to one score per guess
//!
//! `score(g)` is the mean, over hypothetical targets, of how many candidates
//! remain consistent. Lower is better: the guess leaves fewer possibilities
//! on average.

use super::consistency::ConsistencyTensor;

/// Stand-in sat_count for feedback that no candidate satisfies
///
/// A hypothetical target is always consistent with its own feedback, so a
/// zero count only happens when the candidate pool does not contain the
/// hypothetical target. Such a pattern is scored as the total number of
/// guesses so it never looks artificially good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegeneratePenalty(u64);

impl DegeneratePenalty {
    #[must_use]
    pub const fn for_guess_count(guesses: usize) -> Self {
        Self(guesses as u64)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Replace a zero count with the penalty
    #[inline]
    #[must_use]
    pub const fn apply(self, sat_count: u64) -> u64 {
        if sat_count == 0 { self.0 } else { sat_count }
    }
}

/// Per-guess running totals, merged across chunks
///
/// Totals are integers, so merge order never changes the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAccumulator {
    sums: Vec<u64>,
    hypotheticals: Vec<u64>,
}

impl ScoreAccumulator {
    #[must_use]
    pub fn new(guesses: usize) -> Self {
        Self {
            sums: vec![0; guesses],
            hypotheticals: vec![0; guesses],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Fold complete sat_counts of a guess × hypothetical block into the totals
    ///
    /// `sat_counts` is row-major, one row of `hypotheticals` counts per guess,
    /// starting at global guess index `guess_offset`. Each count must already
    /// cover every candidate.
    ///
    /// # Panics
    /// Panics if the block does not fit inside the accumulator
    pub fn add_block(
        &mut self,
        guess_offset: usize,
        hypotheticals: usize,
        sat_counts: &[u64],
        penalty: DegeneratePenalty,
    ) {
        if hypotheticals == 0 {
            return;
        }
        for (row, counts) in sat_counts.chunks_exact(hypotheticals).enumerate() {
            let g = guess_offset + row;
            self.sums[g] += counts.iter().map(|&c| penalty.apply(c)).sum::<u64>();
            self.hypotheticals[g] += hypotheticals as u64;
        }
    }

    /// Combine two partial accumulators over the same guesses
    ///
    /// # Panics
    /// Panics if the accumulators cover different guess counts
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        assert_eq!(self.len(), other.len(), "accumulators cover different guesses");
        for (a, b) in self.sums.iter_mut().zip(other.sums) {
            *a += b;
        }
        for (a, b) in self.hypotheticals.iter_mut().zip(other.hypotheticals) {
            *a += b;
        }
        self
    }

    /// Sum of effective sat_counts recorded for guess `g`
    #[must_use]
    pub fn sum(&self, g: usize) -> u64 {
        self.sums[g]
    }

    /// Number of hypothetical targets recorded for guess `g`
    #[must_use]
    pub fn hypothetical_count(&self, g: usize) -> u64 {
        self.hypotheticals[g]
    }

    /// Mean sat_count of guess `g`, or `None` if nothing was recorded for it
    #[must_use]
    pub fn score(&self, g: usize) -> Option<f64> {
        match self.hypotheticals[g] {
            0 => None,
            count => Some(self.sums[g] as f64 / count as f64),
        }
    }

    /// Scores of every guess; guesses with nothing recorded score `f64::INFINITY`
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        (0..self.len())
            .map(|g| self.score(g).unwrap_or(f64::INFINITY))
            .collect()
    }
}

/// Score every guess of a tensor that spans all hypotheticals and candidates
#[must_use]
pub fn score_tensor(tensor: &ConsistencyTensor, penalty: DegeneratePenalty) -> Vec<f64> {
    let (guesses, hypotheticals, _) = tensor.shape();
    let mut counts = vec![0u64; guesses * hypotheticals];
    tensor.accumulate_sat_counts(&mut counts);

    let mut accumulator = ScoreAccumulator::new(guesses);
    accumulator.add_block(0, hypotheticals, &counts, penalty);
    accumulator.scores()
}
