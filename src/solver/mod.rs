//! Guess scoring engine
//!
//! Consistency evaluation, score reduction, chunked execution and ranking.

pub mod consistency;
mod engine;
pub mod executor;
mod ranker;
pub mod scorer;

pub use consistency::{Constraint, ConsistencyTensor, is_consistent};
pub use engine::{Engine, GuessProgress, RunStats, ScoreRun};
pub use executor::{ChunkPlan, ChunkTask, ChunkedExecutor};
pub use ranker::{Ranking, largest_k, rank, smallest_k};
pub use scorer::{DegeneratePenalty, ScoreAccumulator, score_tensor};
