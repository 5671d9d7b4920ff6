//! Command implementations

pub mod analyze;
pub mod progress;
pub mod rank;

pub use analyze::{GuessAnalysis, TargetOutcome, analyze_guess};
pub use progress::run_progress;
pub use rank::{RankReport, RankedGuess, run_rank};
