//! Incremental scoring command
//!
//! Emits one `Step` line per guess, in input order, as guess blocks finish.

use crate::output::formatters::format_step_line;
use crate::solver::{Engine, ScoreRun};

/// Score guesses in order, handing each formatted step line to `emit`
pub fn run_progress<F>(engine: &Engine<'_>, mut emit: F) -> ScoreRun
where
    F: FnMut(String),
{
    let guesses = engine.corpus().guesses();
    engine.score_incremental(|progress| {
        emit(format_step_line(
            progress,
            guesses[progress.index].text(),
            guesses[progress.best_index].text(),
        ));
    })
}
