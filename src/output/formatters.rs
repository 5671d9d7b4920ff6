//! Formatting utilities for terminal output

use crate::solver::GuessProgress;

/// One line of incremental progress
///
/// `Step {i}/{n} ({pct}%): '{guess}'={score}, best: '{best}'={best_score}`
#[must_use]
pub fn format_step_line(progress: &GuessProgress, guess: &str, best: &str) -> String {
    format!(
        "Step {}/{} ({:.4}%): '{guess}'={:.4}, best: '{best}'={:.4}",
        progress.index + 1,
        progress.total,
        progress.percent(),
        progress.score,
        progress.best_score,
    )
}

/// Bar for a score, relative to the worst score shown alongside it
///
/// Scores outside `0..=worst` are clamped. A non-positive or NaN `worst`,
/// or a non-finite score, gives an empty bar.
#[must_use]
pub fn score_bar(score: f64, worst: f64, width: usize) -> String {
    if worst.is_nan() || worst <= 0.0 || !score.is_finite() {
        return "░".repeat(width);
    }
    let filled = (((score / worst).clamp(0.0, 1.0) * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-readable tensor cell count
#[must_use]
pub fn format_cells(cells: usize) -> String {
    const UNITS: [(usize, &str); 3] = [(1 << 30, "Gi"), (1 << 20, "Mi"), (1 << 10, "Ki")];
    for (size, suffix) in UNITS {
        if cells >= size {
            return format!("{:.1}{suffix}", cells as f64 / size as f64);
        }
    }
    cells.to_string()
}
