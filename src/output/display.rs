//! Display functions for command results

use super::formatters::{format_cells, score_bar};
use crate::commands::{GuessAnalysis, RankReport, RankedGuess};
use crate::solver::RunStats;
use colored::Colorize;

const BAR_WIDTH: usize = 30;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_ranked(guesses: &[RankedGuess], worst: f64, good: bool) {
    for (i, guess) in guesses.iter().enumerate() {
        let bar = score_bar(guess.score, worst, BAR_WIDTH);
        let bar = if good { bar.green() } else { bar.red() };
        println!(
            "   {:3}. {} [{}] {}",
            i + 1,
            guess.word.to_uppercase().bold(),
            bar,
            format!("{:.4}", guess.score).bright_yellow()
        );
    }
}

/// Print the best and worst guesses of a ranking run
pub fn print_rank_report(report: &RankReport) {
    print_header("GUESS RANKING");

    println!(
        "\n📊 {} guesses against {} targets ({} candidates)",
        report.total_guesses, report.total_targets, report.total_candidates
    );

    let worst = report
        .worst
        .first()
        .map_or(0.0, |g| g.score)
        .max(report.best.last().map_or(0.0, |g| g.score));

    println!(
        "\n🏆 {}",
        format!("Best {} guesses (lowest expected remaining):", report.best.len())
            .bright_cyan()
            .bold()
    );
    print_ranked(&report.best, worst, true);

    println!(
        "\n💀 {}",
        format!("Worst {} guesses:", report.worst.len())
            .bright_cyan()
            .bold()
    );
    print_ranked(&report.worst, worst, false);
}

/// Print how a guess splits the targets
pub fn print_analysis_result(result: &GuessAnalysis, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} targets ({} candidates):",
        result.total_targets, result.total_candidates
    );
    println!(
        "   Score:       {}",
        format!("{:.4} expected candidates", result.score).bright_yellow()
    );
    println!("   Solved:      {} targets identified outright", result.solved_outright());
    if result.penalized() > 0 {
        println!(
            "   Penalized:   {}",
            format!("{} targets with no consistent candidate", result.penalized()).red()
        );
    }

    let worst = result.outcomes.first().map_or(0.0, |o| o.sat_count as f64);
    println!("\n🔍 {}", "Largest remaining sets:".bright_cyan().bold());
    for outcome in result.outcomes.iter().take(limit) {
        let bar = score_bar(outcome.sat_count as f64, worst, BAR_WIDTH);
        println!(
            "   {} {} [{}] {:5}",
            outcome.target.to_uppercase(),
            outcome.pattern.to_emoji(),
            bar.green(),
            outcome.sat_count
        );
    }
}

/// Print execution figures of a scoring run
pub fn print_run_stats(stats: &RunStats) {
    println!("\n⚙️  {}", "Execution:".bright_cyan().bold());
    println!("   Chunk tasks:  {}", stats.tasks);
    println!("   Tensors:      {}", stats.tensors);
    println!("   Peak tensor:  {} cells", format_cells(stats.peak_tensor_cells));
    println!("   Time taken:   {:.2}s", stats.elapsed.as_secs_f64());
}
