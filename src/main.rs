//! Wordle Guess Ranker - CLI
//!
//! Scores every allowed guess against a target list and reports the best and
//! worst openers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_ranker::{
    commands::{RankReport, analyze_guess, run_progress, run_rank},
    config::{DEFAULT_MAX_TENSOR_CELLS, EngineConfig},
    core::FeedbackRule,
    output::{print_analysis_result, print_rank_report, print_run_stats},
    solver::Engine,
    wordlists::{WordListPaths, prepare_corpus},
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Rank Wordle guesses by expected remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allowed guesses, one word per line
    #[arg(long, global = true, default_value = "allowed_words.txt")]
    guesses: PathBuf,

    /// Possible targets, one word per line
    #[arg(long, global = true, default_value = "possible_words.txt")]
    targets: PathBuf,

    /// Separate pool of candidate targets (defaults to the targets)
    #[arg(long, global = true)]
    candidates: Option<PathBuf>,

    /// Letters per word
    #[arg(short = 'z', long, global = true, default_value = "5")]
    word_length: usize,

    /// Guesses per chunk
    #[arg(long, global = true, default_value = "256")]
    guess_chunk: usize,

    /// Targets per chunk
    #[arg(long, global = true, default_value = "256")]
    target_chunk: usize,

    /// Number of best and worst guesses to report
    #[arg(short = 'k', long = "top", global = true, default_value = "10")]
    top_k: usize,

    /// Count repeated letters the way the game does
    #[arg(long, global = true)]
    exact_duplicates: bool,

    /// Add the targets to the guess list
    #[arg(long, global = true)]
    union_targets: bool,

    /// Ceiling on cells of one consistency tensor
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TENSOR_CELLS)]
    max_tensor_cells: usize,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score all guesses in parallel and print the best and worst (default)
    Rank,

    /// Score guesses in order, printing a step line for each
    Progress,

    /// Break down the score of one guess
    Analyze {
        /// Guess to analyze
        word: String,

        /// Number of targets to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let rule = if self.exact_duplicates {
            FeedbackRule::Exact
        } else {
            FeedbackRule::Loose
        };
        EngineConfig::default()
            .with_word_length(self.word_length)
            .with_chunks(self.guess_chunk, self.target_chunk)
            .with_top_k(self.top_k)
            .with_feedback_rule(rule)
            .with_max_tensor_cells(self.max_tensor_cells)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.engine_config();
    config.validate().context("invalid configuration")?;

    let corpus = prepare_corpus(
        WordListPaths {
            guesses: &cli.guesses,
            targets: &cli.targets,
            candidates: cli.candidates.as_deref(),
        },
        &config,
        cli.union_targets,
    )
    .context("failed to prepare word lists")?;

    let engine = Engine::new(&corpus, &config).context("failed to plan chunked evaluation")?;

    // Default to batch ranking if no command given
    match cli.command.unwrap_or(Commands::Rank) {
        Commands::Rank => {
            let report = run_rank(&engine, true);
            print_rank_report(&report);
            print_run_stats(&report.stats);
        }
        Commands::Progress => {
            let run = run_progress(&engine, |line| println!("{line}"));
            let report = RankReport::from_run(&engine, &run);
            print_rank_report(&report);
            print_run_stats(&report.stats);
        }
        Commands::Analyze { word, limit } => {
            let analysis = analyze_guess(&engine, &word)
                .with_context(|| format!("cannot analyze '{word}'"))?;
            print_analysis_result(&analysis, limit);
        }
    }

    Ok(())
}
