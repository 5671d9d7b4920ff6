//! Wordle Guess Ranker
//!
//! Ranks every allowed guess by how many candidate targets would remain
//! consistent with its feedback, averaged over every hypothetical target.
//! Lower scores split the target pool better.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::config::EngineConfig;
//! use wordle_ranker::core::Corpus;
//! use wordle_ranker::solver::Engine;
//!
//! let corpus = Corpus::builder(5)
//!     .guesses(["crane", "slate", "aaaaa"])
//!     .targets(["crane", "slate"])
//!     .build()
//!     .unwrap();
//! let config = EngineConfig::default().with_top_k(1);
//! let engine = Engine::new(&corpus, &config).unwrap();
//!
//! let run = engine.score_all();
//! let ranking = engine.rank(&run.scores);
//! assert_eq!(corpus.guesses()[ranking.worst[0]].text(), "aaaaa");
//! ```

// Run parameters
pub mod config;

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Scoring engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
