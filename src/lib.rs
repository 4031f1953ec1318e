//! Wordle Prover
//!
//! A Wordle solver that ranks guesses by expected remaining candidates and,
//! late in the game, proves which guesses still force a win.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_prover::core::{Constraint, Word};
//! use wordle_prover::solver::{Solver, SolverConfig};
//! use wordle_prover::wordlists::Corpus;
//!
//! let corpus = Corpus::new(&["crane", "crate", "grate", "irate"], &["salet"]);
//! let solver = Solver::new(&corpus, SolverConfig::default());
//! let mut cache = solver.new_cache();
//!
//! let secret = Word::new("grate").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let constraints = [Constraint::observed(&secret, guess)];
//!
//! let solution = solver.solve(&mut cache, &constraints, 5);
//! assert!(solution.candidate_count < 4);
//! assert!(solution.solver.recommended.is_some());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Endpoint request/response contract
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
