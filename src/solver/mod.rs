//! Wordle solving algorithms
//!
//! Filtering, guess evaluation, coverage pools and the forced-win prover, tied
//! together by [`Solver`].

pub mod config;
mod coverage;
mod engine;
mod evaluate;
mod feedback;
mod filter;
pub mod prover;
mod suggestion;
pub mod worker;

pub use config::{ProofConfig, SolverConfig};
pub use coverage::{build_coverage_pool, coverage_score, letter_frequencies};
pub use engine::{Solution, Solver, turns_left_after};
pub use evaluate::{GuessMetrics, evaluate_guess};
pub use feedback::{FeedbackCache, bucket_counts, partition};
pub use filter::filter_answers;
pub use prover::{ProofMemo, ProofReport, can_force_win, is_safe_move};
pub use suggestion::{SolverMode, SolverResult, Suggestion};
pub use worker::{RequestId, SolveResponse, SolverWorker};
