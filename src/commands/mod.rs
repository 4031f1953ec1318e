//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod next;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_targets};
pub use next::{read_body, respond};
pub use simple::{SessionSummary, run_simple};
pub use solve::{GameOutcome, GuessStep, SolveConfig, SolveResult, play_game, solve_word};
pub use suggest::{parse_constraints, suggest};
