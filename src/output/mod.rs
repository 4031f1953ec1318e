//! Terminal output formatting
//!
//! Display utilities for CLI results and stderr diagnostics.

pub mod display;
pub mod formatters;
pub mod log;

pub use display::{
    print_analysis_result, print_benchmark_result, print_solution, print_solve_result,
};
