//! Core domain types for Wordle
//!
//! Pure value types: words, feedback patterns and the constraints they form.
//! Nothing here owns a word list or a cache.

mod constraint;
mod pattern;
mod word;

pub use constraint::{Constraint, ConstraintError, MAX_CONSTRAINTS};
pub use pattern::{LetterState, Pattern, PatternCode, PatternError};
pub use word::{Word, WordError};
