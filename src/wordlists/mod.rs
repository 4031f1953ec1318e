//! Word lists for Wordle solving
//!
//! Embedded lists compiled into the binary, a file loader, and the immutable
//! [`Corpus`] built from them.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
