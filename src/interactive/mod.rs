//! Interactive TUI interface
//!
//! Guesses are typed into a draft row and committed; feedback is entered by
//! cycling tile states. Solves run on a background worker so the board stays
//! responsive.

mod app;
mod rendering;

pub use app::{App, AttemptRow, Focus, Message, MessageStyle, run_tui};
