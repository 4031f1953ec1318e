//! Diagnostics on stderr
//!
//! Stdout carries command output; status lines go here so they never mix
//! with JSON or tables. The level is process-wide and set once from the
//! command line.

use colored::Colorize;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Verbosity {
    /// Warnings only
    Quiet = 0,
    /// Warnings and info
    Normal = 1,
    /// Everything, including debug
    Verbose = 2,
}

impl Verbosity {
    /// Resolve the `--quiet` / `--verbose` pair; quiet wins
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            2 => Self::Verbose,
            _ => Self::Normal,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

pub fn set_verbosity(level: Verbosity) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

#[must_use]
pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(LEVEL.load(Ordering::Relaxed))
}

#[must_use]
pub fn enabled(level: Verbosity) -> bool {
    verbosity() >= level
}

pub fn info(message: impl Display) {
    if enabled(Verbosity::Normal) {
        eprintln!("{} {message}", "info:".cyan().bold());
    }
}

pub fn warn(message: impl Display) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

pub fn debug(message: impl Display) {
    if enabled(Verbosity::Verbose) {
        eprintln!("{} {}", "debug:".bright_black(), message.to_string().bright_black());
    }
}
