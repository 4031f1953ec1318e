//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar that fills as the expected remaining count drops
#[must_use]
pub fn reduction_bar(expected_remaining: f64, candidates: usize, width: usize) -> String {
    let total = candidates as f64;
    create_progress_bar(total - expected_remaining, total, width)
}

/// `1 guess` / `3 guesses`
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
