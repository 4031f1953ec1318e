//! Word list loading utilities
//!
//! Raw entries are normalized the same way whether they come from a file or
//! from the embedded constants: trimmed, lowercased, filtered to exactly five
//! ASCII letters, deduplicated keeping first occurrence.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw lines from a word list file
///
/// Blank lines and lines starting with `#` are skipped. No other validation
/// happens here; see [`normalize`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_prover::wordlists::loader::{load_lines, normalize};
///
/// let lines = load_lines("data/answers.txt").unwrap();
/// let words = normalize(&lines);
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Normalize raw entries into a deduplicated word list
///
/// Malformed entries are dropped silently.
///
/// # Examples
/// ```
/// use wordle_prover::wordlists::loader::normalize;
///
/// let words = normalize(&[" Crane", "crane", "toolong", "sl4te", "slate"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    raw.iter()
        .filter_map(|entry| Word::new(entry.as_ref().trim()).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_converts_valid_words() {
        let words = normalize(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn normalize_skips_invalid() {
        let words = normalize(&["crane", "toolong", "abc", "cr4ne", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn normalize_lowercases_and_dedups() {
        let words = normalize(&["CRANE", " crane ", "Slate", "slate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn normalize_empty() {
        let input: &[&str] = &[];
        assert!(normalize(input).is_empty());
    }

    #[test]
    fn load_lines_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!("wordle_prover_loader_{}.txt", std::process::id()));
        fs::write(&path, "# header\ncrane\n\n  slate  \n").unwrap();

        let lines = load_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, ["crane", "slate"]);
    }

    #[test]
    fn load_lines_missing_file_errors() {
        assert!(load_lines("/definitely/not/here.txt").is_err());
    }
}
