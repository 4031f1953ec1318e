//! Immutable word corpus shared by every solver component

use super::{ALLOWED, ANSWERS, loader};
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;

/// The two fixed word sets a game is played over
///
/// `answers` are the possible secrets; `allowed` are the words that may be
/// submitted as guesses. Every answer is also allowed: answers missing from
/// the allowed list are appended at construction.
#[derive(Debug, Clone)]
pub struct Corpus {
    answers: Vec<Word>,
    allowed: Vec<Word>,
    answer_index: FxHashMap<Word, usize>,
    allowed_set: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from raw entries
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::wordlists::Corpus;
    ///
    /// let corpus = Corpus::new(&["crane", "slate"], &["salet", "bad!!"]);
    /// assert_eq!(corpus.answers().len(), 2);
    /// assert_eq!(corpus.allowed().len(), 3); // salet + both answers
    /// ```
    #[must_use]
    pub fn new<A: AsRef<str>, B: AsRef<str>>(answers: &[A], allowed: &[B]) -> Self {
        let answers = loader::normalize(answers);
        let mut allowed = loader::normalize(allowed);
        let mut allowed_set: FxHashSet<Word> = allowed.iter().copied().collect();

        for &answer in &answers {
            if allowed_set.insert(answer) {
                allowed.push(answer);
            }
        }

        let answer_index = answers
            .iter()
            .enumerate()
            .map(|(index, &word)| (word, index))
            .collect();

        Self {
            answers,
            allowed,
            answer_index,
            allowed_set,
        }
    }

    /// Corpus built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ANSWERS, ALLOWED)
    }

    /// Load both lists from files
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be read.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(answers: P, allowed: Q) -> io::Result<Self> {
        let answers = loader::load_lines(answers)?;
        let allowed = loader::load_lines(allowed)?;
        Ok(Self::new(&answers, &allowed))
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    #[inline]
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_index.contains_key(word)
    }

    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_set.contains(word)
    }

    /// Stable position of an answer in [`Corpus::answers`]
    #[inline]
    #[must_use]
    pub fn answer_index(&self, word: &Word) -> Option<usize> {
        self.answer_index.get(word).copied()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn answers_are_unioned_into_allowed() {
        let corpus = Corpus::new(&["crane", "slate"], &["salet", "crane"]);

        let allowed: Vec<&str> = corpus.allowed().iter().map(Word::text).collect();
        assert_eq!(allowed, ["salet", "crane", "slate"]);
        assert!(corpus.answers().iter().all(|w| corpus.is_allowed(w)));
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let corpus = Corpus::new(&["CRANE", "cr4ne", "toolong", " slate "], &["", "abc"]);

        let answers: Vec<&str> = corpus.answers().iter().map(Word::text).collect();
        assert_eq!(answers, ["crane", "slate"]);
        assert_eq!(corpus.allowed().len(), 2);
    }

    #[test]
    fn membership_and_index() {
        let corpus = Corpus::new(&["crane", "slate", "crane"], &["salet"]);

        assert_eq!(corpus.answers().len(), 2);
        assert_eq!(corpus.answer_index(&word("crane")), Some(0));
        assert_eq!(corpus.answer_index(&word("slate")), Some(1));
        assert_eq!(corpus.answer_index(&word("salet")), None);
        assert!(corpus.is_answer(&word("slate")));
        assert!(!corpus.is_answer(&word("salet")));
        assert!(corpus.is_allowed(&word("salet")));
        assert!(!corpus.is_allowed(&word("zzzzz")));
    }

    #[test]
    fn embedded_corpus_is_consistent() {
        let corpus = Corpus::embedded();

        assert!(!corpus.answers().is_empty());
        assert!(corpus.allowed().len() >= corpus.answers().len());
        for (index, answer) in corpus.answers().iter().enumerate() {
            assert_eq!(corpus.answer_index(answer), Some(index));
            assert!(corpus.is_allowed(answer));
        }
    }

    #[test]
    fn from_files_round_trips_through_loader() {
        let dir = std::env::temp_dir();
        let answers = dir.join(format!("wordle_prover_answers_{}.txt", std::process::id()));
        let allowed = dir.join(format!("wordle_prover_allowed_{}.txt", std::process::id()));
        std::fs::write(&answers, "crane\nslate\n").unwrap();
        std::fs::write(&allowed, "salet\n").unwrap();

        let corpus = Corpus::from_files(&answers, &allowed).unwrap();
        std::fs::remove_file(&answers).unwrap();
        std::fs::remove_file(&allowed).unwrap();

        assert_eq!(corpus.answers().len(), 2);
        assert_eq!(corpus.allowed().len(), 3);
    }
}
