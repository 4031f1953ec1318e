//! Cached feedback codes and candidate partitioning
//!
//! Feedback is a pure function of (secret, guess), so cached codes never go
//! stale. The cache keeps one dense row per guess, indexed by answer position,
//! and evicts the oldest row once it holds `row_limit` rows.

use crate::core::{Pattern, PatternCode, Word};
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Marks a slot whose code has not been computed yet
const UNKNOWN: u8 = u8::MAX;

/// Per-guess rows of feedback codes against every answer
///
/// Owned by the caller and passed by `&mut` into the search functions. A
/// cache is tied to the corpus it was built for.
#[derive(Debug, Clone)]
pub struct FeedbackCache {
    rows: FxHashMap<Word, Box<[u8]>>,
    order: VecDeque<Word>,
    row_len: usize,
    row_limit: usize,
}

impl FeedbackCache {
    /// Create an empty cache for `corpus` holding at most `row_limit` guess rows
    #[must_use]
    pub fn new(corpus: &Corpus, row_limit: usize) -> Self {
        Self {
            rows: FxHashMap::default(),
            order: VecDeque::new(),
            row_len: corpus.answers().len(),
            row_limit,
        }
    }

    /// Number of guess rows currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains_row(&self, guess: &Word) -> bool {
        self.rows.contains_key(guess)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.order.clear();
    }

    /// Feedback code for `guess` played against `secret`
    ///
    /// Secrets outside the answer list are computed directly and never stored.
    pub fn code(&mut self, corpus: &Corpus, secret: &Word, guess: &Word) -> PatternCode {
        let Some(index) = corpus.answer_index(secret) else {
            return Pattern::calculate(secret, guess).code();
        };
        if self.row_limit == 0 {
            return Pattern::calculate(secret, guess).code();
        }

        let row = self.row_mut(*guess);
        match row.get_mut(index) {
            Some(slot) if *slot != UNKNOWN => PatternCode::new(*slot),
            Some(slot) => {
                let code = Pattern::calculate(secret, guess).code();
                *slot = code.value();
                code
            }
            None => Pattern::calculate(secret, guess).code(),
        }
    }

    fn row_mut(&mut self, guess: Word) -> &mut [u8] {
        if !self.rows.contains_key(&guess) {
            if self.order.len() >= self.row_limit
                && let Some(oldest) = self.order.pop_front()
            {
                self.rows.remove(&oldest);
            }
            self.order.push_back(guess);
        }

        let row_len = self.row_len;
        self.rows
            .entry(guess)
            .or_insert_with(|| vec![UNKNOWN; row_len].into_boxed_slice())
    }
}

/// Group candidates by the feedback they give to `guess`
///
/// Buckets appear in order of first occurrence, and each bucket keeps the
/// candidates' input order.
pub fn partition(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    candidates: &[Word],
    guess: &Word,
) -> Vec<(PatternCode, Vec<Word>)> {
    let mut slots = [usize::MAX; PatternCode::COUNT];
    let mut buckets: Vec<(PatternCode, Vec<Word>)> = Vec::new();

    for candidate in candidates {
        let code = cache.code(corpus, candidate, guess);
        let slot = &mut slots[code.index()];
        if *slot == usize::MAX {
            *slot = buckets.len();
            buckets.push((code, Vec::new()));
        }
        buckets[*slot].1.push(*candidate);
    }

    buckets
}

/// Bucket sizes per feedback code, indexed by code value
pub fn bucket_counts(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    candidates: &[Word],
    guess: &Word,
) -> [u32; PatternCode::COUNT] {
    let mut counts = [0u32; PatternCode::COUNT];
    for candidate in candidates {
        counts[cache.code(corpus, candidate, guess).index()] += 1;
    }
    counts
}
