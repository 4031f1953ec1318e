//! Guess evaluation and ranking
//!
//! Each trial guess partitions the candidates by feedback. Two numbers summarize
//! the partition:
//! - expected remaining: Σ count² / |candidates|, the mean size of the bucket the
//!   secret lands in when it is uniform over the candidates
//! - worst bucket: the largest bucket

use super::FeedbackCache;
use super::feedback::bucket_counts;
use crate::core::Word;
use crate::wordlists::Corpus;

/// Partition summary for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Expected number of candidates left after the guess
    pub expected_remaining: f64,
    /// Size of the largest feedback bucket
    pub worst_bucket: u32,
    /// Number of non-empty buckets
    pub buckets: usize,
}

/// Score `guess` against `candidates`
///
/// # Examples
/// ```
/// use wordle_prover::core::Word;
/// use wordle_prover::solver::{FeedbackCache, evaluate_guess};
/// use wordle_prover::wordlists::Corpus;
///
/// let corpus = Corpus::new(&["aaaaa", "bbbbb"], &[] as &[&str]);
/// let mut cache = FeedbackCache::new(&corpus, 16);
/// let guess = Word::new("aaaaa").unwrap();
///
/// let metrics = evaluate_guess(&corpus, &mut cache, corpus.answers(), &guess);
/// assert_eq!(metrics.expected_remaining, 1.0);
/// assert_eq!(metrics.worst_bucket, 1);
/// ```
pub fn evaluate_guess(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    candidates: &[Word],
    guess: &Word,
) -> GuessMetrics {
    let counts = bucket_counts(corpus, cache, candidates, guess);

    let mut sum_squares = 0u64;
    let mut worst_bucket = 0;
    let mut buckets = 0;
    for &count in counts.iter().filter(|&&count| count > 0) {
        sum_squares += u64::from(count) * u64::from(count);
        worst_bucket = worst_bucket.max(count);
        buckets += 1;
    }

    GuessMetrics {
        expected_remaining: sum_squares as f64 / candidates.len().max(1) as f64,
        worst_bucket,
        buckets,
    }
}
