//! Candidate filtering
//!
//! Narrows the answer list to the words consistent with every observed constraint.

use super::FeedbackCache;
use crate::core::{Constraint, Word};
use crate::wordlists::Corpus;

/// Answers that would have produced every observed pattern
///
/// Recomputed from the full answer list on each call. An empty result means
/// the constraints contradict each other, which is a valid state.
pub fn filter_answers(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    constraints: &[Constraint],
) -> Vec<Word> {
    let expected: Vec<_> = constraints
        .iter()
        .map(|constraint| (constraint.guess, constraint.pattern.code()))
        .collect();

    corpus
        .answers()
        .iter()
        .filter(|&candidate| {
            expected
                .iter()
                .all(|(guess, code)| cache.code(corpus, candidate, guess) == *code)
        })
        .copied()
        .collect()
}
