//! Word analysis command
//!
//! Scores one guess against the candidates left by a game state.

use crate::core::{Constraint, Pattern, Word};
use crate::solver::{
    FeedbackCache, GuessMetrics, ProofMemo, ProofReport, Solver, evaluate_guess, partition,
    turns_left_after,
};
use anyhow::{Context, Result, bail};

/// Buckets listed in the analysis output
const TOP_BUCKETS: usize = 5;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    pub turns_left: u32,
    pub metrics: GuessMetrics,
    pub in_candidates: bool,
    /// Largest feedback buckets, biggest first
    pub largest_buckets: Vec<(Pattern, usize)>,
    /// Present only when the position is small enough for exact mode
    pub proof: Option<ProofReport>,
}

/// Analyze `word` after `constraints`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not an allowed guess
/// - The constraints leave no candidates
pub fn analyze_word(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    word: &str,
    constraints: &[Constraint],
) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    let corpus = solver.corpus();
    if !corpus.is_allowed(&word) {
        bail!("'{word}' is not an allowed guess");
    }

    let candidates = solver.filter(cache, constraints);
    if candidates.is_empty() {
        bail!("no candidates remain; check the feedback patterns");
    }

    let turns_left = turns_left_after(constraints.len());
    let metrics = evaluate_guess(corpus, cache, &candidates, &word);

    let mut largest_buckets: Vec<(Pattern, usize)> = partition(corpus, cache, &candidates, &word)
        .into_iter()
        .map(|(code, bucket)| (code.decode(), bucket.len()))
        .collect();
    largest_buckets.sort_by(|a, b| b.1.cmp(&a.1));
    largest_buckets.truncate(TOP_BUCKETS);

    let proof = solver
        .config()
        .is_exact(candidates.len(), turns_left)
        .then(|| solver.prove(cache, &mut ProofMemo::new(), &candidates, &word, turns_left));

    Ok(AnalysisResult {
        word,
        total_candidates: candidates.len(),
        turns_left,
        metrics,
        in_candidates: candidates.contains(&word),
        largest_buckets,
        proof,
    })
}
