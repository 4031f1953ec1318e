//! Letter-coverage guess pools
//!
//! Scoring every allowed word against a large candidate set is too slow to do
//! on every change, so evaluation runs over a reduced pool: the allowed words
//! whose distinct letters cover the most candidates, plus the candidates
//! themselves.

use crate::core::Word;
use crate::wordlists::Corpus;
use rustc_hash::FxHashSet;

/// How many candidates contain each letter, counting a letter once per word
#[must_use]
pub fn letter_frequencies(candidates: &[Word]) -> [u32; 26] {
    let mut scores = [0u32; 26];
    for candidate in candidates {
        let mask = candidate.letter_mask();
        for (letter, score) in scores.iter_mut().enumerate() {
            if mask & (1 << letter) != 0 {
                *score += 1;
            }
        }
    }
    scores
}

/// Sum of the scores of a word's distinct letters
#[must_use]
pub fn coverage_score(word: &Word, letter_scores: &[u32; 26]) -> u32 {
    let mask = word.letter_mask();
    letter_scores
        .iter()
        .enumerate()
        .filter(|&(letter, _)| mask & (1 << letter) != 0)
        .map(|(_, &score)| score)
        .sum()
}

/// Candidates followed by the `pool_size` best-covering allowed words
///
/// Candidates are always included even when they score poorly. Ties keep
/// allowed-list order; duplicates are dropped.
///
/// # Examples
/// ```
/// use wordle_prover::core::Word;
/// use wordle_prover::solver::build_coverage_pool;
/// use wordle_prover::wordlists::Corpus;
///
/// let corpus = Corpus::new(&["crane", "crate"], &["zzzzz", "trace"]);
/// let pool = build_coverage_pool(&corpus, corpus.answers(), 1);
///
/// let texts: Vec<&str> = pool.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "crate", "trace"]);
/// ```
#[must_use]
pub fn build_coverage_pool(corpus: &Corpus, candidates: &[Word], pool_size: usize) -> Vec<Word> {
    let letter_scores = letter_frequencies(candidates);

    let mut ranked: Vec<(u32, Word)> = corpus
        .allowed()
        .iter()
        .map(|word| (coverage_score(word, &letter_scores), *word))
        .collect();
    // Stable: equal scores keep allowed-list order
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let mut seen = FxHashSet::default();
    candidates
        .iter()
        .copied()
        .chain(ranked.into_iter().take(pool_size).map(|(_, word)| word))
        .filter(|word| seen.insert(*word))
        .collect()
}
