//! Forced-win prover
//!
//! Decides whether some sequence of guesses identifies the secret within
//! `turns_left` turns for every candidate, against worst-case feedback. The
//! search is memoized on (turns left, sorted candidates) and bounded by a node
//! budget per safety check: running out of budget answers "not proven", never
//! "proven". A `false` therefore means "not proven safe", not "unsafe".

use super::FeedbackCache;
use super::config::ProofConfig;
use super::coverage::build_coverage_pool;
use super::feedback::partition;
use crate::core::Word;
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;

/// Memo of proven (and budget-independent disproven) positions
///
/// Only results reached without exhausting the budget are stored, so an entry
/// is valid for any later search over the same corpus.
#[derive(Debug, Default, Clone)]
pub struct ProofMemo {
    entries: FxHashMap<(u32, Vec<Word>), bool>,
}

impl ProofMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(candidates: &[Word], turns_left: u32) -> (u32, Vec<Word>) {
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();
        (turns_left, sorted)
    }
}

/// Node accounting for one safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofBudget {
    pub nodes: usize,
    pub max_nodes: usize,
}

impl ProofBudget {
    #[must_use]
    pub const fn new(max_nodes: usize) -> Self {
        Self {
            nodes: 0,
            max_nodes,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.nodes > self.max_nodes
    }

    /// Count one node; `false` once the budget is exceeded
    fn visit(&mut self) -> bool {
        self.nodes += 1;
        !self.is_exhausted()
    }
}

/// Outcome of a safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofReport {
    /// A forced win was found
    pub safe: bool,
    /// Nodes visited
    pub nodes: usize,
    /// The search gave up because the budget ran out
    pub exhausted: bool,
}

/// Search state threaded through the recursion
struct Prover<'a> {
    corpus: &'a Corpus,
    cache: &'a mut FeedbackCache,
    memo: &'a mut ProofMemo,
    config: &'a ProofConfig,
    budget: ProofBudget,
}

impl Prover<'_> {
    fn can_force_win(&mut self, candidates: &[Word], turns_left: u32) -> bool {
        if !self.budget.visit() {
            return false;
        }
        if candidates.len() <= 1 {
            return true;
        }
        // One turn cannot separate two or more candidates
        if turns_left <= 1 {
            return false;
        }

        let key = ProofMemo::key(candidates, turns_left);
        if let Some(&known) = self.memo.entries.get(&key) {
            return known;
        }

        let options = proof_options(self.corpus, candidates, turns_left, self.config);
        for guess in &options {
            if self.budget.is_exhausted() {
                return false;
            }

            let buckets = partition(self.corpus, self.cache, candidates, guess);
            // A guess that separates nothing cannot help
            if buckets.len() == 1 && !buckets[0].0.is_perfect() {
                continue;
            }

            if buckets
                .iter()
                .all(|(_, bucket)| self.can_force_win(bucket, turns_left - 1))
            {
                self.memo.entries.insert(key, true);
                return true;
            }
        }

        if !self.budget.is_exhausted() {
            self.memo.entries.insert(key, false);
        }
        false
    }
}

/// Trial guesses considered at one node of the search
///
/// Near the end only candidates are worth guessing; otherwise a coverage pool,
/// larger when few candidates remain.
#[must_use]
pub fn proof_options(
    corpus: &Corpus,
    candidates: &[Word],
    turns_left: u32,
    config: &ProofConfig,
) -> Vec<Word> {
    if turns_left <= config.candidates_only_turns {
        return candidates.to_vec();
    }

    let pool_size = if candidates.len() <= config.small_set_threshold {
        config.small_set_pool_size
    } else {
        config.pool_size
    };
    build_coverage_pool(corpus, candidates, pool_size)
}

/// Whether the candidates can be forced to a win within `turns_left` turns
///
/// Runs with a fresh budget of `config.node_budget` nodes.
pub fn can_force_win(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    memo: &mut ProofMemo,
    config: &ProofConfig,
    candidates: &[Word],
    turns_left: u32,
) -> ProofReport {
    let mut prover = Prover {
        corpus,
        cache,
        memo,
        config,
        budget: ProofBudget::new(config.node_budget),
    };
    let safe = prover.can_force_win(candidates, turns_left);

    ProofReport {
        safe,
        nodes: prover.budget.nodes,
        exhausted: prover.budget.is_exhausted(),
    }
}

/// Whether playing `guess` now still guarantees a win within `turns_left` turns
///
/// With one turn left only guessing the sole candidate is safe. Otherwise
/// every feedback bucket of `guess` must be a forced win with one turn fewer.
///
/// # Examples
/// ```
/// use wordle_prover::core::Word;
/// use wordle_prover::solver::{FeedbackCache, ProofMemo, is_safe_move};
/// use wordle_prover::solver::config::ProofConfig;
/// use wordle_prover::wordlists::Corpus;
///
/// let corpus = Corpus::new(&["aaaaa", "bbbbb", "ccccc"], &[] as &[&str]);
/// let mut cache = FeedbackCache::new(&corpus, 64);
/// let mut memo = ProofMemo::new();
/// let config = ProofConfig::default();
/// let guess = Word::new("aaaaa").unwrap();
///
/// let two = is_safe_move(&corpus, &mut cache, &mut memo, &config, corpus.answers(), &guess, 2);
/// let three = is_safe_move(&corpus, &mut cache, &mut memo, &config, corpus.answers(), &guess, 3);
/// assert!(!two.safe);
/// assert!(three.safe);
/// ```
pub fn is_safe_move(
    corpus: &Corpus,
    cache: &mut FeedbackCache,
    memo: &mut ProofMemo,
    config: &ProofConfig,
    candidates: &[Word],
    guess: &Word,
    turns_left: u32,
) -> ProofReport {
    let unproven = ProofReport {
        safe: false,
        nodes: 0,
        exhausted: false,
    };

    match turns_left {
        0 => unproven,
        1 => ProofReport {
            safe: candidates == [*guess],
            ..unproven
        },
        _ => {
            let mut prover = Prover {
                corpus,
                cache,
                memo,
                config,
                budget: ProofBudget::new(config.node_budget),
            };
            let buckets = partition(corpus, prover.cache, candidates, guess);
            let safe = buckets
                .iter()
                .all(|(_, bucket)| prover.can_force_win(bucket, turns_left - 1));

            ProofReport {
                safe,
                nodes: prover.budget.nodes,
                exhausted: prover.budget.is_exhausted(),
            }
        }
    }
}
