//! Main Wordle solver interface

use super::config::SolverConfig;
use super::coverage::build_coverage_pool;
use super::evaluate::evaluate_guess;
use super::feedback::FeedbackCache;
use super::filter::filter_answers;
use super::prover::{ProofMemo, ProofReport, is_safe_move};
use super::suggestion::{SolverMode, SolverResult, Suggestion};
use crate::core::{Constraint, MAX_CONSTRAINTS, Pattern, PatternCode, Word};
use crate::wordlists::Corpus;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Candidate count and solver output for one game state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub candidate_count: usize,
    pub solver: SolverResult,
}

/// Main Wordle solver
///
/// Borrows an immutable corpus. All mutable state (the feedback cache) is
/// owned by the caller and passed in, so one solver can serve several
/// independent caches.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    corpus: &'a Corpus,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(corpus: &'a Corpus, config: SolverConfig) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A feedback cache sized by this solver's configuration
    #[must_use]
    pub fn new_cache(&self) -> FeedbackCache {
        FeedbackCache::new(self.corpus, self.config.feedback_cache_rows)
    }

    /// Feedback code (0-242) for `guess` against `secret`
    pub fn feedback_code(&self, cache: &mut FeedbackCache, secret: &Word, guess: &Word) -> PatternCode {
        cache.code(self.corpus, secret, guess)
    }

    /// Per-position feedback for `guess` against `secret`
    #[must_use]
    pub fn feedback_pattern(secret: &Word, guess: &Word) -> [u8; 5] {
        Pattern::calculate(secret, guess).digits()
    }

    /// Answers consistent with every constraint
    pub fn filter(&self, cache: &mut FeedbackCache, constraints: &[Constraint]) -> Vec<Word> {
        filter_answers(self.corpus, cache, constraints)
    }

    /// Rank guesses for the candidates and pick a recommendation
    ///
    /// In exact mode (few candidates, few turns) the top suggestions are also
    /// checked by the forced-win prover and marked `safe` where proven.
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::Word;
    /// use wordle_prover::solver::{SolverConfig, SolverMode, Solver};
    /// use wordle_prover::wordlists::Corpus;
    ///
    /// let corpus = Corpus::new(&["crane", "crate", "grate"], &["salet"]);
    /// let solver = Solver::new(&corpus, SolverConfig::default());
    /// let mut cache = solver.new_cache();
    ///
    /// let result = solver.suggest(&mut cache, corpus.answers(), 3);
    /// assert_eq!(result.mode, SolverMode::LateExact);
    /// assert!(result.recommended.unwrap().safe);
    /// ```
    pub fn suggest(&self, cache: &mut FeedbackCache, candidates: &[Word], turns_left: u32) -> SolverResult {
        match candidates {
            [] => return SolverResult::empty(),
            [only] => {
                let decided = Suggestion {
                    word: *only,
                    expected_remaining: 1.0,
                    worst_bucket: 1,
                    safe: true,
                    in_answers: self.corpus.is_answer(only),
                    in_candidates: true,
                };
                return SolverResult {
                    suggestions: vec![decided],
                    recommended: Some(decided),
                    mode: SolverMode::LateExact,
                };
            }
            _ => {}
        }

        let candidate_set: FxHashSet<Word> = candidates.iter().copied().collect();
        let coverage_pool;
        let pool: &[Word] = if candidates.len() <= self.config.full_pool_max_candidates {
            self.corpus.allowed()
        } else {
            coverage_pool =
                build_coverage_pool(self.corpus, candidates, self.config.suggestion_pool_size);
            &coverage_pool
        };

        let mut suggestions: Vec<Suggestion> = pool
            .iter()
            .map(|word| {
                let metrics = evaluate_guess(self.corpus, cache, candidates, word);
                Suggestion {
                    word: *word,
                    expected_remaining: metrics.expected_remaining,
                    worst_bucket: metrics.worst_bucket,
                    safe: false,
                    in_answers: self.corpus.is_answer(word),
                    in_candidates: candidate_set.contains(word),
                }
            })
            .collect();

        suggestions.sort_by(Suggestion::rank_cmp);
        suggestions.truncate(self.config.max_suggestions);

        let exact = self.config.is_exact(candidates.len(), turns_left);
        if exact {
            let mut memo = ProofMemo::new();
            for suggestion in suggestions.iter_mut().take(self.config.proof_checks) {
                suggestion.safe = self
                    .prove(cache, &mut memo, candidates, &suggestion.word, turns_left)
                    .safe;
            }
        }

        let recommended = suggestions
            .iter()
            .find(|s| s.safe && s.in_candidates)
            .or_else(|| suggestions.iter().find(|s| s.safe))
            .or_else(|| suggestions.iter().find(|s| s.in_candidates))
            .or_else(|| suggestions.first())
            .copied();

        SolverResult {
            suggestions,
            recommended,
            mode: if exact {
                SolverMode::LateExact
            } else {
                SolverMode::Heuristic
            },
        }
    }

    /// Safety check for a single guess
    pub fn prove(
        &self,
        cache: &mut FeedbackCache,
        memo: &mut ProofMemo,
        candidates: &[Word],
        guess: &Word,
        turns_left: u32,
    ) -> ProofReport {
        is_safe_move(
            self.corpus,
            cache,
            memo,
            &self.config.proof,
            candidates,
            guess,
            turns_left,
        )
    }

    /// Filter and suggest for a game state
    ///
    /// With no turns left the orchestrator is skipped and the result is empty.
    pub fn solve(&self, cache: &mut FeedbackCache, constraints: &[Constraint], turns_left: u32) -> Solution {
        let candidates = self.filter(cache, constraints);
        let solver = if turns_left > 0 {
            self.suggest(cache, &candidates, turns_left)
        } else {
            SolverResult::empty()
        };

        Solution {
            candidate_count: candidates.len(),
            solver,
        }
    }
}

/// Turns remaining after `played` guesses in a six-turn game
#[must_use]
pub fn turns_left_after(played: usize) -> u32 {
    MAX_CONSTRAINTS.saturating_sub(played) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn small_corpus() -> Corpus {
        Corpus::new(
            &["crane", "slate", "irate", "crate", "grate", "trace", "react", "caret"],
            &["salet", "zzzzz", "abcde"],
        )
    }

    #[test]
    fn zero_candidates_is_empty_heuristic() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, &[], 3);
        assert_eq!(result, SolverResult::empty());
    }

    #[test]
    fn single_candidate_is_decided() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, &[word("grate")], 6);
        assert_eq!(result.mode, SolverMode::LateExact);
        assert_eq!(result.suggestions.len(), 1);

        let recommended = result.recommended.unwrap();
        assert_eq!(recommended.word, word("grate"));
        assert!(recommended.safe);
        assert!(recommended.in_candidates);
    }

    #[test]
    fn suggestions_are_sorted_and_capped() {
        let corpus = small_corpus();
        let config = SolverConfig {
            max_suggestions: 5,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&corpus, config);
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, corpus.answers(), 6);
        assert_eq!(result.suggestions.len(), 5);
        assert_eq!(result.mode, SolverMode::Heuristic);
        assert!(result.suggestions.iter().all(|s| !s.safe));
        for pair in result.suggestions.windows(2) {
            assert_ne!(pair[0].rank_cmp(&pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn heuristic_recommendation_prefers_candidates() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, corpus.answers(), 6);
        let recommended = result.recommended.unwrap();
        assert!(recommended.in_candidates);
        let first_candidate = result.suggestions.iter().find(|s| s.in_candidates).unwrap();
        assert_eq!(recommended.word, first_candidate.word);
    }

    #[test]
    fn exact_mode_marks_proven_moves() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, corpus.answers(), 4);
        assert_eq!(result.mode, SolverMode::LateExact);
        let recommended = result.recommended.unwrap();
        assert!(recommended.safe);
        // Only the top proof_checks suggestions are examined
        assert!(result.suggestions.iter().skip(16).all(|s| !s.safe));
    }

    #[test]
    fn exact_mode_with_no_safe_move_falls_back() {
        // Four letter-disjoint words cannot be separated in two turns
        let corpus = Corpus::new(&["aaaaa", "bbbbb", "ccccc", "ddddd"], &[] as &[&str]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solver.suggest(&mut cache, corpus.answers(), 2);
        assert_eq!(result.mode, SolverMode::LateExact);
        assert!(result.suggestions.iter().all(|s| !s.safe));
        let recommended = result.recommended.unwrap();
        assert!(recommended.in_candidates);
        assert_eq!(recommended.word, word("aaaaa"));
    }

    #[test]
    fn solve_with_no_turns_skips_suggestions() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let solution = solver.solve(&mut cache, &[], 0);
        assert_eq!(solution.candidate_count, corpus.answers().len());
        assert_eq!(solution.solver, SolverResult::empty());
    }

    #[test]
    fn solve_narrows_and_suggests() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();
        let secret = word("caret");

        let constraints = [Constraint::observed(&secret, word("salet"))];
        let solution = solver.solve(&mut cache, &constraints, 5);
        assert!(solution.candidate_count < corpus.answers().len());
        assert!(solution.solver.recommended.is_some());
    }

    #[test]
    fn feedback_entry_points_agree() {
        let corpus = small_corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();
        let (secret, guess) = (word("crane"), word("react"));

        let digits = Solver::feedback_pattern(&secret, &guess);
        let code = solver.feedback_code(&mut cache, &secret, &guess);
        assert_eq!(Pattern::from_digits(&digits).unwrap().code(), code);
    }

    #[test]
    fn turns_left_saturates() {
        assert_eq!(turns_left_after(0), 6);
        assert_eq!(turns_left_after(4), 2);
        assert_eq!(turns_left_after(6), 0);
        assert_eq!(turns_left_after(9), 0);
    }

    #[test]
    fn full_embedded_corpus_opening_terminates() {
        let corpus = Corpus::embedded();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let solution = solver.solve(&mut cache, &[], 6);
        assert_eq!(solution.candidate_count, corpus.answers().len());
        assert_eq!(solution.solver.mode, SolverMode::Heuristic);
        assert!(solution.solver.recommended.is_some());
        assert!(solution.solver.suggestions.len() <= 40);
    }
}
