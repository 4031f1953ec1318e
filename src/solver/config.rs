//! Tunable solver constants
//!
//! The defaults were chosen empirically; none of them has a derivation. They
//! are exposed so callers can trade precision for speed.

/// Thresholds and budgets for the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of guess rows kept by a [`FeedbackCache`](super::FeedbackCache)
    pub feedback_cache_rows: usize,
    /// Evaluate every allowed word when candidates are at most this many
    pub full_pool_max_candidates: usize,
    /// Coverage pool size used for ranking suggestions above that threshold
    pub suggestion_pool_size: usize,
    /// Number of ranked suggestions returned
    pub max_suggestions: usize,
    /// Exact mode requires at most this many candidates...
    pub exact_max_candidates: usize,
    /// ...and at most this many turns left
    pub exact_max_turns: u32,
    /// How many top suggestions the prover checks in exact mode
    pub proof_checks: usize,
    /// Prover settings
    pub proof: ProofConfig,
}

/// Forced-win prover settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofConfig {
    /// Recursive calls allowed per safety check before giving up
    pub node_budget: usize,
    /// Use only the candidates as trial guesses at or below this many turns
    pub candidates_only_turns: u32,
    /// Candidate count at or below which the larger pool is used
    pub small_set_threshold: usize,
    /// Coverage pool size for small candidate sets
    pub small_set_pool_size: usize,
    /// Coverage pool size otherwise
    pub pool_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            feedback_cache_rows: 1200,
            full_pool_max_candidates: 30,
            suggestion_pool_size: 380,
            max_suggestions: 40,
            exact_max_candidates: 60,
            exact_max_turns: 4,
            proof_checks: 16,
            proof: ProofConfig::default(),
        }
    }
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            node_budget: 25_000,
            candidates_only_turns: 2,
            small_set_threshold: 12,
            small_set_pool_size: 400,
            pool_size: 180,
        }
    }
}

impl SolverConfig {
    /// Whether a position qualifies for exact (proof-backed) mode
    #[must_use]
    pub const fn is_exact(&self, candidates: usize, turns_left: u32) -> bool {
        candidates <= self.exact_max_candidates && turns_left <= self.exact_max_turns
    }
}
