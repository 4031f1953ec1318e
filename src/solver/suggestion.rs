//! Scored guesses and solver output types

use crate::core::Word;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub word: Word,
    pub expected_remaining: f64,
    pub worst_bucket: u32,
    /// Proven to keep a forced win (only computed in exact mode)
    pub safe: bool,
    pub in_answers: bool,
    pub in_candidates: bool,
}

impl Suggestion {
    /// Ranking order: lower expected remaining, then lower worst bucket, then
    /// candidates first, then answers first, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.expected_remaining
            .total_cmp(&other.expected_remaining)
            .then_with(|| self.worst_bucket.cmp(&other.worst_bucket))
            .then_with(|| other.in_candidates.cmp(&self.in_candidates))
            .then_with(|| other.in_answers.cmp(&self.in_answers))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// How the suggestions were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverMode {
    /// Ranking only
    Heuristic,
    /// Ranking plus forced-win proofs for the top suggestions
    LateExact,
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heuristic => write!(f, "heuristic"),
            Self::LateExact => write!(f, "late-exact"),
        }
    }
}

/// Ranked suggestions and the recommended move
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResult {
    pub suggestions: Vec<Suggestion>,
    pub recommended: Option<Suggestion>,
    pub mode: SolverMode,
}

impl SolverResult {
    /// No suggestions, no recommendation, heuristic mode
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            recommended: None,
            mode: SolverMode::Heuristic,
        }
    }
}

impl Default for SolverResult {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(word: &str, expected: f64, worst: u32, cand: bool, ans: bool) -> Suggestion {
        Suggestion {
            word: Word::new(word).unwrap(),
            expected_remaining: expected,
            worst_bucket: worst,
            safe: false,
            in_answers: ans,
            in_candidates: cand,
        }
    }

    #[test]
    fn rank_uses_all_five_keys_in_order() {
        let mut list = vec![
            suggestion("zesty", 1.0, 1, true, true),
            suggestion("abbey", 1.0, 1, true, true),
            suggestion("salet", 1.0, 1, false, false),
            suggestion("trace", 1.0, 1, false, true),
            suggestion("crane", 1.0, 2, true, true),
            suggestion("irate", 2.0, 1, true, true),
            suggestion("slate", 0.5, 9, false, false),
        ];
        list.sort_by(Suggestion::rank_cmp);

        let order: Vec<&str> = list.iter().map(|s| s.word.text()).collect();
        assert_eq!(
            order,
            ["slate", "abbey", "zesty", "trace", "salet", "crane", "irate"]
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = SolverResult {
            suggestions: vec![suggestion("crane", 1.5, 2, true, true)],
            recommended: None,
            mode: SolverMode::LateExact,
        };
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["mode"], "late-exact");
        assert_eq!(json["recommended"], serde_json::Value::Null);
        assert_eq!(json["suggestions"][0]["word"], "crane");
        assert_eq!(json["suggestions"][0]["expectedRemaining"], 1.5);
        assert_eq!(json["suggestions"][0]["worstBucket"], 2);
        assert_eq!(json["suggestions"][0]["inCandidates"], true);
    }

    #[test]
    fn empty_result_is_heuristic() {
        let result = SolverResult::empty();
        assert!(result.suggestions.is_empty());
        assert!(result.recommended.is_none());
        assert_eq!(result.mode, SolverMode::Heuristic);
        assert_eq!(result.mode.to_string(), "heuristic");
    }
}
