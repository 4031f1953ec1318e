//! JSON contract of the `next` endpoint
//!
//! Transport-free: a raw request body goes in, a typed response or a typed
//! error comes out. Both serialize to the wire shape
//! `{candidateCount, solver, mode: "api"}` or `{error: {code, message}}`.

mod request;

pub use request::{MAX_REQUEST_BODY_BYTES, RequestError, parse_constraints, parse_request};

use crate::solver::{FeedbackCache, Solver, SolverResult, turns_left_after};
use serde::Serialize;

/// Successful endpoint response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextResponse {
    pub candidate_count: usize,
    pub solver: SolverResult,
    pub mode: &'static str,
}

/// Handle one request body
///
/// Invalid constraint rows are dropped rather than rejected; at most six are
/// kept and the turn budget is six minus that count.
///
/// # Errors
///
/// [`RequestError::PayloadTooLarge`] for bodies over 8 KiB,
/// [`RequestError::InvalidJson`] when the body is not JSON.
///
/// # Examples
///
/// ```
/// use wordle_prover::api::handle_next_request;
/// use wordle_prover::solver::{Solver, SolverConfig};
/// use wordle_prover::wordlists::Corpus;
///
/// let corpus = Corpus::new(&["crane", "crate", "grate"], &["salet"]);
/// let solver = Solver::new(&corpus, SolverConfig::default());
/// let mut cache = solver.new_cache();
///
/// let body = br#"{"constraints":[{"guess":"slate","pattern":[0,0,2,2,2]}]}"#;
/// let response = handle_next_request(&solver, &mut cache, body).unwrap();
/// assert_eq!(response.candidate_count, 2);
/// assert_eq!(response.mode, "api");
/// ```
pub fn handle_next_request(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    body: &[u8],
) -> Result<NextResponse, RequestError> {
    let constraints = parse_request(body)?;
    let solution = solver.solve(cache, &constraints, turns_left_after(constraints.len()));

    Ok(NextResponse {
        candidate_count: solution.candidate_count,
        solver: solution.solver,
        mode: "api",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, SolverMode};
    use crate::wordlists::Corpus;

    fn corpus() -> Corpus {
        Corpus::new(
            &["crane", "slate", "irate", "crate", "grate", "trace"],
            &["salet"],
        )
    }

    fn respond(corpus: &Corpus, body: &[u8]) -> Result<NextResponse, RequestError> {
        let solver = Solver::new(corpus, SolverConfig::default());
        let mut cache = solver.new_cache();
        handle_next_request(&solver, &mut cache, body)
    }

    #[test]
    fn empty_constraints_use_whole_corpus() {
        let corpus = corpus();
        let response = respond(&corpus, br#"{"constraints":[]}"#).unwrap();

        assert_eq!(response.candidate_count, 6);
        assert!(response.solver.recommended.is_some());
        assert_eq!(response.solver.mode, SolverMode::Heuristic);
    }

    #[test]
    fn six_constraints_short_circuit() {
        let corpus = corpus();
        let row = r#"{"guess":"salet","pattern":[0,0,0,0,0]}"#;
        let rows = vec![row; 8].join(",");
        let body = format!(r#"{{"constraints":[{rows}]}}"#);

        let response = respond(&corpus, body.as_bytes()).unwrap();
        assert!(response.solver.suggestions.is_empty());
        assert!(response.solver.recommended.is_none());
        assert_eq!(response.solver.mode, SolverMode::Heuristic);
    }

    #[test]
    fn serializes_wire_shape() {
        let corpus = corpus();
        let body = br#"{"constraints":[{"guess":"IRATE","pattern":[0,2,2,2,2]}]}"#;
        let response = respond(&corpus, body).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["candidateCount"], 2);
        assert_eq!(json["mode"], "api");
        assert!(json["solver"]["suggestions"].is_array());
        assert!(json["solver"]["recommended"]["word"].is_string());
    }

    #[test]
    fn oversized_body_is_rejected() {
        let corpus = corpus();
        let body = vec![b' '; MAX_REQUEST_BODY_BYTES + 1];

        let err = respond(&corpus, &body).unwrap_err();
        assert_eq!(err, RequestError::PayloadTooLarge);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let corpus = corpus();
        let err = respond(&corpus, b"{constraints:").unwrap_err();
        assert_eq!(err.code(), "invalid_json");
    }
}
