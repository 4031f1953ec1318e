//! Suggest command
//!
//! Ranks guesses for a game state given as `guess:pattern` rows.

use crate::core::{Constraint, MAX_CONSTRAINTS};
use crate::solver::{FeedbackCache, Solution, Solver, turns_left_after};
use anyhow::{Context, Result, bail};

/// Parse `guess:pattern` arguments
///
/// # Errors
///
/// Returns an error naming the first row that fails to parse, or when more
/// than six rows are given.
pub fn parse_constraints<S: AsRef<str>>(rows: &[S]) -> Result<Vec<Constraint>> {
    if rows.len() > MAX_CONSTRAINTS {
        bail!(
            "at most {MAX_CONSTRAINTS} constraints are allowed, got {}",
            rows.len()
        );
    }

    rows.iter()
        .map(|row| {
            let row = row.as_ref();
            Constraint::parse(row).with_context(|| format!("invalid constraint '{row}'"))
        })
        .collect()
}

/// Filter and rank for the given rows
///
/// `turns_left` defaults to six minus the number of rows.
///
/// # Errors
///
/// Fails when a row cannot be parsed.
pub fn suggest<S: AsRef<str>>(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    rows: &[S],
    turns_left: Option<u32>,
) -> Result<Solution> {
    let constraints = parse_constraints(rows)?;
    let turns = turns_left.unwrap_or_else(|| turns_left_after(constraints.len()));
    Ok(solver.solve(cache, &constraints, turns))
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

    #[test]
    fn parses_rows() {
        let rows = parse_constraints(&["crane:01200", "slate=00222"]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].to_string(), "slate:00222");
    }

    #[test]
    fn bad_row_names_the_input() {
        let err = parse_constraints(&["crane:01200", "cran:00000"]).unwrap_err();
        assert!(err.to_string().contains("cran:00000"));
    }

    #[test]
    fn too_many_rows_fail() {
        let rows = vec!["crane:00000"; 7];
        assert!(parse_constraints(&rows).is_err());
    }

    #[test]
    fn suggests_for_state() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let heuristic = suggest(&solver, &mut cache, &["irate:02222"], None).unwrap();
        assert_eq!(heuristic.candidate_count, 2);
        assert_eq!(heuristic.solver.mode, SolverMode::Heuristic);

        let exact = suggest(&solver, &mut cache, &["irate:02222"], Some(3)).unwrap();
        assert_eq!(exact.solver.mode, SolverMode::LateExact);
        assert!(exact.solver.recommended.is_some_and(|s| s.safe));
    }

    #[test]
    fn explicit_zero_turns_is_empty() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let solution = suggest::<&str>(&solver, &mut cache, &[], Some(0)).unwrap();
        assert_eq!(solution.candidate_count, 6);
        assert!(solution.solver.suggestions.is_empty());
    }
}
