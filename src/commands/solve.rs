//! Word solving command
//!
//! Plays a full game against a known secret, following the recommendation
//! each turn.

use crate::core::{Constraint, MAX_CONSTRAINTS, Pattern, Word};
use crate::solver::{FeedbackCache, Solver, SolverMode, Suggestion, turns_left_after};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    /// Forced opening guess instead of the recommendation
    pub first_guess: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            first_guess: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub success: bool,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub mode: SolverMode,
    /// Solver metrics for the guess, absent for a forced opener
    pub suggestion: Option<Suggestion>,
}

/// Outcome of one game, without per-step detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: Word,
    pub guesses: Vec<Word>,
    pub solved: bool,
}

/// Play until solved, out of turns or out of candidates
///
/// # Errors
///
/// Returns an error if the target is not a valid word or not in the answer
/// list.
pub fn solve_word(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    config: &SolveConfig,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    if !solver.corpus().is_answer(&target) {
        bail!("'{target}' is not in the answer list");
    }

    let mut constraints: Vec<Constraint> = Vec::new();
    let mut steps = Vec::new();
    let mut candidates_before = solver.corpus().answers().len();

    while constraints.len() < MAX_CONSTRAINTS {
        let (guess, suggestion, mode) = match (constraints.is_empty(), config.first_guess) {
            (true, Some(first)) => (first, None, SolverMode::Heuristic),
            _ => {
                let solution =
                    solver.solve(cache, &constraints, turns_left_after(constraints.len()));
                let Some(recommended) = solution.solver.recommended else {
                    break;
                };
                (recommended.word, Some(recommended), solution.solver.mode)
            }
        };

        let constraint = Constraint::observed(&target, guess);
        constraints.push(constraint);
        let candidates_after = solver.filter(cache, &constraints).len();

        steps.push(GuessStep {
            guess,
            pattern: constraint.pattern,
            candidates_before,
            candidates_after,
            mode,
            suggestion,
        });

        if constraint.pattern.is_perfect() {
            return Ok(SolveResult {
                target,
                steps,
                success: true,
            });
        }
        candidates_before = candidates_after;
    }

    Ok(SolveResult {
        target,
        steps,
        success: false,
    })
}

/// Play one game against `target` without recording metrics
///
/// `opening` replaces the first recommendation; benchmarks pass the shared
/// opener so it is computed once.
pub fn play_game(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    target: Word,
    opening: Option<Word>,
) -> GameOutcome {
    let mut constraints: Vec<Constraint> = Vec::new();

    while constraints.len() < MAX_CONSTRAINTS {
        let guess = match (constraints.is_empty(), opening) {
            (true, Some(first)) => first,
            _ => {
                let solution =
                    solver.solve(cache, &constraints, turns_left_after(constraints.len()));
                match solution.solver.recommended {
                    Some(recommended) => recommended.word,
                    None => break,
                }
            }
        };

        let constraint = Constraint::observed(&target, guess);
        constraints.push(constraint);
        if constraint.pattern.is_perfect() {
            break;
        }
    }

    let solved = constraints.last().is_some_and(|c| c.pattern.is_perfect());
    GameOutcome {
        target,
        guesses: constraints.iter().map(|c| c.guess).collect(),
        solved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::Corpus;

    fn corpus() -> Corpus {
        Corpus::new(
            &[
                "crane", "slate", "irate", "crate", "grate", "trace", "react", "caret", "brine",
                "shine", "spine",
            ],
            &["salet", "roate"],
        )
    }

    #[test]
    fn solves_every_answer() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        for target in corpus.answers() {
            let result =
                solve_word(&solver, &mut cache, &SolveConfig::new(target.to_string())).unwrap();
            assert!(result.success, "failed on {target}");
            assert_eq!(result.steps.last().unwrap().guess, *target);
        }
    }

    #[test]
    fn candidates_never_grow() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let result = solve_word(&solver, &mut cache, &SolveConfig::new("spine".into())).unwrap();
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn forced_opener_is_used() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();
        let mut config = SolveConfig::new("brine".into());
        config.first_guess = Some(Word::new("salet").unwrap());

        let result = solve_word(&solver, &mut cache, &config).unwrap();
        assert_eq!(result.steps[0].guess.text(), "salet");
        assert!(result.steps[0].suggestion.is_none());
        assert!(result.success);
    }

    #[test]
    fn rejects_unknown_targets() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        assert!(solve_word(&solver, &mut cache, &SolveConfig::new("zzzzz".into())).is_err());
        assert!(solve_word(&solver, &mut cache, &SolveConfig::new("toolong".into())).is_err());
    }

    #[test]
    fn play_game_matches_solve_word() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();
        let target = Word::new("react").unwrap();

        let outcome = play_game(&solver, &mut cache, target, None);
        let detailed =
            solve_word(&solver, &mut cache, &SolveConfig::new("react".into())).unwrap();

        assert!(outcome.solved);
        let guesses: Vec<Word> = detailed.steps.iter().map(|s| s.guess).collect();
        assert_eq!(outcome.guesses, guesses);
    }
}
