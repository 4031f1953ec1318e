//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::{Constraint, MAX_CONSTRAINTS, Pattern};
use crate::output::display::print_solution;
use crate::output::formatters::{pattern_to_emoji, plural};
use crate::solver::{FeedbackCache, Solver, turns_left_after};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Suggestions shown per turn
const SHOWN_SUGGESTIONS: usize = 5;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Quit,
    New,
    Undo,
    /// Shortcut for an all-green pattern on the recommended guess
    Win,
    /// Feedback for the recommended guess
    Feedback(Pattern),
    /// A different guess was played
    Row(Constraint),
}

impl SimpleInput {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "win" | "correct" | "solved" => Some(Self::Win),
            _ => Pattern::parse(&line)
                .map(Self::Feedback)
                .or_else(|_| Constraint::parse(&line).map(Self::Row))
                .ok(),
        }
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_won: usize,
    pub games_lost: usize,
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(solver: &Solver<'_>) -> Result<SessionSummary> {
    print_banner();
    let mut cache = solver.new_cache();
    let stdin = io::stdin();
    run_session(solver, &mut cache, stdin.lock())
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Prover - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Digits: 0 gray, 1 yellow, 2 green (e.g. 01200)");
    println!("  - Or G/Y/- letters, or 🟩🟨⬜");
    println!("  - Played something else? Enter guess:pattern (e.g. slate:00222)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");
}

/// Drive a session from any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead>(
    solver: &Solver<'_>,
    cache: &mut FeedbackCache,
    mut input: R,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut constraints: Vec<Constraint> = Vec::new();

    loop {
        let turns_left = turns_left_after(constraints.len());
        let solution = solver.solve(cache, &constraints, turns_left);

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} remaining",
            constraints.len() + 1,
            plural(solution.candidate_count, "candidate", "candidates")
        );
        println!("────────────────────────────────────────────────────────────");

        if solution.candidate_count == 0 {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            print_solution(&solution, SHOWN_SUGGESTIONS);
        }
        let recommended = solution.solver.recommended.map(|s| s.word);

        let Some(line) = prompt(&mut input, "Feedback")? else {
            return Ok(summary);
        };
        let Some(command) = SimpleInput::parse(&line) else {
            println!("❌ Invalid input! Use 01200, G/Y/-, guess:pattern or 'win'\n");
            continue;
        };

        let constraint = match command {
            SimpleInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(summary);
            }
            SimpleInput::New => {
                constraints.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            SimpleInput::Undo => {
                if constraints.pop().is_some() {
                    println!("✓ Undone! Back to turn {}\n", constraints.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            SimpleInput::Row(row) => row,
            SimpleInput::Win | SimpleInput::Feedback(_) => {
                let Some(guess) = recommended else {
                    println!("No recommendation to apply; enter guess:pattern instead\n");
                    continue;
                };
                let pattern = match command {
                    SimpleInput::Feedback(pattern) => pattern,
                    _ => Pattern::PERFECT,
                };
                Constraint::new(guess, pattern)
            }
        };

        constraints.push(constraint);

        let finished = if constraint.pattern.is_perfect() {
            summary.games_won += 1;
            print_victory(&constraints);
            true
        } else if constraints.len() >= MAX_CONSTRAINTS {
            summary.games_lost += 1;
            println!("\n{}\n", "Out of turns.".red().bold());
            true
        } else {
            false
        };

        if finished {
            let again = prompt(&mut input, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(summary);
            }
            constraints.clear();
            println!("\n🔄 New game started!\n");
        }
    }
}

fn print_victory(history: &[Constraint]) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {}",
        plural(history.len(), "guess", "guesses").bright_cyan().bold()
    );
    println!("\n  Guess history:");
    for (i, row) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.guess.text().to_uppercase().bright_white().bold(),
            pattern_to_emoji(row.pattern)
        );
    }
    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::Corpus;
    use std::io::Cursor;

    fn corpus() -> Corpus {
        Corpus::new(&["crane", "slate", "irate", "crate", "grate"], &["salet"])
    }

    #[test]
    fn parses_inputs() {
        assert_eq!(SimpleInput::parse("Q"), Some(SimpleInput::Quit));
        assert_eq!(SimpleInput::parse(" undo "), Some(SimpleInput::Undo));
        assert_eq!(SimpleInput::parse("win"), Some(SimpleInput::Win));
        assert_eq!(
            SimpleInput::parse("01200"),
            Some(SimpleInput::Feedback(Pattern::from_digits(&[0, 1, 2, 0, 0]).unwrap()))
        );
        assert_eq!(
            SimpleInput::parse("GY-GY"),
            Some(SimpleInput::Feedback(Pattern::from_digits(&[2, 1, 0, 2, 1]).unwrap()))
        );
        assert!(matches!(SimpleInput::parse("slate:00222"), Some(SimpleInput::Row(_))));
        assert_eq!(SimpleInput::parse("hello there"), None);
    }

    #[test]
    fn win_then_quit() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let summary = run_session(&solver, &mut cache, Cursor::new("win\nno\n")).unwrap();
        assert_eq!(summary.games_won, 1);
    }

    #[test]
    fn end_of_input_stops_the_session() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let summary =
            run_session(&solver, &mut cache, Cursor::new("garbage\nundo\nslate:00222\n")).unwrap();
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn six_misses_lose_the_game() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut cache = solver.new_cache();

        let input = "salet:00000\n".repeat(6) + "y\nquit\n";
        let summary = run_session(&solver, &mut cache, Cursor::new(input)).unwrap();
        assert_eq!(summary.games_lost, 1);
        assert_eq!(summary.games_won, 0);
    }
}
