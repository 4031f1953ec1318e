//! Display functions for command results

use super::formatters::{create_progress_bar, pattern_to_emoji, plural, reduction_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{Solution, Suggestion};
use colored::{ColoredString, Colorize};

fn flags(suggestion: &Suggestion) -> ColoredString {
    let mut tags = Vec::new();
    if suggestion.safe {
        tags.push("safe");
    }
    if suggestion.in_candidates {
        tags.push("candidate");
    } else if suggestion.in_answers {
        tags.push("answer");
    }
    let text = tags.join(", ");
    if suggestion.safe {
        text.green().bold()
    } else {
        text.bright_black()
    }
}

/// Print candidate count, mode and the top `limit` suggestions
pub fn print_solution(solution: &Solution, limit: usize) {
    let result = &solution.solver;
    println!(
        "\n📊 {} ({} mode)",
        plural(solution.candidate_count, "candidate", "candidates")
            .bright_yellow()
            .bold(),
        result.mode.to_string().cyan()
    );

    if let Some(recommended) = &result.recommended {
        println!(
            "   Recommended: {}  expected {:.2}, worst {}  {}",
            recommended.word.text().to_uppercase().bright_green().bold(),
            recommended.expected_remaining,
            recommended.worst_bucket,
            flags(recommended)
        );
    } else {
        println!("   {}", "No recommendation".red());
    }

    if result.suggestions.is_empty() {
        println!();
        return;
    }

    println!(
        "\n   {:>3}  {:<7} {:>9} {:>6}  {}",
        "#", "guess", "expected", "worst", "notes"
    );
    for (rank, suggestion) in result.suggestions.iter().take(limit).enumerate() {
        println!(
            "   {:>3}  {:<7} {:>9.2} {:>6}  {}",
            rank + 1,
            suggestion.word.text().to_uppercase(),
            suggestion.expected_remaining,
            suggestion.worst_bucket,
            flags(suggestion)
        );
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Mode:       {}", step.mode);
            match &step.suggestion {
                Some(suggestion) => {
                    println!("  Expected:   {:.2} candidates", suggestion.expected_remaining);
                    println!("  Worst case: {}", suggestion.worst_bucket);
                    if suggestion.safe {
                        println!("  {}", "Proven forced win".green());
                    }
                }
                None => println!("  {}", "Forced opener".bright_black()),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", plural(result.steps.len(), "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {}", plural(result.steps.len(), "guess", "guesses"))
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = reduction_bar(metrics.expected_remaining, result.total_candidates, 30);

    println!(
        "\n📊 Against {} with {} left:",
        plural(result.total_candidates, "candidate", "candidates"),
        plural(result.turns_left as usize, "turn", "turns")
    );
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} remain", metrics.expected_remaining).bright_yellow()
    );
    println!("   Worst case:  {} remain", metrics.worst_bucket);
    println!("   Buckets:     {}", metrics.buckets);
    println!(
        "   Candidate:   {}",
        if result.in_candidates { "yes" } else { "no" }
    );

    match &result.proof {
        Some(report) if report.safe => println!(
            "   Proof:       {} ({} nodes)",
            "forced win".green().bold(),
            report.nodes
        ),
        Some(report) if report.exhausted => println!(
            "   Proof:       {} ({} nodes)",
            "not proven under budget".yellow(),
            report.nodes
        ),
        Some(report) => println!(
            "   Proof:       {} ({} nodes)",
            "no forced win".red(),
            report.nodes
        ),
        None => println!("   Proof:       {}", "skipped (position too large)".bright_black()),
    }

    if !result.largest_buckets.is_empty() {
        println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
        for (pattern, size) in &result.largest_buckets {
            println!("   {} {size:4}", pattern_to_emoji(*pattern));
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if let Some(opening) = result.opening {
        println!("   Opening guess:    {}", opening.text().to_uppercase());
    }
    println!(
        "   Solved:           {}/{}",
        result.solved.to_string().green(),
        result.total_words
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        let words: Vec<String> = result
            .failures
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   {}", words.join(", "));
    }
}
