//! Benchmark command
//!
//! Plays many games in parallel and collects the guess distribution.

use super::solve::{GameOutcome, play_game};
use crate::core::Word;
use crate::output::log;
use crate::solver::{Solver, turns_left_after};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which games to play
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Number of answers to sample (all answers when `None`)
    pub count: Option<usize>,
    /// Seed for the sample; a random seed is used when `None`
    pub seed: Option<u64>,
    /// Forced opening guess
    pub first_word: Option<Word>,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub opening: Option<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Answers to play, in corpus order
#[must_use]
pub fn select_targets(answers: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let Some(count) = count.filter(|&n| n < answers.len()) else {
        return answers.to_vec();
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut sample: Vec<Word> = answers.choose_multiple(&mut rng, count).copied().collect();
    sample.sort_unstable();
    sample
}

/// Run benchmark on a set of target words
///
/// The opening is the same for every game, so it is solved once up front.
/// Each rayon worker keeps its own feedback cache.
#[must_use]
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let opening = config.first_word.or_else(|| {
        let mut cache = solver.new_cache();
        solver
            .solve(&mut cache, &[], turns_left_after(0))
            .solver
            .recommended
            .map(|s| s.word)
    });
    if let Some(opening) = opening {
        log::debug(format_args!("opening guess: {opening}"));
    }

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<GameOutcome> = targets
        .par_iter()
        .map_init(
            || solver.new_cache(),
            |cache, &target| {
                let outcome = play_game(solver, cache, target, opening);
                pb.inc(1);
                outcome
            },
        )
        .collect();

    pb.finish_with_message("Complete!");
    summarize(&outcomes, opening, start.elapsed())
}

fn summarize(outcomes: &[GameOutcome], opening: Option<Word>, duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for outcome in outcomes {
        let guesses = outcome.guesses.len();
        if outcome.solved {
            *distribution.entry(guesses).or_insert(0) += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
        } else {
            failures.push(outcome.target);
        }
    }

    let solved = outcomes.len() - failures.len();
    let average_guesses = if solved == 0 {
        0.0
    } else {
        total_guesses as f64 / solved as f64
    };
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words: outcomes.len(),
        solved,
        total_guesses,
        average_guesses,
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        opening,
        duration,
        words_per_second: if seconds > 0.0 {
            outcomes.len() as f64 / seconds
        } else {
            0.0
        },
    }
}
