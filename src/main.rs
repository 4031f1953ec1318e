//! Wordle Prover - CLI
//!
//! Wordle solver with TUI and CLI modes. Ranks guesses by expected remaining
//! candidates and proves forced wins late in the game.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_prover::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, parse_constraints, read_body, respond,
        run_benchmark, run_simple, select_targets, solve_word, suggest,
    },
    core::Word,
    output::{
        log::{self, Verbosity},
        print_analysis_result, print_benchmark_result, print_solution, print_solve_result,
    },
    solver::{ProofConfig, Solver, SolverConfig},
    wordlists::{ALLOWED, ANSWERS, Corpus, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_prover",
    about = "Wordle solver that ranks guesses and proves forced wins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    solver: SolverArgs,

    /// Print debug diagnostics and per-step detail
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress informational diagnostics
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Word lists and solver tuning
#[derive(Args, Debug)]
struct SolverArgs {
    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Allowed-guess list file (default: embedded list)
    #[arg(long, global = true, value_name = "FILE")]
    allowed: Option<PathBuf>,

    /// Guess rows kept in the feedback cache
    #[arg(long, global = true, default_value_t = SolverConfig::default().feedback_cache_rows)]
    cache_rows: usize,

    /// Evaluate every allowed guess at or below this many candidates
    #[arg(long, global = true, default_value_t = SolverConfig::default().full_pool_max_candidates)]
    full_pool_max: usize,

    /// Coverage pool size for ranking larger candidate sets
    #[arg(long, global = true, default_value_t = SolverConfig::default().suggestion_pool_size)]
    pool_size: usize,

    /// Exact mode candidate threshold
    #[arg(long, global = true, default_value_t = SolverConfig::default().exact_max_candidates)]
    exact_candidates: usize,

    /// Exact mode turn threshold
    #[arg(long, global = true, default_value_t = SolverConfig::default().exact_max_turns)]
    exact_turns: u32,

    /// Top suggestions checked by the prover
    #[arg(long, global = true, default_value_t = SolverConfig::default().proof_checks)]
    proof_checks: usize,

    /// Prover node budget per safety check
    #[arg(long, global = true, default_value_t = ProofConfig::default().node_budget)]
    node_budget: usize,
}

impl SolverArgs {
    fn config(&self) -> SolverConfig {
        let mut config = SolverConfig {
            feedback_cache_rows: self.cache_rows,
            full_pool_max_candidates: self.full_pool_max,
            suggestion_pool_size: self.pool_size,
            exact_max_candidates: self.exact_candidates,
            exact_max_turns: self.exact_turns,
            proof_checks: self.proof_checks,
            ..SolverConfig::default()
        };
        config.proof.node_budget = self.node_budget;
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Rank guesses for a game state
    Suggest {
        /// Played rows as guess:pattern, e.g. crane:01200
        rows: Vec<String>,

        /// Turns left (default: 6 minus the number of rows)
        #[arg(short, long)]
        turns: Option<u32>,

        /// Suggestions to print
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer an endpoint request body with the endpoint's JSON
    Next {
        /// Request body (default: read from stdin)
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Solve a specific word
    Solve {
        /// Target word to solve
        word: String,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Analyze one guess against a game state
    Analyze {
        /// Guess to analyze
        word: String,

        /// Played rows as guess:pattern
        rows: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override first word (default: the solver's opening recommendation)
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

/// Read one list from a file, or fall back to the embedded copy
fn list_or_embedded(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            loader::load_lines(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(embedded.iter().map(|&w| w.to_string()).collect()),
    }
}

fn load_corpus(args: &SolverArgs) -> Result<Corpus> {
    let answers = list_or_embedded(args.answers.as_deref(), ANSWERS)?;
    let allowed = list_or_embedded(args.allowed.as_deref(), ALLOWED)?;
    let corpus = Corpus::new(&answers, &allowed);

    if corpus.answers().is_empty() {
        bail!("the answer list contains no valid five-letter words");
    }
    log::debug(format_args!(
        "corpus: {} answers, {} allowed guesses",
        corpus.answers().len(),
        corpus.allowed().len()
    ));
    Ok(corpus)
}

fn parse_word(word: &str) -> Result<Word> {
    Word::new(word).with_context(|| format!("invalid word '{word}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log::set_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));

    let corpus = load_corpus(&cli.solver)?;
    let config = cli.solver.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(corpus, config),
        Commands::Simple => {
            let solver = Solver::new(&corpus, config);
            let summary = run_simple(&solver)?;
            log::info(format_args!(
                "{} won, {} lost",
                summary.games_won, summary.games_lost
            ));
            Ok(())
        }
        Commands::Suggest {
            rows,
            turns,
            limit,
            json,
        } => run_suggest_command(&corpus, config, &rows, turns, limit, json),
        Commands::Next { body } => run_next_command(&corpus, config, body),
        Commands::Solve { word, first_word } => {
            run_solve_command(&corpus, config, word, first_word.as_deref(), cli.verbose)
        }
        Commands::Analyze { word, rows } => run_analyze_command(&corpus, config, &word, &rows),
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => run_benchmark_command(&corpus, config, count, seed, first_word.as_deref(), cli.quiet),
    }
}

fn run_play_command(corpus: Corpus, config: SolverConfig) -> Result<()> {
    use wordle_prover::interactive::{App, run_tui};

    let app = App::new(Arc::new(corpus), config);
    run_tui(app)
}

fn run_suggest_command(
    corpus: &Corpus,
    config: SolverConfig,
    rows: &[String],
    turns: Option<u32>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let solver = Solver::new(corpus, config);
    let mut cache = solver.new_cache();
    let solution = suggest(&solver, &mut cache, rows, turns)?;
    log::debug(format_args!("feedback cache holds {} rows", cache.len()));

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print_solution(&solution, limit);
    }
    Ok(())
}

fn run_next_command(corpus: &Corpus, config: SolverConfig, body: Option<String>) -> Result<()> {
    let body = match body {
        Some(body) => body.into_bytes(),
        None => read_body(io::stdin().lock())?,
    };

    let solver = Solver::new(corpus, config);
    let mut cache = solver.new_cache();
    let response = respond(&solver, &mut cache, &body);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn run_solve_command(
    corpus: &Corpus,
    config: SolverConfig,
    word: String,
    first_word: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let solver = Solver::new(corpus, config);
    let mut cache = solver.new_cache();

    let mut solve_config = SolveConfig::new(word);
    solve_config.first_guess = first_word.map(parse_word).transpose()?;

    let result = solve_word(&solver, &mut cache, &solve_config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(
    corpus: &Corpus,
    config: SolverConfig,
    word: &str,
    rows: &[String],
) -> Result<()> {
    let solver = Solver::new(corpus, config);
    let mut cache = solver.new_cache();
    let constraints = parse_constraints(rows)?;

    let result = analyze_word(&solver, &mut cache, word, &constraints)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    corpus: &Corpus,
    config: SolverConfig,
    count: Option<usize>,
    seed: Option<u64>,
    first_word: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let solver = Solver::new(corpus, config);
    let targets = select_targets(corpus.answers(), count, seed);

    let bench_config = BenchmarkConfig {
        count,
        seed,
        first_word: first_word.map(parse_word).transpose()?,
        show_progress: !quiet,
    };
    if let Some(word) = bench_config.first_word
        && !corpus.is_allowed(&word)
    {
        log::warn(format_args!("'{word}' is not in the allowed list"));
    }

    log::info(format_args!("Running benchmark on {} words...", targets.len()));
    let result = run_benchmark(&solver, &targets, &bench_config);
    print_benchmark_result(&result);
    Ok(())
}
