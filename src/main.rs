//! Wordle Simulator - CLI
//!
//! Runs the constraint-based solver against every answer in a word list and
//! reports accuracy and the guess distribution.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use wordle_sim::{
    commands::{RunConfig, SolveConfig, run_all, solve_word},
    core::Word,
    output::{print_run_report, print_solve_result},
    solver::{CoverageStrategy, DEFAULT_MAX_ROUNDS, DEFAULT_OPENING, Solver, SolverConfig},
    wordlists::{DEFAULT_ANSWERS_PATH, DEFAULT_GUESSES_PATH, WordLists},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Batch Wordle simulator using letter-frequency coverage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// Guess-only list, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: PathBuf,

    /// First guess of every game
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Maximum guesses per game
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Score three remaining candidates instead of guessing the first
    #[arg(long, global = true)]
    score_three: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every answer in the list (default)
    Run {
        /// Only the first N answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// A random sample of N answers
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, requires = "sample")]
        seed: Option<u64>,

        /// Solve answers on all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    let lists = WordLists::load(&cli.answers, &cli.guesses).context("failed to load word lists")?;

    let opening = Word::new(cli.opening.as_str())
        .with_context(|| format!("invalid opening word '{}'", cli.opening))?;
    let config = SolverConfig::new(opening, cli.max_rounds);
    let strategy = CoverageStrategy::new(!cli.score_three);
    let solver = Solver::new(strategy, &lists.answers, &lists.guesses, config);

    log::info!(
        "opening {}, max rounds {}, three-candidate shortcut {}",
        cli.opening,
        cli.max_rounds,
        !cli.score_three
    );

    let command = cli.command.unwrap_or(Commands::Run {
        limit: None,
        sample: None,
        seed: None,
        parallel: false,
    });

    match command {
        Commands::Run {
            limit,
            sample,
            seed,
            parallel,
        } => {
            let run_config = RunConfig {
                limit,
                sample,
                seed,
                parallel,
                show_progress: true,
            };
            let stats = run_all(&solver, &run_config);
            print_run_report(&stats, cli.max_rounds);
        }
        Commands::Solve { word } => {
            let record = solve_word(&SolveConfig::new(word.clone()), &solver)
                .with_context(|| format!("invalid target word '{word}'"))?;
            print_solve_result(&record, true);
        }
    }

    Ok(())
}
