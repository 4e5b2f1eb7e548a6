//! Quordle AI - CLI
//!
//! Plays Wordle and multi-word Quordle rounds with letter-frequency heuristics.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use quordle_ai::{
    commands::{BatchConfig, SolveConfig, analyze_word, letter_stats, run_batch, solve_words},
    core::FeedbackMode,
    output::{print_analysis_result, print_batch_result, print_letter_stats, print_solve_result},
    solver::{RoundConfig, StrategyType},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quordle_ai",
    about = "Automated Wordle/Quordle player using letter-frequency heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: positional-frequency (default), letter-frequency, low-cost, uniqueness, random
    #[arg(short, long, global = true, default_value = "positional-frequency")]
    strategy: String,

    /// Answer list: 'sample' (default, embedded) or path to a file
    #[arg(short, long, global = true, default_value = "sample")]
    answers: String,

    /// Extra accepted guesses, one per line
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Use two-pass feedback that limits duplicate letters to the answer's count
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many random rounds and report statistics
    Benchmark {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "200")]
        rounds: usize,

        /// Hidden words per round (1 = Wordle, 4 = Quordle)
        #[arg(short, long, default_value = "1")]
        words: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Give up a round after this many guesses
        #[arg(long, default_value_t = quordle_ai::solver::DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Most guesses that still count as a win (default: words + 5)
        #[arg(long)]
        win_threshold: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve specific target words
    Solve {
        /// The target words, one per hidden slot
        #[arg(required = true)]
        words: Vec<String>,

        /// Show candidate counts per guess
        #[arg(short, long)]
        verbose: bool,

        /// Seed for strategies that pick randomly
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a word under every heuristic
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Show letter and positional frequencies of the answer list
    Stats,
}

/// Load the dictionary from the --answers and --guesses flags
///
/// - "sample": the embedded answer and guess lists
/// - "<path>": answers from a file
///
/// A --guesses file is added on top of either.
fn load_dictionary(answers: &str, guesses: Option<&PathBuf>) -> Result<Dictionary> {
    let dictionary = match answers {
        "sample" => Dictionary::sample().context("embedded word list is invalid")?,
        path => {
            let answers = load_from_file(path)
                .with_context(|| format!("failed to load answers from {path}"))?;
            Dictionary::new(answers, Vec::new())
        }
    };

    let Some(path) = guesses else {
        return Ok(dictionary);
    };
    let extra = load_from_file(path)
        .with_context(|| format!("failed to load guesses from {}", path.display()))?;

    Ok(dictionary.with_guesses(extra))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy)
        .ok_or_else(|| anyhow!("unknown strategy '{}'", cli.strategy))?;
    let dictionary = load_dictionary(&cli.answers, cli.guesses.as_ref())?;
    let mode = if cli.strict {
        FeedbackMode::TwoPass
    } else {
        FeedbackMode::SinglePass
    };

    match cli.command {
        Commands::Benchmark {
            rounds,
            words,
            seed,
            max_guesses,
            win_threshold,
            quiet,
        } => {
            let mut config = BatchConfig::new(rounds, words);
            config.round = RoundConfig { max_guesses, mode };
            config.seed = seed;
            config.show_progress = !quiet;
            if let Some(threshold) = win_threshold {
                config.win_threshold = threshold;
            }
            run_benchmark_command(&dictionary, strategy, &config)
        }
        Commands::Solve {
            words,
            verbose,
            seed,
        } => {
            let mut config = SolveConfig::new(words);
            config.round.mode = mode;
            config.seed = seed;
            let result = solve_words(&config, &dictionary, &strategy).context("solve failed")?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, mode).context("analyze failed")?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Stats => {
            print_letter_stats(&letter_stats(dictionary.answers()));
            Ok(())
        }
    }
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    strategy: StrategyType,
    config: &BatchConfig,
) -> Result<()> {
    println!(
        "Running {} rounds with {} hidden word(s) using {}...",
        config.rounds,
        config.num_words,
        strategy.name()
    );

    let result = run_batch(dictionary.answers(), &strategy, config).context("benchmark failed")?;
    print_batch_result(&result, config.win_threshold);
    Ok(())
}
