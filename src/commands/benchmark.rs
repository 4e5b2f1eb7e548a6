//! Benchmark command
//!
//! Plays many independent rounds and aggregates their guess counts.

use crate::core::Word;
use crate::output::formatters::batch_progress_bar;
use crate::solver::{RoundConfig, SimulationError, Strategy, play_round};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Extra guesses on top of the word count still counted as a win
pub const WIN_MARGIN: usize = 5;

/// Configuration for a batch of rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub rounds: usize,
    pub num_words: usize,
    /// A round is won if it needs at most this many guesses
    pub win_threshold: usize,
    pub round: RoundConfig,
    /// Round `i` is seeded with `seed + i`; `None` seeds from the thread RNG
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BatchConfig {
    /// Batch of `rounds` rounds with `num_words` hidden words each
    ///
    /// The win threshold defaults to `num_words + 5`: 6 for Wordle, 9 for Quordle.
    #[must_use]
    pub fn new(rounds: usize, num_words: usize) -> Self {
        Self {
            rounds,
            num_words,
            win_threshold: num_words.saturating_add(WIN_MARGIN),
            round: RoundConfig::default(),
            seed: None,
            show_progress: false,
        }
    }
}

/// Aggregate statistics of a batch
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total_rounds: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub wins: usize,
    pub win_rate: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of rounds per guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl BatchResult {
    /// Reduce per-round guess counts into aggregate statistics
    ///
    /// An empty slice gives an all-zero result.
    #[must_use]
    pub fn from_counts(counts: &[usize], win_threshold: usize, duration: Duration) -> Self {
        let total_rounds = counts.len();
        let total_guesses = counts.iter().sum();
        let wins = counts.iter().filter(|&&n| n <= win_threshold).count();

        let mut distribution = FxHashMap::default();
        for &count in counts {
            *distribution.entry(count).or_insert(0) += 1;
        }

        let (average_guesses, win_rate) = if total_rounds == 0 {
            (0.0, 0.0)
        } else {
            (
                total_guesses as f64 / total_rounds as f64,
                wins as f64 / total_rounds as f64,
            )
        };

        let seconds = duration.as_secs_f64();
        let rounds_per_second = if total_rounds == 0 || seconds == 0.0 {
            0.0
        } else {
            total_rounds as f64 / seconds
        };

        Self {
            total_rounds,
            total_guesses,
            average_guesses,
            wins,
            win_rate,
            min_guesses: counts.iter().copied().min().unwrap_or(0),
            max_guesses: counts.iter().copied().max().unwrap_or(0),
            distribution,
            duration,
            rounds_per_second,
        }
    }
}

/// Play `config.rounds` independent rounds in parallel
///
/// With a seed the result does not depend on thread scheduling.
///
/// # Errors
///
/// Returns the first `SimulationError` any round hits, e.g. an invalid word
/// count or the guess limit.
pub fn run_batch<S: Strategy + Sync>(
    dictionary: &[Word],
    strategy: &S,
    config: &BatchConfig,
) -> Result<BatchResult, SimulationError> {
    let start = Instant::now();
    let progress = if config.show_progress {
        batch_progress_bar(config.rounds)
    } else {
        ProgressBar::hidden()
    };

    let counts: Vec<usize> = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let result = play_round(
                dictionary,
                config.num_words,
                strategy,
                &config.round,
                &mut rng,
            );
            progress.inc(1);
            result.map(|round| round.num_guesses())
        })
        .collect::<Result<_, _>>()?;

    progress.finish_and_clear();

    Ok(BatchResult::from_counts(
        &counts,
        config.win_threshold,
        start.elapsed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;
    use crate::wordlists::SAMPLE_ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn seeded(rounds: usize, num_words: usize, seed: u64) -> BatchConfig {
        BatchConfig {
            seed: Some(seed),
            ..BatchConfig::new(rounds, num_words)
        }
    }

    #[test]
    fn win_threshold_defaults() {
        assert_eq!(BatchConfig::new(10, 1).win_threshold, 6);
        assert_eq!(BatchConfig::new(10, 4).win_threshold, 9);
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let result = run_batch(&dictionary, &StrategyType::default(), &seeded(20, 1, 5)).unwrap();

        assert_eq!(result.total_rounds, 20);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.wins <= result.total_rounds);
        assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let result = run_batch(&dictionary, &StrategyType::LowCost, &seeded(16, 4, 11)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_rounds);
        let weighted: usize = result.distribution.iter().map(|(n, c)| n * c).sum();
        assert_eq!(weighted, result.total_guesses);
        assert!(result.min_guesses >= 4);
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let config = seeded(24, 2, 99);
        let a = run_batch(&dictionary, &StrategyType::Random, &config).unwrap();
        let b = run_batch(&dictionary, &StrategyType::Random, &config).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.wins, b.wins);
    }

    #[test]
    fn zero_rounds_is_all_zero() {
        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let result = run_batch(&dictionary, &StrategyType::default(), &BatchConfig::new(0, 1)).unwrap();

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.min_guesses, 0);
        assert_eq!(result.max_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
        assert!(result.win_rate.abs() < f64::EPSILON);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn errors_propagate() {
        let dictionary = words_from_slice(&["crane", "slate"]).unwrap();
        let result = run_batch(&dictionary, &StrategyType::default(), &seeded(4, 3, 0));

        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }

    #[test]
    fn huge_word_count_is_a_configuration_error() {
        let config = BatchConfig::new(1, usize::MAX);
        assert_eq!(config.win_threshold, usize::MAX);

        let dictionary = words_from_slice(SAMPLE_ANSWERS).unwrap();
        let result = run_batch(&dictionary, &StrategyType::default(), &config);

        assert!(matches!(result, Err(SimulationError::InvalidConfiguration(_))));
    }

    #[test]
    fn from_counts_metrics() {
        let result = BatchResult::from_counts(&[4, 6, 7, 6], 6, Duration::from_secs(2));

        assert_eq!(result.total_rounds, 4);
        assert_eq!(result.total_guesses, 23);
        assert!((result.average_guesses - 5.75).abs() < f64::EPSILON);
        assert_eq!(result.wins, 3);
        assert!((result.win_rate - 0.75).abs() < f64::EPSILON);
        assert_eq!(result.min_guesses, 4);
        assert_eq!(result.max_guesses, 7);
        assert_eq!(result.distribution.get(&6), Some(&2));
        assert!((result.rounds_per_second - 2.0).abs() < f64::EPSILON);
    }
}
