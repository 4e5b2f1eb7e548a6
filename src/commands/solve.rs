//! Word solving command
//!
//! Plays one round against fixed target words and records every step.

use crate::core::{Feedback, Word, WordError};
use crate::solver::{Game, Player, RoundConfig, SimulationError, Slot, Strategy};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Configuration for solving fixed targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub targets: Vec<String>,
    pub round: RoundConfig,
    /// Seed for strategies that pick randomly
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            targets,
            round: RoundConfig::default(),
            seed: None,
        }
    }
}

/// Error type for the solve command
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word {text:?}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    #[error("'{0}' is not in the answer list")]
    NotAnAnswer(Word),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// A single guess in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    /// Feedback per target, `None` for targets solved by an earlier guess
    pub feedbacks: Vec<Option<Feedback>>,
    pub pool_sizes_before: Vec<usize>,
    pub pool_sizes_after: Vec<usize>,
}

/// Result of solving fixed targets
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub targets: Vec<Word>,
    pub steps: Vec<GuessStep>,
    /// 1-based guess number that found each target
    pub solved_on: Vec<usize>,
}

impl SolveResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.steps.len()
    }
}

/// Solve the configured targets, drawing candidates from the dictionary's answers
///
/// # Errors
///
/// Returns an error if:
/// - A target is not a valid word or not in the answer list
/// - Targets repeat
/// - The round exceeds the configured guess limit
pub fn solve_words<S: Strategy>(
    config: &SolveConfig,
    dictionary: &Dictionary,
    strategy: &S,
) -> Result<SolveResult, SolveError> {
    let targets = config
        .targets
        .iter()
        .map(|text| {
            Word::new(text.as_str()).map_err(|source| SolveError::InvalidWord {
                text: text.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(missing) = targets.iter().find(|word| !dictionary.is_answer(word)) {
        return Err(SolveError::NotAnAnswer(missing.clone()));
    }

    let game = Game::with_answers(targets)?.with_mode(config.round.mode);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut player = Player::new(dictionary.answers(), game.num_words(), game.mode());
    let mut steps = Vec::new();

    while !player.is_finished() {
        if steps.len() >= config.round.max_guesses {
            return Err(SimulationError::GuessLimitExceeded {
                limit: config.round.max_guesses,
            }
            .into());
        }

        let pool_sizes_before = player.pool_sizes();
        let already_solved: Vec<bool> = player.slots().iter().map(Slot::is_solved).collect();

        let (word, feedbacks) = player.take_turn(&game, strategy, &mut rng)?;

        steps.push(GuessStep {
            word,
            feedbacks: feedbacks
                .into_iter()
                .zip(already_solved)
                .map(|(feedback, solved)| (!solved).then_some(feedback))
                .collect(),
            pool_sizes_before,
            pool_sizes_after: player.pool_sizes(),
        });
    }

    Ok(SolveResult {
        targets: game.reveal().to_vec(),
        steps,
        solved_on: player.solved_on().into_iter().flatten().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    fn config(targets: &[&str]) -> SolveConfig {
        SolveConfig {
            seed: Some(1),
            ..SolveConfig::new(targets.iter().map(|t| (*t).to_string()).collect())
        }
    }

    #[test]
    fn solve_single_target() {
        let dictionary = Dictionary::sample().unwrap();
        let result = solve_words(&config(&["crane"]), &dictionary, &StrategyType::default()).unwrap();

        let last = result.steps.last().unwrap();
        assert_eq!(last.word.text(), "crane");
        assert_eq!(last.feedbacks, vec![Some(Feedback::SOLVED)]);
        assert_eq!(result.solved_on, vec![result.num_guesses()]);
        assert_eq!(result.steps[0].pool_sizes_before, vec![dictionary.answers().len()]);
    }

    #[test]
    fn solve_four_targets() {
        let dictionary = Dictionary::sample().unwrap();
        let targets = ["apple", "stone", "crane", "robot"];

        for strategy in StrategyType::ALL {
            let result = solve_words(&config(&targets), &dictionary, &strategy).unwrap();

            assert!(result.num_guesses() >= 4);
            for (target, &turn) in result.targets.iter().zip(&result.solved_on) {
                assert_eq!(&result.steps[turn - 1].word, target);
            }
        }
    }

    #[test]
    fn pool_sizes_never_grow() {
        let dictionary = Dictionary::sample().unwrap();
        let targets = ["apple", "stone", "grape", "robot"];
        let result = solve_words(&config(&targets), &dictionary, &StrategyType::LowCost).unwrap();

        for (i, step) in result.steps.iter().enumerate() {
            for (before, after) in step.pool_sizes_before.iter().zip(&step.pool_sizes_after) {
                assert!(after <= before);
            }
            if let Some(next) = result.steps.get(i + 1) {
                assert_eq!(step.pool_sizes_after, next.pool_sizes_before);
            }
        }
    }

    #[test]
    fn solved_targets_get_no_feedback() {
        let dictionary = Dictionary::sample().unwrap();
        let result = solve_words(
            &config(&["apple", "stone"]),
            &dictionary,
            &StrategyType::default(),
        )
        .unwrap();

        for (slot, &turn) in result.solved_on.iter().enumerate() {
            for (i, step) in result.steps.iter().enumerate() {
                assert_eq!(step.feedbacks[slot].is_none(), i + 1 > turn);
            }
        }
    }

    #[test]
    fn invalid_targets_are_rejected() {
        let dictionary = Dictionary::sample().unwrap();
        let strategy = StrategyType::default();

        assert!(matches!(
            solve_words(&config(&["cr4ne"]), &dictionary, &strategy),
            Err(SolveError::InvalidWord { .. })
        ));
        assert!(matches!(
            solve_words(&config(&["slate"]), &dictionary, &strategy),
            Err(SolveError::NotAnAnswer(_))
        ));
        assert!(matches!(
            solve_words(&config(&["crane", "crane"]), &dictionary, &strategy),
            Err(SolveError::Simulation(SimulationError::InvalidConfiguration(_)))
        ));
        assert!(matches!(
            solve_words(&config(&[]), &dictionary, &strategy),
            Err(SolveError::Simulation(SimulationError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn guess_limit_applies() {
        let dictionary = Dictionary::sample().unwrap();
        let mut config = config(&["apple", "stone"]);
        config.round.max_guesses = 1;

        assert!(matches!(
            solve_words(&config, &dictionary, &StrategyType::default()),
            Err(SolveError::Simulation(SimulationError::GuessLimitExceeded { limit: 1 }))
        ));
    }
}
