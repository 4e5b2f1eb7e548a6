//! Round orchestration
//!
//! A [`Player`] keeps one candidate pool per hidden word and narrows all of
//! them with the feedback of every guess. [`play_round`] and [`play_game`]
//! drive a player against a [`Game`] until every hidden word is found.

use super::error::SimulationError;
use super::game::Game;
use super::strategy::Strategy;
use crate::core::{CandidatePool, Feedback, FeedbackMode, Word};
use rand::Rng;
use rayon::prelude::*;

/// Default cap on guesses per round
pub const DEFAULT_MAX_GUESSES: usize = 128;

/// Settings for a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Guesses allowed before the round fails
    pub max_guesses: usize,
    /// Feedback rule used to evaluate and filter
    pub mode: FeedbackMode,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            mode: FeedbackMode::default(),
        }
    }
}

/// Whether a hidden word has been found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unsolved,
    /// Found by the guess with this 1-based number
    Solved { guess: usize },
}

/// One hidden word's candidate pool and state
#[derive(Debug, Clone)]
pub struct Slot {
    pool: CandidatePool,
    state: SlotState,
}

impl Slot {
    /// Remaining candidates
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn state(&self) -> SlotState {
        self.state
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, SlotState::Solved { .. })
    }
}

/// Tracks what is known about each hidden word during a round
#[derive(Debug, Clone)]
pub struct Player {
    slots: Vec<Slot>,
    mode: FeedbackMode,
    guesses: usize,
}

impl Player {
    /// Create a player for `num_words` hidden words
    ///
    /// Every slot starts with its own copy of `dictionary`.
    #[must_use]
    pub fn new(dictionary: &[Word], num_words: usize, mode: FeedbackMode) -> Self {
        let slots = (0..num_words)
            .map(|_| Slot {
                pool: CandidatePool::from_slice(dictionary),
                state: SlotState::Unsolved,
            })
            .collect();

        Self {
            slots,
            mode,
            guesses: 0,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Remaining candidates per slot
    #[must_use]
    pub fn pool_sizes(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.pool.len()).collect()
    }

    /// Number of guesses observed so far
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses
    }

    /// Whether every hidden word has been found
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.slots.iter().all(Slot::is_solved)
    }

    /// Choose the next guess from the first unsolved slot's pool
    ///
    /// # Errors
    /// Returns `EmptyPool` if that pool has no candidates, or
    /// `InvalidConfiguration` if every slot is already solved.
    pub fn next_guess<S, R>(&self, strategy: &S, rng: &mut R) -> Result<Word, SimulationError>
    where
        S: Strategy,
        R: Rng + ?Sized,
    {
        let (index, slot) = self
            .slots
            .iter()
            .enumerate()
            .find(|(_, slot)| !slot.is_solved())
            .ok_or_else(|| {
                SimulationError::InvalidConfiguration("every word is already solved".to_string())
            })?;

        strategy
            .select_guess(slot.pool.words(), rng)
            .cloned()
            .ok_or(SimulationError::EmptyPool { slot: index })
    }

    /// Apply the feedback of `guess`, one entry per slot
    ///
    /// Slots whose feedback is all exact become solved and keep their pool.
    /// Every other unsolved pool is filtered with its own feedback.
    ///
    /// # Errors
    /// Returns `FeedbackCountMismatch` if `feedbacks` does not have one entry
    /// per slot, or `EmptyPool` if an unsolved pool lost every candidate.
    pub fn observe(&mut self, guess: &Word, feedbacks: &[Feedback]) -> Result<(), SimulationError> {
        if feedbacks.len() != self.slots.len() {
            return Err(SimulationError::FeedbackCountMismatch {
                expected: self.slots.len(),
                actual: feedbacks.len(),
            });
        }

        self.guesses += 1;
        let turn = self.guesses;
        let mode = self.mode;

        self.slots
            .par_iter_mut()
            .zip(feedbacks)
            .filter(|(slot, _)| !slot.is_solved())
            .for_each(|(slot, feedback)| {
                if feedback.is_solved() {
                    slot.state = SlotState::Solved { guess: turn };
                } else {
                    slot.pool.apply_with(mode, guess, feedback);
                }
            });

        match self
            .slots
            .iter()
            .position(|slot| !slot.is_solved() && slot.pool.is_empty())
        {
            Some(slot) => Err(SimulationError::EmptyPool { slot }),
            None => Ok(()),
        }
    }

    /// Pick a guess, have `game` evaluate it, and observe the feedback
    ///
    /// Returns the guess and its feedback per slot.
    ///
    /// # Errors
    /// Propagates the errors of [`Player::next_guess`] and [`Player::observe`].
    pub fn take_turn<S, R>(
        &mut self,
        game: &Game,
        strategy: &S,
        rng: &mut R,
    ) -> Result<(Word, Vec<Feedback>), SimulationError>
    where
        S: Strategy,
        R: Rng + ?Sized,
    {
        let guess = self.next_guess(strategy, rng)?;
        let feedbacks = game.evaluate_guess(&guess);
        self.observe(&guess, &feedbacks)?;
        Ok((guess, feedbacks))
    }

    /// The guess number that solved each slot, `None` while unsolved
    #[must_use]
    pub fn solved_on(&self) -> Vec<Option<usize>> {
        self.slots
            .iter()
            .map(|slot| match slot.state {
                SlotState::Solved { guess } => Some(guess),
                SlotState::Unsolved => None,
            })
            .collect()
    }
}

/// Outcome of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Every guess, in order
    pub guesses: Vec<Word>,
    /// 1-based guess number that found each hidden word, in slot order
    pub solved_on: Vec<usize>,
}

impl RoundResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Play one round against `num_words` answers drawn from `dictionary`
///
/// # Errors
/// Returns an error if the game cannot be set up or play fails (see [`play_game`]).
///
/// # Examples
/// ```
/// use quordle_ai::solver::{RoundConfig, StrategyType, play_round};
/// use quordle_ai::wordlists::Dictionary;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let dictionary = Dictionary::sample().unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let result = play_round(
///     dictionary.answers(),
///     4,
///     &StrategyType::default(),
///     &RoundConfig::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert!(result.num_guesses() >= 4);
/// ```
pub fn play_round<S, R>(
    dictionary: &[Word],
    num_words: usize,
    strategy: &S,
    config: &RoundConfig,
    rng: &mut R,
) -> Result<RoundResult, SimulationError>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let game = Game::new(dictionary, num_words, rng)?.with_mode(config.mode);
    play_game(&game, dictionary, strategy, config, rng)
}

/// Play `game` to the end, starting every pool from `dictionary`
///
/// Feedback is produced and filtered with the game's mode.
///
/// # Errors
/// Returns `EmptyPool` if a hidden word's pool runs out of candidates (only
/// possible when an answer is missing from `dictionary`), or
/// `GuessLimitExceeded` after `config.max_guesses` guesses.
pub fn play_game<S, R>(
    game: &Game,
    dictionary: &[Word],
    strategy: &S,
    config: &RoundConfig,
    rng: &mut R,
) -> Result<RoundResult, SimulationError>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let mut player = Player::new(dictionary, game.num_words(), game.mode());
    let mut guesses = Vec::new();

    while !player.is_finished() {
        if guesses.len() >= config.max_guesses {
            return Err(SimulationError::GuessLimitExceeded {
                limit: config.max_guesses,
            });
        }

        let (guess, _) = player.take_turn(game, strategy, rng)?;
        guesses.push(guess);
    }

    let solved_on = player.solved_on().into_iter().flatten().collect();
    Ok(RoundResult { guesses, solved_on })
}
