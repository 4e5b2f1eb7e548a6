//! Errors raised while playing rounds

use thiserror::Error;

/// Error type for game setup and play
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A hidden word's pool lost every candidate
    #[error("candidate pool for word {slot} is empty")]
    EmptyPool { slot: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The round ran past its guess budget
    #[error("no solution within {limit} guesses")]
    GuessLimitExceeded { limit: usize },

    #[error("expected feedback for {expected} words, got {actual}")]
    FeedbackCountMismatch { expected: usize, actual: usize },
}
