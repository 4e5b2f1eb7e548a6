//! Playing rounds
//!
//! This module contains the ranking strategies, the hidden-word game and the
//! orchestration that narrows one candidate pool per hidden word.

mod engine;
mod error;
mod game;
pub mod strategy;
pub mod tables;

pub use engine::{
    DEFAULT_MAX_GUESSES, Player, RoundConfig, RoundResult, Slot, SlotState, play_game, play_round,
};
pub use error::SimulationError;
pub use game::Game;
pub use strategy::{
    LetterFrequencyStrategy, LowCostStrategy, PositionalFrequencyStrategy, RandomStrategy,
    Strategy, StrategyType, UniquenessStrategy, WordScorer, rank,
};
