//! Core domain types for Wordle-style games
//!
//! This module contains the words, the feedback evaluator and the candidate
//! filter. Everything here is pure and deterministic.

mod feedback;
mod pool;
mod word;

pub use feedback::{Feedback, FeedbackMode, FeedbackSymbol};
pub use pool::{CandidatePool, admits, admits_with};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
