//! Quordle AI
//!
//! An automated player for Wordle and multi-word Quordle games. Each hidden
//! word gets its own candidate pool, narrowed by the feedback of every guess,
//! and guesses are ranked with simple letter-frequency heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use quordle_ai::core::{CandidatePool, Feedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("stone").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "BBBGG");
//!
//! let mut pool = CandidatePool::new(vec![secret.clone(), guess.clone()]);
//! pool.apply(&guess, &feedback);
//! assert_eq!(pool.words(), &[secret]);
//! ```

// Core domain types
pub mod core;

// Strategies and round orchestration
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
