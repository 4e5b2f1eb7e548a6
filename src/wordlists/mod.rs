//! Word lists
//!
//! Provides the embedded sample lists, file loading, and the [`Dictionary`]
//! that a round draws its hidden words and candidate pools from.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_ANSWERS, SAMPLE_ANSWERS_COUNT, SAMPLE_GUESSES, SAMPLE_GUESSES_COUNT};
pub use loader::LoadError;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Answers plus accepted guesses
///
/// Hidden words are drawn from the answers, and every candidate pool starts
/// as a copy of them. Guesses only widen what counts as an allowed word.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from answer and guess lists
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let allowed = answers.iter().cloned().chain(guesses).collect();
        Self { answers, allowed }
    }

    /// The embedded sample lists
    ///
    /// # Errors
    /// Returns `LoadError::MalformedWord` if an embedded entry is invalid.
    pub fn sample() -> Result<Self, LoadError> {
        Ok(Self::new(
            loader::words_from_slice(SAMPLE_ANSWERS)?,
            loader::words_from_slice(SAMPLE_GUESSES)?,
        ))
    }

    /// Accept `guesses` as well
    #[must_use]
    pub fn with_guesses(mut self, guesses: Vec<Word>) -> Self {
        self.allowed.extend(guesses);
        self
    }

    /// Words that can be hidden, in list order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of words accepted as guesses, answers included
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Whether `word` can be a hidden word
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }

    /// Whether `word` is accepted as a guess
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}
