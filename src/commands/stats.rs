//! Letter statistics command
//!
//! Recomputes the letter and positional frequency tables for an answer list.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word};
use crate::solver::tables::{letter_frequencies, position_frequencies};

/// Letter frequencies of a word list
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStats {
    pub total_words: usize,
    /// Fraction of words containing each letter
    pub letters: [f64; ALPHABET_SIZE],
    /// Fraction of words with each letter at each position
    pub positions: [[f64; ALPHABET_SIZE]; WORD_LENGTH],
}

impl LetterStats {
    /// The `n` most common letters overall, most common first
    #[must_use]
    pub fn top_letters(&self, n: usize) -> Vec<(char, f64)> {
        top(&self.letters, n)
    }

    /// The `n` most common letters at `position`, most common first
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[must_use]
    pub fn top_at(&self, position: usize, n: usize) -> Vec<(char, f64)> {
        top(&self.positions[position], n)
    }
}

/// Letters by descending frequency; ties stay alphabetical, unused letters are left out
fn top(table: &[f64; ALPHABET_SIZE], n: usize) -> Vec<(char, f64)> {
    let mut letters: Vec<(char, f64)> = (b'a'..=b'z')
        .map(char::from)
        .zip(table.iter().copied())
        .filter(|&(_, freq)| freq > 0.0)
        .collect();
    letters.sort_by(|a, b| b.1.total_cmp(&a.1));
    letters.truncate(n);
    letters
}

/// Compute letter statistics for `words`
#[must_use]
pub fn letter_stats(words: &[Word]) -> LetterStats {
    LetterStats {
        total_words: words.len(),
        letters: letter_frequencies(words),
        positions: position_frequencies(words),
    }
}
