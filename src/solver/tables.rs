//! Static letter tables used by the scoring strategies
//!
//! Every table is indexed by `letter - b'a'`. Frequencies were measured over
//! the 2,315 official Wordle answers; [`letter_frequencies`] and
//! [`position_frequencies`] recompute them for any word list.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word};

/// Scrabble tile value of each letter; common letters are cheap
pub static LETTER_COST: [u8; ALPHABET_SIZE] = [
    1, 3, 3, 2, 1, // a b c d e
    4, 2, 4, 1, 8, // f g h i j
    5, 1, 3, 1, 1, // k l m n o
    3, 10, 1, 1, 1, // p q r s t
    1, 4, 4, 8, 4, // u v w x y
    10, // z
];

/// Highest cost in [`LETTER_COST`] plus one, so every letter scores at least 1
pub const MAX_LETTER_COST: u8 = 11;

/// Probability that an answer contains each letter
pub static LETTER_FREQUENCY: [f64; ALPHABET_SIZE] = [
    0.393, 0.115, 0.194, 0.160, 0.456, // a b c d e
    0.089, 0.130, 0.164, 0.280, 0.012, // f g h i j
    0.087, 0.280, 0.129, 0.238, 0.291, // k l m n o
    0.149, 0.013, 0.362, 0.267, 0.288, // p q r s t
    0.197, 0.064, 0.084, 0.016, 0.180, // u v w x y
    0.015, // z
];

/// Probability that an answer has each letter at each position
pub static POSITION_FREQUENCY: [[f64; ALPHABET_SIZE]; WORD_LENGTH] = [
    [
        0.061, 0.075, 0.086, 0.048, 0.031, // a b c d e
        0.059, 0.050, 0.030, 0.015, 0.009, // f g h i j
        0.009, 0.038, 0.046, 0.016, 0.018, // k l m n o
        0.061, 0.010, 0.045, 0.158, 0.064, // p q r s t
        0.014, 0.019, 0.036, 0.000, 0.003, // u v w x y
        0.001, // z
    ],
    [
        0.131, 0.007, 0.017, 0.009, 0.105, // a b c d e
        0.003, 0.005, 0.062, 0.087, 0.001, // f g h i j
        0.004, 0.087, 0.016, 0.038, 0.121, // k l m n o
        0.026, 0.002, 0.115, 0.007, 0.033, // p q r s t
        0.080, 0.007, 0.019, 0.006, 0.010, // u v w x y
        0.001, // z
    ],
    [
        0.133, 0.025, 0.024, 0.032, 0.077, // a b c d e
        0.011, 0.029, 0.004, 0.115, 0.001, // f g h i j
        0.005, 0.048, 0.026, 0.060, 0.105, // k l m n o
        0.025, 0.001, 0.070, 0.035, 0.048, // p q r s t
        0.071, 0.021, 0.011, 0.005, 0.013, // u v w x y
        0.005, // z
    ],
    [
        0.070, 0.010, 0.066, 0.030, 0.137, // a b c d e
        0.015, 0.033, 0.012, 0.068, 0.001, // f g h i j
        0.024, 0.070, 0.029, 0.079, 0.057, // k l m n o
        0.022, 0.000, 0.066, 0.074, 0.060, // p q r s t
        0.035, 0.020, 0.011, 0.001, 0.001, // u v w x y
        0.009, // z
    ],
    [
        0.028, 0.005, 0.013, 0.051, 0.183, // a b c d e
        0.011, 0.018, 0.060, 0.005, 0.000, // f g h i j
        0.049, 0.067, 0.018, 0.056, 0.025, // k l m n o
        0.024, 0.000, 0.092, 0.016, 0.109, // p q r s t
        0.000, 0.000, 0.007, 0.003, 0.157, // u v w x y
        0.002, // z
    ],
];

/// Weight of the positional tables relative to [`LETTER_FREQUENCY`]
pub const POSITION_WEIGHT: f64 = 2.0;

/// Fraction of `words` that contain each letter at least once
///
/// An empty list gives all zeros.
///
/// # Examples
/// ```
/// use quordle_ai::core::Word;
/// use quordle_ai::solver::tables::letter_frequencies;
///
/// let words = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let freq = letter_frequencies(&words);
/// assert_eq!(freq[0], 1.0); // a
/// assert_eq!(freq[2], 0.5); // c
/// ```
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> [f64; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for word in words {
        for letter in word.distinct_letters() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }
    counts.map(|count| fraction(count, words.len()))
}

/// Fraction of `words` with each letter at each position
///
/// Each non-empty list gives positional rows that sum to 1.
#[must_use]
pub fn position_frequencies(words: &[Word]) -> [[f64; ALPHABET_SIZE]; WORD_LENGTH] {
    let mut counts = [[0usize; ALPHABET_SIZE]; WORD_LENGTH];
    for word in words {
        for (row, &letter) in counts.iter_mut().zip(word.chars()) {
            row[usize::from(letter - b'a')] += 1;
        }
    }
    counts.map(|row| row.map(|count| fraction(count, words.len())))
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
