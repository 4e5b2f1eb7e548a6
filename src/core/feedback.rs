//! Per-letter feedback for a guess against one hidden word
//!
//! Feedback is a fixed array of [`FeedbackSymbol`]s, one per letter of the guess.
//!
//! Two evaluators are provided:
//! - [`Feedback::evaluate`]: the single-pass reference rule. A guessed letter is
//!   `Present` whenever it occurs anywhere in the secret, no matter how many
//!   times it was guessed. This is the default everywhere.
//! - [`Feedback::evaluate_strict`]: standard two-pass Wordle scoring with
//!   duplicate-letter accounting, selected through [`FeedbackMode::TwoPass`].

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter is in the word at this position (green)
    Exact,
    /// Letter is in the word, but not at this position (yellow)
    Present,
    /// Letter is not in the word (gray)
    Absent,
}

impl FeedbackSymbol {
    /// Single-letter code: `G`, `Y` or `B`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Colored square used in terminal output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a symbol from a letter code or emoji
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨, and `B`/`b`/`-`/`_`/`.`/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Which evaluation rule produces (and therefore filters) feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    /// Single pass: a letter is `Present` if it occurs anywhere in the secret
    #[default]
    SinglePass,
    /// Two passes: duplicate letters are only marked as often as the secret has them
    TwoPass,
}

/// Feedback for a whole guess against one hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// Every letter exact: the guess is the hidden word
    pub const SOLVED: Self = Self([FeedbackSymbol::Exact; WORD_LENGTH]);

    /// Create feedback from individual symbols
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Evaluate `guess` against `secret` with the single-pass rule
    ///
    /// For each position: `Exact` if the letters match, else `Present` if the
    /// guessed letter occurs anywhere in the secret, else `Absent`.
    ///
    /// # Examples
    /// ```
    /// use quordle_ai::core::{Feedback, Word};
    ///
    /// let secret = Word::new("abcde").unwrap();
    /// let guess = Word::new("edcba").unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&secret, &guess).to_string(), "YYGYY");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];

        for (i, symbol) in symbols.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *symbol = if letter == secret.char_at(i) {
                FeedbackSymbol::Exact
            } else if secret.has_letter(letter) {
                FeedbackSymbol::Present
            } else {
                FeedbackSymbol::Absent
            };
        }

        Self(symbols)
    }

    /// Evaluate `guess` against `secret` with standard two-pass Wordle rules
    ///
    /// 1. First pass: mark exact matches and remove them from the available letters
    /// 2. Second pass: mark present letters while the secret still has unmatched copies
    #[must_use]
    // Allow: index needed to compare guess[i] with secret[i] and set symbols[i]
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate_strict(secret: &Word, guess: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                symbols[i] = FeedbackSymbol::Exact;
            } else {
                available[letter_index(secret.char_at(i))] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if symbols[i] == FeedbackSymbol::Exact {
                continue;
            }
            let remaining = &mut available[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                symbols[i] = FeedbackSymbol::Present;
                *remaining -= 1;
            }
        }

        Self(symbols)
    }

    /// Evaluate with the rule selected by `mode`
    #[must_use]
    pub fn evaluate_with(mode: FeedbackMode, secret: &Word, guess: &Word) -> Self {
        match mode {
            FeedbackMode::SinglePass => Self::evaluate(secret, guess),
            FeedbackMode::TwoPass => Self::evaluate_strict(secret, guess),
        }
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// Whether every letter is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the exact (green) symbols
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(FeedbackSymbol::Exact)
    }

    /// Count the present (yellow) symbols
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(FeedbackSymbol::Present)
    }

    fn count(&self, wanted: FeedbackSymbol) -> usize {
        self.0.iter().filter(|&&symbol| symbol == wanted).count()
    }

    /// Render as a string of colored squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|symbol| symbol.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GYBBG", "gy-_g" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<FeedbackSymbol> = s
            .chars()
            .map(FeedbackSymbol::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        symbols
            .try_into()
            .map(Self)
            .map_err(|_| format!("Feedback must have exactly {WORD_LENGTH} symbols: {s}"))
    }
}
