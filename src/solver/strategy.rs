//! Guess selection strategies
//!
//! Defines the Strategy trait and the concrete ranking heuristics.

use super::tables::{
    LETTER_COST, LETTER_FREQUENCY, MAX_LETTER_COST, POSITION_FREQUENCY, POSITION_WEIGHT,
};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for picking the next guess from a candidate pool
///
/// Strategies are stateless. The random number generator is supplied by the
/// caller so a whole round can be replayed from a seed.
pub trait Strategy {
    /// Select a guess from `pool`
    ///
    /// Returns `None` only if the pool is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// A numeric score for a word; higher is a better guess
pub trait WordScorer {
    /// Score a single word
    fn score(&self, word: &Word) -> f64;
}

/// Pick the highest-scoring word; ties go to the earliest word in the pool
fn select_top<'a, K, F>(pool: &'a [Word], score: F) -> Option<&'a Word>
where
    K: PartialOrd,
    F: Fn(&Word) -> K,
{
    let mut best: Option<(&'a Word, K)> = None;
    for word in pool {
        let value = score(word);
        if best.as_ref().is_none_or(|(_, top)| value > *top) {
            best = Some((word, value));
        }
    }
    best.map(|(word, _)| word)
}

/// Order `pool` by descending score, keeping pool order among equal scores
///
/// # Examples
/// ```
/// use quordle_ai::core::Word;
/// use quordle_ai::solver::{LowCostStrategy, rank};
///
/// let pool = vec![Word::new("fuzzy").unwrap(), Word::new("slate").unwrap()];
/// let ranked = rank(&LowCostStrategy, &pool);
///
/// assert_eq!(ranked[0].0.text(), "slate");
/// assert_eq!(ranked.len(), pool.len());
/// ```
pub fn rank<'a, S: WordScorer + ?Sized>(scorer: &S, pool: &'a [Word]) -> Vec<(&'a Word, f64)> {
    let mut ranked: Vec<(&Word, f64)> = pool
        .iter()
        .map(|word| (word, scorer.score(word)))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked
}

/// Uniform random choice over the whole pool
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        pool.choose(rng)
    }
}

/// Prefers words with the most distinct letters
///
/// All words tied at the maximum are equally likely to be picked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniquenessStrategy;

impl WordScorer for UniquenessStrategy {
    fn score(&self, word: &Word) -> f64 {
        f64::from(word.distinct_count())
    }
}

impl Strategy for UniquenessStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let best = pool.iter().map(Word::distinct_count).max()?;
        let tied: Vec<&Word> = pool
            .iter()
            .filter(|word| word.distinct_count() == best)
            .collect();
        tied.choose(rng).copied()
    }
}

/// Prefers words made of cheap (common) Scrabble letters
///
/// Each distinct letter scores `11 - tile value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowCostStrategy;

impl LowCostStrategy {
    /// Integer score of a word
    #[must_use]
    pub fn word_cost_score(word: &Word) -> u32 {
        word.distinct_letters()
            .map(|letter| u32::from(MAX_LETTER_COST - LETTER_COST[usize::from(letter - b'a')]))
            .sum()
    }
}

impl WordScorer for LowCostStrategy {
    fn score(&self, word: &Word) -> f64 {
        f64::from(Self::word_cost_score(word))
    }
}

impl Strategy for LowCostStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        select_top(pool, Self::word_cost_score)
    }
}

/// Prefers words whose distinct letters appear in many answers
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterFrequencyStrategy;

fn letter_frequency_score(word: &Word) -> f64 {
    word.distinct_letters()
        .map(|letter| LETTER_FREQUENCY[usize::from(letter - b'a')])
        .sum()
}

impl WordScorer for LetterFrequencyStrategy {
    fn score(&self, word: &Word) -> f64 {
        letter_frequency_score(word)
    }
}

impl Strategy for LetterFrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        select_top(pool, letter_frequency_score)
    }
}

/// Like [`LetterFrequencyStrategy`], plus a bonus for letters in common positions
///
/// Score = 2 × Σ positional frequency of `word[i]` at `i` + Σ letter frequency
/// of each distinct letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalFrequencyStrategy;

fn positional_frequency_score(word: &Word) -> f64 {
    let positional: f64 = word
        .chars()
        .iter()
        .zip(&POSITION_FREQUENCY)
        .map(|(&letter, table)| table[usize::from(letter - b'a')])
        .sum();
    POSITION_WEIGHT * positional + letter_frequency_score(word)
}

impl WordScorer for PositionalFrequencyStrategy {
    fn score(&self, word: &Word) -> f64 {
        positional_frequency_score(word)
    }
}

impl Strategy for PositionalFrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        select_top(pool, positional_frequency_score)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Uniform random choice
    Random,
    /// Most distinct letters, random among ties
    Uniqueness,
    /// Cheapest Scrabble letters
    LowCost,
    /// Most common letters
    LetterFrequency,
    /// Most common letters in common positions
    #[default]
    PositionalFrequency,
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Random => RandomStrategy.select_guess(pool, rng),
            Self::Uniqueness => UniquenessStrategy.select_guess(pool, rng),
            Self::LowCost => LowCostStrategy.select_guess(pool, rng),
            Self::LetterFrequency => LetterFrequencyStrategy.select_guess(pool, rng),
            Self::PositionalFrequency => PositionalFrequencyStrategy.select_guess(pool, rng),
        }
    }
}

impl StrategyType {
    /// Every strategy, in display order
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::Uniqueness,
        Self::LowCost,
        Self::LetterFrequency,
        Self::PositionalFrequency,
    ];

    /// Create strategy from name string
    ///
    /// Supported names: "random", "uniqueness"/"unique", "low-cost"/"scrabble",
    /// "letter-frequency"/"common-letters",
    /// "positional-frequency"/"positional"/"common-letter-spots".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Some(Self::Random),
            "uniqueness" | "unique" => Some(Self::Uniqueness),
            "low-cost" | "scrabble" => Some(Self::LowCost),
            "letter-frequency" | "common-letters" => Some(Self::LetterFrequency),
            "positional-frequency" | "positional" | "common-letter-spots" => {
                Some(Self::PositionalFrequency)
            }
            _ => None,
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Uniqueness => "uniqueness",
            Self::LowCost => "low-cost",
            Self::LetterFrequency => "letter-frequency",
            Self::PositionalFrequency => "positional-frequency",
        }
    }

    /// The scorer behind this strategy, or `None` for [`StrategyType::Random`]
    #[must_use]
    pub fn scorer(self) -> Option<&'static dyn WordScorer> {
        match self {
            Self::Random => None,
            Self::Uniqueness => Some(&UniquenessStrategy),
            Self::LowCost => Some(&LowCostStrategy),
            Self::LetterFrequency => Some(&LetterFrequencyStrategy),
            Self::PositionalFrequency => Some(&PositionalFrequencyStrategy),
        }
    }

    /// Score a word, or `None` for [`StrategyType::Random`]
    #[must_use]
    pub fn score(self, word: &Word) -> Option<f64> {
        self.scorer().map(|scorer| scorer.score(word))
    }

    /// Rank a pool by this strategy's score, or `None` for [`StrategyType::Random`]
    #[must_use]
    pub fn rank(self, pool: &[Word]) -> Option<Vec<(&Word, f64)>> {
        self.scorer().map(|scorer| rank(scorer, pool))
    }
}
