//! Word analysis command
//!
//! Scores a word under every heuristic and measures how well it splits the
//! answer list.

use crate::core::{CandidatePool, FeedbackMode, Word, WordError};
use crate::solver::StrategyType;
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Error type for the analyze command
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid word {text:?}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },
}

/// A word's standing under one scoring strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyScore {
    pub strategy: StrategyType,
    pub score: f64,
    /// 1-based; answers with an equal score share a rank
    pub rank: usize,
}

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub is_answer: bool,
    pub is_allowed: bool,
    pub distinct_letters: u32,
    pub scores: Vec<StrategyScore>,
    pub total_candidates: usize,
    /// Distinct feedbacks the word can produce against the answers
    pub feedback_groups: usize,
    /// Average pool size left after guessing the word, over all answers
    pub expected_remaining: f64,
    pub worst_case_remaining: usize,
}

/// Analyze `word` against the dictionary's answers
///
/// # Errors
///
/// Returns an error if the word is not a valid 5-letter word. Words outside
/// the dictionary are analyzed too; the result says whether they are allowed.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    mode: FeedbackMode,
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word).map_err(|source| AnalyzeError::InvalidWord {
        text: word.to_string(),
        source,
    })?;
    let answers = dictionary.answers();

    let scores = StrategyType::ALL
        .iter()
        .filter_map(|&strategy| {
            let scorer = strategy.scorer()?;
            let score = scorer.score(&word);
            let better = answers
                .iter()
                .filter(|answer| scorer.score(answer) > score)
                .count();
            Some(StrategyScore {
                strategy,
                score,
                rank: better + 1,
            })
        })
        .collect();

    let pool = CandidatePool::from_slice(answers);
    let groups = pool.partition_sizes(&word, mode);
    let total_candidates = pool.len();
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        groups.values().map(|&size| (size * size) as f64).sum::<f64>() / total_candidates as f64
    };

    Ok(AnalysisResult {
        is_answer: dictionary.is_answer(&word),
        is_allowed: dictionary.is_allowed(&word),
        distinct_letters: word.distinct_count(),
        word,
        scores,
        total_candidates,
        feedback_groups: groups.len(),
        expected_remaining,
        worst_case_remaining: groups.values().copied().max().unwrap_or(0),
    })
}
