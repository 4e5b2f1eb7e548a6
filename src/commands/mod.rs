//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, AnalyzeError, StrategyScore, analyze_word};
pub use benchmark::{BatchConfig, BatchResult, run_batch};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_words};
pub use stats::{LetterStats, letter_stats};
