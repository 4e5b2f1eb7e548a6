//! Formatting utilities for terminal output

use crate::core::Feedback;
use indicatif::{ProgressBar, ProgressStyle};

/// Format a slot's feedback, or a dash row once the slot is solved
#[must_use]
pub fn feedback_cell(feedback: Option<&Feedback>) -> String {
    feedback.map_or_else(|| "-----".to_string(), Feedback::to_emoji)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe a heuristic rank among `total` answers
///
/// A word outside the answer list can rank after every answer.
#[must_use]
pub fn rank_label(rank: usize, total: usize) -> String {
    if rank > total {
        format!("below all {total} answers")
    } else {
        format!("rank {rank} among {total} answers")
    }
}

/// Progress bar for a batch of `rounds` rounds
#[must_use]
pub fn batch_progress_bar(rounds: usize) -> ProgressBar {
    let bar = ProgressBar::new(rounds as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds ({percent}%) {per_sec}",
    ) {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}
