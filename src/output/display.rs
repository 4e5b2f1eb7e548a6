//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_cell, rank_label};
use crate::commands::{AnalysisResult, BatchResult, LetterStats, SolveResult};
use crate::core::WORD_LENGTH;
use colored::Colorize;

/// Print the result of solving fixed targets
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let targets: Vec<String> = result
        .targets
        .iter()
        .map(|word| word.text().to_uppercase())
        .collect();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", targets.join(" ").bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let cells: Vec<String> = step
            .feedbacks
            .iter()
            .map(|feedback| feedback_cell(feedback.as_ref()))
            .collect();
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            cells.join(" ")
        );

        if verbose {
            let sizes: Vec<String> = step
                .pool_sizes_before
                .iter()
                .zip(&step.pool_sizes_after)
                .map(|(before, after)| format!("{before} → {after}"))
                .collect();
            println!("  Candidates: {}", sizes.join(", "));
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", result.num_guesses())
            .green()
            .bold()
    );
    if verbose && result.targets.len() > 1 {
        for (target, turn) in targets.iter().zip(&result.solved_on) {
            println!("   {target} found on guess {turn}");
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };
    println!("\n   Answer:          {}", yes_no(result.is_answer));
    println!("   Allowed guess:   {}", yes_no(result.is_allowed));
    println!("   Distinct letters: {}", result.distinct_letters);

    println!("\n📊 {}", "Heuristic scores:".bright_cyan().bold());
    for score in &result.scores {
        println!(
            "   {:<22} {:>8.3}   {}",
            score.strategy.name(),
            score.score,
            rank_label(score.rank, result.total_candidates)
        );
    }

    let bar = create_progress_bar(
        result.expected_remaining,
        result.total_candidates as f64,
        30,
    );
    println!(
        "\n📈 Against {} possible answers:",
        result.total_candidates
    );
    println!("   Feedback groups: {}", result.feedback_groups);
    println!(
        "   Expected:        [{}] {}",
        bar.green(),
        format!("{:.1} candidates remain", result.expected_remaining).bright_yellow()
    );
    println!(
        "   Worst case:      {} candidates remain",
        result.worst_case_remaining
    );
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult, win_threshold: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Win rate:         {} (≤ {win_threshold} guesses)",
        format!("{:.1}%", result.win_rate * 100.0).green()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.total_rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &rounds)| (guesses, rounds))
        .collect();
    counts.sort_unstable();

    for (guesses, rounds) in counts {
        let pct = (rounds as f64 / result.total_rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if guesses <= win_threshold {
            bar.green()
        } else {
            bar.red()
        };
        println!("   {guesses:3}: {bar} {rounds:4} ({pct:5.1}%)");
    }
}

/// Print letter statistics of an answer list
pub fn print_letter_stats(stats: &LetterStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words ",
        "LETTER STATISTICS:".bright_cyan().bold(),
        stats.total_words.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Words containing each letter:".bright_cyan().bold());
    for (letter, freq) in stats.top_letters(10) {
        let bar = create_progress_bar(freq, 1.0, 40);
        println!(
            "   {}: {} {:5.1}%",
            letter.to_ascii_uppercase(),
            bar.green(),
            freq * 100.0
        );
    }

    println!("\n📈 {}", "Most common letters by position:".bright_cyan().bold());
    for position in 0..WORD_LENGTH {
        let cells: Vec<String> = stats
            .top_at(position, 5)
            .into_iter()
            .map(|(letter, freq)| {
                format!("{} {:4.1}%", letter.to_ascii_uppercase(), freq * 100.0)
            })
            .collect();
        println!("   {}: {}", position + 1, cells.join("  "));
    }
}
