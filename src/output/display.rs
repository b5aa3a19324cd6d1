//! Display functions for command results

use super::formatters::{create_progress_bar, format_failure, histogram_bar_len};
use crate::commands::RunStatistics;
use crate::solver::{AttemptRecord, Outcome};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print the trace of a single attempt
pub fn print_solve_result(record: &AttemptRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            step.clues.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match record.outcome {
        Outcome::Solved(round) => {
            println!(
                "{}",
                format!("✅ Solved in {round} guesses!").green().bold()
            );
        }
        Outcome::Failed(reason) => {
            println!("{}", format!("❌ Failed: {reason}").red().bold());
        }
    }
}

/// Print the summary of a batch run
pub fn print_run_report(stats: &RunStatistics, max_rounds: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Run Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.accuracy()).green()
    );
    if stats.failed() > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed(),
            format!("({:.1}%)", 100.0 - stats.accuracy()).red()
        );
    }
    println!(
        "  Accuracy:            [{}]",
        create_progress_bar(stats.accuracy(), 100.0, 30).green()
    );
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_rounds())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_words > 0 {
        println!(
            "  Time per word:       {:.1}ms",
            stats.total_time.as_millis() as f64 / stats.total_words as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for round in 1..=max_rounds {
        let count = stats.solved_in(round);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar_len = histogram_bar_len(count, max_count, BAR_WIDTH);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(BAR_WIDTH - bar_len).bright_black()
        );
        println!("  {round} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, rounds) in stats.hardest_words.iter().take(5) {
            println!("  {} ({rounds} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for failure in &stats.failures {
            println!("  {}", format_failure(failure));
        }
    }

    println!("\n{}", "═".repeat(70));
}
