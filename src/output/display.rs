//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list};
use crate::commands::{SolveResult, TestAllStatistics};
use crate::game::{GameReport, Outcome};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let letter = char::from(step.letter).to_ascii_uppercase();
        let mark = if step.spots.is_empty() {
            "✗".red()
        } else {
            "✓".green()
        };
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            letter.to_string().bold(),
            mark,
            step.board.to_uppercase()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if !step.spots.is_empty() {
                println!("  Positions:  {:?}", step.spots);
            }
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {ratio:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                result.steps.len(),
                result.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} wrong guesses", result.wrong_guesses)
                .red()
                .bold()
        );
    }
}

/// Print the summary of an interactive game
pub fn print_game_report(report: &GameReport) {
    let mut hits: Vec<u8> = Vec::new();
    let mut misses: Vec<u8> = Vec::new();
    for turn in &report.turns {
        if turn.is_hit() {
            hits.push(turn.letter);
        } else {
            misses.push(turn.letter);
        }
    }

    println!("\n{}", "─".repeat(40).cyan());
    let headline = match report.outcome {
        Outcome::GuesserWon => "Word guessed".green().bold(),
        Outcome::RefereeWon => "Guesser hanged".red().bold(),
    };
    println!("{headline}: {}", report.board.to_string().to_uppercase());
    println!("  Hits:   {}", letter_list(&hits));
    println!("  Misses: {}", letter_list(&misses));
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Hanged:              {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    if stats.errored > 0 {
        println!(
            "  Errored:             {}",
            stats.errored.to_string().yellow()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Average wrong:       {:.3}", stats.average_wrong);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Wrong Guess Distribution".bright_cyan().bold());
    let max_count = stats.wrong_distribution.values().copied().max().unwrap_or(1);
    for wrong in 0..stats.max_wrong_guesses {
        let count = stats.wrong_distribution.get(&wrong).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {wrong} wrong: {} {count:4} ({percentage:5.1}%)", bar.green());
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, wrong) in stats.hardest_words.iter().take(5) {
            println!("  {} ({wrong} wrong)", word.to_uppercase().yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n💀 {}", "Hanged On".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  ... and {} more", stats.failed_words.len() - 10);
        }
    }
}
