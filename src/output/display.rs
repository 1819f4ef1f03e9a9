//! Display functions for game feedback and command results

use super::formatters::{create_progress_bar, divider};
use crate::commands::{BenchmarkResult, HintResult, ScoreResult};
use crate::commands::benchmark::BUCKET_WIDTH;
use crate::game::Notice;
use colored::Colorize;

/// Print one piece of game feedback
pub fn print_notice(notice: &Notice) {
    match notice {
        Notice::Hand(hand) => {
            println!("Current hand: {}", hand.to_string().bright_yellow().bold());
        }
        Notice::InvalidWord(word) => {
            println!("{}", format!("'{word}' is an invalid word.").red());
        }
        Notice::WordScored { word, score, total } => {
            println!(
                "'{}' earned {} points. Total: {} points",
                word.bright_white().bold(),
                score.to_string().green().bold(),
                total.to_string().bright_cyan()
            );
        }
        Notice::OutOfLetters => println!("{}", "Ran out of letters.".yellow()),
        Notice::HandTotal(total) => {
            println!(
                "{} {} points\n",
                "Total score for this hand:".bright_cyan(),
                total.to_string().bright_yellow().bold()
            );
        }
        Notice::SeriesTotal(total) => {
            println!("{}", "═".repeat(40).cyan());
            println!(
                "{} {} points",
                "Total score over all hands:".bright_cyan().bold(),
                total.to_string().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).cyan());
        }
        Notice::Divider => println!("{}", divider().bright_black()),
    }
}

/// Print a word's score breakdown
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring: {} (hand of {})",
        result.word.bright_yellow().bold(),
        result.hand_length
    );
    println!("{}", "─".repeat(40).cyan());
    println!("   Letter points:  {}", result.breakdown.letter_points);
    println!("   Length bonus:   x{}", result.breakdown.length_bonus);
    println!(
        "   Score:          {}",
        result.breakdown.total.to_string().green().bold()
    );
}

/// Print the best word for a hand
pub fn print_hint_result(result: &HintResult) {
    println!("Hand: {}", result.hand.to_string().bright_yellow().bold());
    match &result.hint {
        Some(hint) => println!(
            "Best word: {} for {} points",
            hint.word.bright_white().bold(),
            hint.score.to_string().green().bold()
        ),
        None => println!("{}", "No playable word in this hand.".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Hands played:   {}", result.total_hands);
    println!(
        "   Average score:  {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!("   Worst hand:     {}", result.min_score.to_string().yellow());
    println!("   Best hand:      {}", result.max_score.to_string().green());
    println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());
    println!("   Hands/second:   {:.1}", result.hands_per_second);

    if result.total_hands == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.total_hands as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>5}-{:<5} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + BUCKET_WIDTH - 1,
            bar.green()
        );
    }
}
