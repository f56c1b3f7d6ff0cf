//! Display functions for command results

use crate::commands::CheckResult;
use crate::core::{Outcome, RejectReason};
use colored::Colorize;

/// Print the result of a one-shot validation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Candidate: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.candidate.trim().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Outcome::Accepted(word) => {
            println!(
                "\n{} {}",
                "✅ Accepted!".green().bold(),
                format!("+{} points", word.len()).bright_green()
            );
        }
        Outcome::Rejected(reason) => {
            println!(
                "\n{} {}",
                "❌ Rejected:".red().bold(),
                reason.title().bright_red()
            );
            println!("   {}", reason.message());
        }
        Outcome::Ignored => {
            println!("\n{}", "Nothing submitted (empty input).".bright_black());
        }
    }
    println!();
}

/// Print an acceptance line for interactive play
pub fn print_accepted(word: &str, score: usize) {
    println!(
        "{} {} {}",
        "✅".green(),
        format!("{} accepted!", word.to_uppercase()).green().bold(),
        format!("(score: {score})").bright_black()
    );
}

/// Print a rejection line for interactive play
pub fn print_rejected(reason: RejectReason) {
    println!(
        "{} {} — {}",
        "❌".red(),
        reason.title().red().bold(),
        reason.message()
    );
}
