//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::Outcome;
use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::{print_accepted, print_rejected};
use crate::output::formatters::{length_badge, score_line};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary + ?Sized>(game: &mut Game, dictionary: &D) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the root word's letters.");
    println!("Each letter may be used once per occurrence; words must be at");
    println!(
        "least 3 letters and real dictionary words ({}).\n",
        dictionary.language()
    );
    println!("Commands: 'quit' to exit, 'new' for a new root word, 'score' for standings\n");

    print_root(game);

    loop {
        let input = get_user_input("Your word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_final(game);
                return Ok(());
            }
            "new" | "n" => {
                game.start();
                println!("\n🔄 New game started!\n");
                print_root(game);
                continue;
            }
            "score" | "s" => {
                print_standings(game);
                continue;
            }
            _ => {}
        }

        match game.session_mut().submit(&input, dictionary) {
            Outcome::Accepted(word) => {
                print_accepted(word.text(), game.session().score());
            }
            Outcome::Rejected(reason) => {
                print_rejected(reason);
            }
            Outcome::Ignored => {}
        }
    }
}

fn print_root(game: &Game) {
    println!(
        "Root word: {}\n",
        game.session().root().text().to_uppercase().bright_yellow().bold()
    );
}

fn print_standings(game: &Game) {
    let session = game.session();

    println!();
    if session.used_words().is_empty() {
        println!("{}", "No words found yet.".bright_black());
    } else {
        println!("Words found:");
        for word in session.used_words() {
            println!(
                "  {} {}",
                length_badge(word.len()).bright_black(),
                word.text().to_uppercase()
            );
        }
    }
    println!(
        "{}\n",
        score_line(session.root().text(), session.score()).bright_cyan()
    );
}

fn print_final(game: &Game) {
    let session = game.session();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "  {} {}",
        "Final:".bright_cyan().bold(),
        score_line(session.root().text(), session.score()).bright_white()
    );
    println!(
        "  {} words found",
        session.used_words().len().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!("\n👋 Thanks for playing!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
