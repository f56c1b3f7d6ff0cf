//! Word Scramble - CLI
//!
//! Terminal word game with TUI and plain CLI modes: spell as many words as
//! you can from a root word's letters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{CheckConfig, check_word, run_simple},
    core::Word,
    dictionary::WordSetDictionary,
    game::Game,
    output::print_check_result,
    wordlists::{DICTIONARY, START_WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from a root word's letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Validate a single candidate against a root word
    Check {
        /// The root word
        root: String,

        /// The candidate word to validate
        word: String,

        /// Words to treat as already accepted (repeatable)
        #[arg(short, long)]
        used: Vec<String>,
    },
}

/// Load the root word list based on the -w flag
fn load_roots(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_scramble::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str) -> Result<WordSetDictionary> {
    use word_scramble::wordlists::loader::load_from_file;

    match dictionary_mode {
        "embedded" => Ok(WordSetDictionary::from_words(DICTIONARY.iter().copied())),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load dictionary {path}"))?;
            Ok(WordSetDictionary::from_word_list(&words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = new_game(&cli.wordlist)?;
            run_play_command(game, dictionary)
        }
        Commands::Simple => {
            let mut game = new_game(&cli.wordlist)?;
            run_simple(&mut game, &dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, word, used } => run_check_command(root, word, used, &dictionary),
    }
}

/// Build a game over the configured root-word list
///
/// An unreadable or empty word list is a startup failure; the game never
/// begins without a root word.
fn new_game(wordlist_mode: &str) -> Result<Game> {
    let roots = load_roots(wordlist_mode)?;
    Game::new(roots).context("Cannot start game")
}

fn run_check_command(
    root: String,
    word: String,
    used: Vec<String>,
    dictionary: &WordSetDictionary,
) -> Result<()> {
    let mut config = CheckConfig::new(root, word);
    config.used = used;

    let result = check_word(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);

    if result.accepted() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn run_play_command(game: Game, dictionary: WordSetDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(game, dictionary);
    run_tui(app)
}
