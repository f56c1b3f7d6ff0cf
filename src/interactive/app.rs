//! TUI application state and logic

use crate::core::Outcome;
use crate::dictionary::WordSetDictionary;
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub dictionary: WordSetDictionary,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub total_words_found: usize,
    pub best_score: usize,
}

impl App {
    #[must_use]
    pub fn new(game: Game, dictionary: WordSetDictionary) -> Self {
        let mut app = Self {
            game,
            dictionary,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };

        app.add_message(
            "Welcome! Spell words from the root word's letters.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type a word and press Enter. Ctrl-N for a new game.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the current input buffer to the session
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.session_mut().submit(&input, &self.dictionary) {
            Outcome::Accepted(word) => {
                self.stats.total_words_found += 1;
                let score = self.game.session().score();
                if score > self.stats.best_score {
                    self.stats.best_score = score;
                }
                self.add_message(
                    &format!("{} accepted! +{} points", word.text().to_uppercase(), word.len()),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(reason) => {
                self.add_message(
                    &format!("{}: {}", reason.title(), reason.message()),
                    MessageStyle::Error,
                );
            }
            Outcome::Ignored => {}
        }
    }

    /// Start a new session with a fresh root word
    pub fn new_game(&mut self) {
        self.game.start();
        self.stats.games_played += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! Root word: {}",
                self.game.session().root().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c' | 'q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    if c.is_alphabetic() {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
