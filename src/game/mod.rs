//! Game lifecycle
//!
//! [`Game`] owns the root-word list and hands out fresh sessions;
//! [`GameSession`] holds the per-session state. The original presented the
//! missing-word-list case as a hard crash; here it is an explicit startup
//! error.

mod session;

pub use session::GameSession;

use crate::core::Word;
use rand::seq::IndexedRandom;
use std::fmt;

/// Startup errors for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The root-word list contained no usable words
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Root word list contains no usable words"),
        }
    }
}

impl std::error::Error for GameError {}

/// Drives session lifecycle over a loaded root-word list
pub struct Game {
    roots: Vec<Word>,
    session: GameSession,
}

impl Game {
    /// Create a game over `roots` and start the first session
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] if `roots` is empty. Failing to
    /// load the list is a startup precondition failure, not something a
    /// running session can recover from.
    pub fn new(roots: Vec<Word>) -> Result<Self, GameError> {
        let root = pick_root(&roots)?;
        Ok(Self {
            roots,
            session: GameSession::new(root),
        })
    }

    /// Start a new session: score to zero, used words cleared, new random root
    pub fn start(&mut self) {
        // Word list was validated non-empty at construction
        if let Ok(root) = pick_root(&self.roots) {
            self.session = GameSession::new(root);
        }
    }

    /// The current session
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The current session, mutable (submissions go through here)
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Number of root words available
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }
}

fn pick_root(roots: &[Word]) -> Result<Word, GameError> {
    roots
        .choose(&mut rand::rng())
        .cloned()
        .ok_or(GameError::EmptyWordList)
}
