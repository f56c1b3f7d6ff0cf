//! Word Scramble
//!
//! A terminal word game: a root word is chosen at random and the player
//! spells as many words as possible from its letters. Each accepted word
//! scores its length in points.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Word;
//! use word_scramble::dictionary::WordSetDictionary;
//! use word_scramble::game::GameSession;
//!
//! let dictionary = WordSetDictionary::from_words(["silk", "worm"]);
//! let mut session = GameSession::new(Word::new("silkworm").unwrap());
//!
//! session.submit("silk", &dictionary);
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Session state and lifecycle
pub mod game;

// Dictionary collaborator
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
