//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access:
//! the root-word candidates and the dictionary of recognized words.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
