//! Core domain types for the word game
//!
//! Pure types and decision functions: normalized words, the
//! letter-consumption check, and the validation pipeline. Nothing here does
//! I/O or holds session state.

mod letters;
mod validate;
mod word;

pub use letters::can_spell;
pub use validate::{MIN_WORD_LEN, Outcome, RejectReason, validate};
pub use word::{Word, WordError};
