//! One-shot validation command
//!
//! Runs the validation pipeline once for a given root and candidate, for
//! scripting and quick experiments.

use crate::core::{Outcome, Word, validate};
use crate::dictionary::Dictionary;

/// Configuration for a single validation
pub struct CheckConfig {
    pub root: String,
    pub candidate: String,
    /// Words to treat as already accepted this session
    pub used: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, candidate: String) -> Self {
        Self {
            root,
            candidate,
            used: Vec::new(),
        }
    }
}

/// Result of a single validation
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    pub outcome: Outcome,
}

impl CheckResult {
    /// Whether the candidate was accepted
    #[must_use]
    pub fn accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted(_))
    }
}

/// Validate one candidate against a root word
///
/// # Errors
///
/// Returns an error if the root word or any entry of `used` is not a valid
/// word (empty, non-ASCII, or non-alphabetic).
pub fn check_word<D: Dictionary + ?Sized>(
    config: CheckConfig,
    dictionary: &D,
) -> Result<CheckResult, String> {
    let root = Word::new(&config.root).map_err(|e| format!("Invalid root word: {e}"))?;

    let used = config
        .used
        .iter()
        .map(|w| Word::new(w).map_err(|e| format!("Invalid used word '{w}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = validate(&config.candidate, &root, &used, dictionary);

    Ok(CheckResult {
        root: config.root,
        candidate: config.candidate,
        outcome,
    })
}
