//! Dictionary collaborator
//!
//! The game asks one question of the outside world: is this string a real
//! word? The trait keeps that seam explicit so the core stays testable, and
//! the set-backed implementation covers both the embedded list and custom
//! files.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Default language tag for dictionary lookups
pub const DEFAULT_LANGUAGE: &str = "en";

/// External "is this a real word" collaborator
pub trait Dictionary {
    /// Whether `word` (already normalized to lowercase) is a recognized word
    fn contains(&self, word: &str) -> bool;

    /// Language tag this dictionary answers for
    fn language(&self) -> &str {
        DEFAULT_LANGUAGE
    }
}

/// Hash-set backed dictionary
///
/// Built from the embedded word list or any newline-delimited file via
/// [`crate::wordlists::loader`]. Lookup is a single set probe.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordSetDictionary {
    /// Build a dictionary from string entries
    ///
    /// Entries are lowercased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self {
            words,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Build a dictionary from already-normalized words
    #[must_use]
    pub fn from_word_list(words: &[Word]) -> Self {
        Self::from_words(words.iter().map(Word::text))
    }

    /// Override the language tag (defaults to `"en"`)
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn language(&self) -> &str {
        &self.language
    }
}
