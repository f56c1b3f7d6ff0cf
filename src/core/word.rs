//! Game word representation
//!
//! A Word stores a normalized (lowercase, trimmed) word used as a root word,
//! a dictionary entry, or an accepted candidate.

use std::fmt;

/// A normalized game word
///
/// Always lowercase ASCII letters with no surrounding whitespace. Length is
/// variable; the minimum-length rule for candidates lives in the validator,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Trims surrounding whitespace and lowercases before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input:
    /// - Is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Silkworm").unwrap();
    /// assert_eq!(word.text(), "silkworm");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("s1lk").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Normalize raw user input into a candidate word
    ///
    /// Empty input after trimming is not an error: submitting nothing is a
    /// silent no-op, so this returns `Ok(None)` for it.
    ///
    /// # Errors
    /// Returns `WordError` for non-empty input that is not purely ASCII
    /// letters.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::normalize("  Silk \n").unwrap().unwrap();
    /// assert_eq!(word.text(), "silk");
    ///
    /// assert!(Word::normalize("   ").unwrap().is_none());
    /// ```
    pub fn normalize(input: &str) -> Result<Option<Self>, WordError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        Self::new(input).map(Some)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word has no letters (never the case for a valid Word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the word's letters as bytes
    #[inline]
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.text.bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
