//! The word validation pipeline
//!
//! A pure decision function over the candidate, the root word, and the words
//! already accepted this session. The only external query is the dictionary
//! lookup.

use super::{Word, can_spell};
use crate::dictionary::Dictionary;

/// Minimum accepted candidate length
pub const MIN_WORD_LEN: usize = 3;

/// Why a candidate was rejected
///
/// A closed set; every rejection is recoverable and the session continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate was already accepted this session
    AlreadyUsed,
    /// Candidate is the root word itself
    SameAsRoot,
    /// Candidate cannot be spelled from the root word's letters
    NotPossible,
    /// Candidate is too short or not a dictionary word
    NotReal,
}

impl RejectReason {
    /// Short display title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::SameAsRoot => "Word is the root word",
            Self::NotPossible => "Word not possible",
            Self::NotReal => "Word not recognized",
        }
    }

    /// Longer display message for this rejection
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original",
            Self::SameAsRoot => "Come up with other words",
            Self::NotPossible => "You can't spell that from the root word",
            Self::NotReal => "That isn't a real word",
        }
    }
}

/// Result of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was empty after normalization; nothing to do
    Ignored,
    /// Candidate passed every check
    Accepted(Word),
    /// Candidate failed a check
    Rejected(RejectReason),
}

/// Validate a raw submission against the root word and the used-word list
///
/// Checks run in a fixed order and the first failure wins:
/// empty input (silently ignored), originality, not-the-root, letter subset,
/// then length and dictionary membership.
///
/// Input that is non-empty but not ASCII letters cannot be spelled from any
/// root word, so it is folded into `NotPossible`.
pub fn validate<D: Dictionary + ?Sized>(
    input: &str,
    root: &Word,
    used: &[Word],
    dictionary: &D,
) -> Outcome {
    let Ok(normalized) = Word::normalize(input) else {
        return Outcome::Rejected(RejectReason::NotPossible);
    };
    let Some(candidate) = normalized else {
        return Outcome::Ignored;
    };

    if used.contains(&candidate) {
        return Outcome::Rejected(RejectReason::AlreadyUsed);
    }

    if candidate == *root {
        return Outcome::Rejected(RejectReason::SameAsRoot);
    }

    if !can_spell(&candidate, root) {
        return Outcome::Rejected(RejectReason::NotPossible);
    }

    if candidate.len() < MIN_WORD_LEN || !dictionary.contains(candidate.text()) {
        return Outcome::Rejected(RejectReason::NotReal);
    }

    Outcome::Accepted(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dict(words: &[&str]) -> WordSetDictionary {
        WordSetDictionary::from_words(words.iter().copied())
    }

    #[test]
    fn accepts_valid_candidate() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = validate("silk", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Accepted(word("silk")));
    }

    #[test]
    fn normalizes_before_validating() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = validate("  SILK \n", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Accepted(word("silk")));
    }

    #[test]
    fn empty_input_is_ignored() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);

        assert_eq!(validate("", &root, &[], &dictionary), Outcome::Ignored);
        assert_eq!(validate("   ", &root, &[], &dictionary), Outcome::Ignored);
        assert_eq!(validate("\t\n", &root, &[], &dictionary), Outcome::Ignored);
    }

    #[test]
    fn rejects_already_used() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);
        let used = vec![word("silk")];

        let outcome = validate("silk", &root, &used, &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::AlreadyUsed));
    }

    #[test]
    fn rejects_root_word_itself() {
        let root = word("silkworm");
        // Root is trivially letter-subset-valid and a real word; the
        // not-root check must still fire first
        let dictionary = dict(&["silkworm"]);

        let outcome = validate("silkworm", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::SameAsRoot));
    }

    #[test]
    fn rejects_impossible_letters() {
        let root = word("silkworm");
        let dictionary = dict(&["silkk", "silt"]);

        // Double k: root has only one
        let outcome = validate("silkk", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotPossible));

        // t not in root at all
        let outcome = validate("silt", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotPossible));
    }

    #[test]
    fn rejects_unknown_word() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = validate("wilk", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotReal));
    }

    #[test]
    fn rejects_short_word_even_if_in_dictionary() {
        let root = word("silkworm");
        // "is" is letter-subset-valid and in the dictionary; the length-3
        // floor must still reject it
        let dictionary = dict(&["is"]);

        let outcome = validate("is", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotReal));
    }

    #[test]
    fn rejects_non_letter_input_as_not_possible() {
        let root = word("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = validate("s1lk", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotPossible));
    }

    #[test]
    fn check_order_already_used_wins() {
        let root = word("silkworm");
        let dictionary = dict(&[]);
        // "silkk" is also NotPossible and NotReal; once accepted (here,
        // seeded into used) resubmission must always report AlreadyUsed
        let used = vec![word("silkk")];

        let outcome = validate("silkk", &root, &used, &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::AlreadyUsed));
    }

    #[test]
    fn check_order_not_possible_before_not_real() {
        let root = word("silkworm");
        // "silkk" is not in the dictionary either; subset check fires first
        let dictionary = dict(&[]);

        let outcome = validate("silkk", &root, &[], &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotPossible));
    }

    #[test]
    fn reject_reason_display_strings() {
        assert_eq!(RejectReason::AlreadyUsed.title(), "Word used already");
        assert_eq!(RejectReason::SameAsRoot.message(), "Come up with other words");
        assert_eq!(RejectReason::NotPossible.title(), "Word not possible");
        assert_eq!(RejectReason::NotReal.message(), "That isn't a real word");
    }
}
