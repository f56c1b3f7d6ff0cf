//! Session state
//!
//! A session is one root word plus everything the player has found so far.
//! The validator decides; this type owns the resulting state changes.

use crate::core::{Outcome, Word, validate};
use crate::dictionary::Dictionary;

/// One game session: a root word, the accepted words, and the score
///
/// Invariants maintained by construction:
/// - `used` never contains duplicates and never contains the root
/// - every entry in `used` can be spelled from the root's letters
/// - `score` equals the sum of lengths of all entries in `used`
#[derive(Debug, Clone)]
pub struct GameSession {
    root: Word,
    used: Vec<Word>,
    score: usize,
}

impl GameSession {
    /// Start a fresh session for `root` with no used words and score zero
    #[must_use]
    pub fn new(root: Word) -> Self {
        Self {
            root,
            used: Vec::new(),
            score: 0,
        }
    }

    /// The session's root word
    #[must_use]
    pub fn root(&self) -> &Word {
        &self.root
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[Word] {
        &self.used
    }

    /// Current score: sum of lengths of all accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Submit a candidate word
    ///
    /// Runs the validation pipeline; on acceptance the candidate is inserted
    /// at the front of the used list and its length added to the score.
    /// Rejections and ignored input leave the session unchanged.
    pub fn submit<D: Dictionary + ?Sized>(&mut self, input: &str, dictionary: &D) -> Outcome {
        let outcome = validate(input, &self.root, &self.used, dictionary);

        if let Outcome::Accepted(candidate) = &outcome {
            self.score += candidate.len();
            self.used.insert(0, candidate.clone());
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectReason;
    use crate::dictionary::WordSetDictionary;

    fn session(root: &str) -> GameSession {
        GameSession::new(Word::new(root).unwrap())
    }

    fn dict(words: &[&str]) -> WordSetDictionary {
        WordSetDictionary::from_words(words.iter().copied())
    }

    #[test]
    fn accepted_word_updates_state() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = session.submit("silk", &dictionary);

        assert!(matches!(outcome, Outcome::Accepted(_)));
        assert_eq!(session.used_words().len(), 1);
        assert_eq!(session.used_words()[0].text(), "silk");
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn accepted_words_insert_at_front() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk", "worm", "milk"]);

        session.submit("silk", &dictionary);
        session.submit("worm", &dictionary);
        session.submit("milk", &dictionary);

        let used: Vec<&str> = session.used_words().iter().map(Word::text).collect();
        assert_eq!(used, vec!["milk", "worm", "silk"]);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk"]);

        session.submit("silk", &dictionary);
        let before_used = session.used_words().to_vec();
        let before_score = session.score();

        let outcome = session.submit("silkk", &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::NotPossible));
        assert_eq!(session.used_words(), &before_used[..]);
        assert_eq!(session.score(), before_score);
    }

    #[test]
    fn ignored_input_leaves_state_unchanged() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk"]);

        let outcome = session.submit("   ", &dictionary);
        assert_eq!(outcome, Outcome::Ignored);
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn duplicate_submission_rejected() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk"]);

        session.submit("silk", &dictionary);
        let outcome = session.submit("silk", &dictionary);

        assert_eq!(outcome, Outcome::Rejected(RejectReason::AlreadyUsed));
        assert_eq!(session.used_words().len(), 1);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn root_word_never_accepted() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silkworm"]);

        let outcome = session.submit("silkworm", &dictionary);
        assert_eq!(outcome, Outcome::Rejected(RejectReason::SameAsRoot));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn score_equals_sum_of_used_lengths() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk", "worm", "oil", "skim"]);

        for input in ["silk", "worm", "nope", "oil", "oil", "skim", ""] {
            session.submit(input, &dictionary);

            let expected: usize = session.used_words().iter().map(Word::len).sum();
            assert_eq!(session.score(), expected);
        }

        assert_eq!(session.score(), 4 + 4 + 3 + 4);
    }

    #[test]
    fn no_duplicates_in_used_words() {
        let mut session = session("silkworm");
        let dictionary = dict(&["silk", "worm"]);

        for input in ["silk", "worm", "silk", "worm", "SILK"] {
            session.submit(input, &dictionary);
        }

        let mut seen = std::collections::HashSet::new();
        for word in session.used_words() {
            assert!(seen.insert(word.text()), "duplicate {word} in used words");
        }
        assert_eq!(session.used_words().len(), 2);
    }

    #[test]
    fn accepted_words_are_letter_subsets_of_root() {
        use crate::core::can_spell;

        let mut session = session("silkworm");
        let dictionary = dict(&["silk", "worm", "milk", "skim", "rim"]);

        for input in ["silk", "worm", "milk", "skim", "rim", "wool"] {
            session.submit(input, &dictionary);
        }

        for word in session.used_words() {
            assert!(can_spell(word, session.root()));
        }
    }
}
