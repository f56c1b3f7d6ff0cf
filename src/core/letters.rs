//! Letter-consumption check
//!
//! Decides whether a candidate can be spelled from a root word's letters,
//! with each root letter usable at most once per occurrence.

use super::Word;

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Keeps a mutable copy of the root's letters and consumes one occurrence
/// per candidate letter. Fails as soon as a candidate letter has no
/// remaining match.
///
/// # Examples
/// ```
/// use word_scramble::core::{Word, can_spell};
///
/// let root = Word::new("silkworm").unwrap();
/// assert!(can_spell(&Word::new("silk").unwrap(), &root));
/// assert!(!can_spell(&Word::new("silkk").unwrap(), &root)); // only one k
/// ```
#[must_use]
pub fn can_spell(candidate: &Word, root: &Word) -> bool {
    let mut remaining: Vec<u8> = root.letters().collect();

    for letter in candidate.letters() {
        match remaining.iter().position(|&r| r == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn subset_of_root_letters() {
        let root = word("silkworm");
        assert!(can_spell(&word("silk"), &root));
        assert!(can_spell(&word("worm"), &root));
        assert!(can_spell(&word("milk"), &root));
        assert!(can_spell(&word("skim"), &root));
    }

    #[test]
    fn whole_root_spells_itself() {
        let root = word("silkworm");
        assert!(can_spell(&word("silkworm"), &root));
    }

    #[test]
    fn letter_not_in_root() {
        let root = word("silkworm");
        assert!(!can_spell(&word("silt"), &root)); // no t
        assert!(!can_spell(&word("zoo"), &root));
    }

    #[test]
    fn each_letter_consumed_once() {
        let root = word("silkworm");
        // Root has one k; a double k cannot be spelled
        assert!(!can_spell(&word("silkk"), &root));
        // Root has one o; "oo" needs two
        assert!(!can_spell(&word("wool"), &root));
    }

    #[test]
    fn duplicate_root_letters_allow_duplicates() {
        let root = word("notebook");
        assert!(can_spell(&word("boot"), &root)); // two o's available
        assert!(can_spell(&word("note"), &root));
        assert!(!can_spell(&word("tooot"), &root)); // only three o's, one t
    }

    #[test]
    fn single_letter_candidate() {
        let root = word("silkworm");
        assert!(can_spell(&word("s"), &root));
        assert!(!can_spell(&word("z"), &root));
    }
}
