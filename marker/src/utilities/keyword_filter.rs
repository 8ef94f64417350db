//! Keyword extraction used by the feedback synthesizer.
//!
//! Tokens are produced by lowercasing and splitting on whitespace. Punctuation is
//! kept attached to its token.

use super::ignore_words::IgnoreSet;
use std::collections::BTreeSet;

/// Sorted set of filtered tokens derived from one answer.
pub type KeywordSet = BTreeSet<String>;

/// Lowercases `text`, splits it on whitespace and keeps tokens that are longer than one
/// character and not in `ignore`.
pub fn filter_keywords(text: &str, ignore: &IgnoreSet) -> KeywordSet {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 1 && !ignore.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore() -> IgnoreSet {
        IgnoreSet::from_words(["is", "the", "of", "a"])
    }

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(filter_keywords("", &ignore()).is_empty());
        assert!(filter_keywords("   \n\t ", &ignore()).is_empty());
    }

    #[test]
    fn drops_ignored_and_single_character_tokens() {
        let terms = filter_keywords("Mitochondria is the powerhouse of the cell x", &ignore());
        assert_eq!(terms, set(&["cell", "mitochondria", "powerhouse"]));
    }

    #[test]
    fn ignore_match_happens_after_lowercasing() {
        let terms = filter_keywords("THE Cell IS Alive", &ignore());
        assert_eq!(terms, set(&["alive", "cell"]));
    }

    #[test]
    fn output_is_lowercase_and_at_least_two_chars() {
        let text = "A Quick BROWN fox Jumps over I the LAZY dog";
        for term in filter_keywords(text, &ignore()) {
            assert!(term.chars().count() >= 2);
            assert_eq!(term, term.to_lowercase());
            assert!(!ignore().contains(&term));
        }
    }

    #[test]
    fn filtering_is_idempotent_under_lowercasing() {
        let text = "Photosynthesis Converts LIGHT into Chemical energy";
        assert_eq!(
            filter_keywords(text, &ignore()),
            filter_keywords(&text.to_lowercase(), &ignore())
        );
    }

    #[test]
    fn multibyte_single_characters_are_dropped() {
        let terms = filter_keywords("é ça va", &IgnoreSet::default());
        assert_eq!(terms, set(&["ça", "va"]));
    }

    #[test]
    fn punctuation_stays_attached() {
        let terms = filter_keywords("cell. cell", &IgnoreSet::default());
        assert_eq!(terms, set(&["cell", "cell."]));
    }
}
