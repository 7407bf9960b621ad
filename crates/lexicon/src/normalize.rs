//! Word normalization for lexicon results
//!
//! Raw results may contain phrases, punctuation, or words that are too short
//! or too long to place. Only purely alphabetic ASCII words of
//! `MIN_WORD_LEN..=MAX_WORD_LEN` letters survive, upper-cased, in their
//! original order with later duplicates removed.

use std::collections::HashSet;

use crate::types::{MAX_WORD_LEN, MIN_WORD_LEN};

/// Whether a raw lexicon entry is a placeable word.
pub fn is_placeable(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Filter, upper-case and deduplicate raw lexicon entries.
///
/// # Examples
///
/// ```
/// use word_search_lexicon::normalize_words;
///
/// let words = normalize_words(["tree", "oak", "pine cone", "Tree", "forest"]);
/// assert_eq!(words, vec!["TREE", "FOREST"]);
/// ```
pub fn normalize_words<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter(|w| is_placeable(w.as_ref()))
        .map(|w| w.as_ref().to_ascii_uppercase())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(!is_placeable("OAK"));
        assert!(is_placeable("TREE"));
        assert!(is_placeable("SEASHORE"));
        assert!(!is_placeable("WATERFALL"));
    }

    #[test]
    fn test_rejects_non_letters() {
        for w in ["sea-lion", "rock n", "café", "r2d2", ""] {
            assert!(!is_placeable(w), "{w}");
        }
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let words = normalize_words(vec!["wave", "Tide", "WAVE", "reef", "tide"]);
        assert_eq!(words, vec!["WAVE", "TIDE", "REEF"]);
    }
}
