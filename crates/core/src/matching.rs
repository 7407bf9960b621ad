//! Matching module - resolves a candidate string against the target words
//!
//! A selection can be dragged from either end of a word, so a candidate
//! matches a target when it equals the word or the word reversed. Only
//! targets not yet found take part.
//!
//! When two targets could both match one candidate (a word and its exact
//! reversal are both in the list), the first one in target order wins.

use crate::generator::PlacedWord;
use crate::types::CellPos;

/// Result of checking one released selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A target word was found
    Found {
        /// Index into the puzzle's word list
        index: usize,
        word: String,
        points: u32,
        cells: Vec<CellPos>,
        /// This find completed the puzzle
        completed: bool,
    },
    /// Nothing matched
    Incorrect { cells: Vec<CellPos> },
    /// The puzzle is already complete; selections are not checked
    Inactive,
}

impl MatchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }
}

/// Whether `candidate` spells `word` forwards or backwards.
///
/// # Examples
///
/// ```
/// use word_search_core::matching::matches_either_way;
///
/// assert!(matches_either_way("TREE", "TREE"));
/// assert!(matches_either_way("TREE", "EERT"));
/// assert!(!matches_either_way("TREE", "TERE"));
/// ```
pub fn matches_either_way(word: &str, candidate: &str) -> bool {
    if word.len() != candidate.len() {
        return false;
    }
    word == candidate || word.bytes().eq(candidate.bytes().rev())
}

/// Index of the first unfound target matching `candidate`.
pub fn find_target(targets: &[PlacedWord], candidate: &str) -> Option<usize> {
    targets
        .iter()
        .position(|t| !t.found && matches_either_way(&t.word, candidate))
}
