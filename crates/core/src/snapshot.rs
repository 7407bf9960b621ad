//! Snapshot module - read-only view of a game for rendering
//!
//! Filled by [`Game::snapshot_into`](crate::game::Game::snapshot_into); the
//! buffers are reused from frame to frame.

use crate::types::{CellMark, CellPos, Category, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordStatus {
    pub word: String,
    pub found: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub loading: bool,
    pub category: Option<Category>,
    pub theme: Option<&'static str>,
    pub quote: &'static str,
    pub level: u32,
    pub score: u32,
    pub elapsed_secs: u32,
    pub complete: bool,
    pub grid_size: usize,
    /// Row-major letters; empty when no puzzle is loaded
    pub letters: Vec<u8>,
    /// Row-major cell marks, parallel to `letters`
    pub marks: Vec<Option<CellMark>>,
    pub selection: Vec<CellPos>,
    /// Keyboard cursor, shown only after keyboard use
    pub cursor: Option<CellPos>,
    pub words: Vec<WordStatus>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Welcome;
        self.loading = false;
        self.category = None;
        self.theme = None;
        self.quote = "";
        self.level = 0;
        self.score = 0;
        self.elapsed_secs = 0;
        self.complete = false;
        self.grid_size = 0;
        self.letters.clear();
        self.marks.clear();
        self.selection.clear();
        self.cursor = None;
        self.words.clear();
    }

    pub fn has_puzzle(&self) -> bool {
        !self.letters.is_empty()
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if !pos.in_bounds(self.grid_size) {
            return None;
        }
        Some(pos.row as usize * self.grid_size + pos.col as usize)
    }

    pub fn letter_at(&self, pos: CellPos) -> Option<u8> {
        self.index(pos).and_then(|i| self.letters.get(i).copied())
    }

    pub fn mark_at(&self, pos: CellPos) -> Option<CellMark> {
        self.index(pos).and_then(|i| self.marks.get(i).copied().flatten())
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.selection.contains(&pos)
    }

    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_respect_bounds() {
        let mut s = GameSnapshot {
            grid_size: 2,
            letters: b"ABCD".to_vec(),
            marks: vec![None, Some(CellMark::Found), None, None],
            selection: vec![CellPos::new(1, 0)],
            ..Default::default()
        };
        assert_eq!(s.letter_at(CellPos::new(1, 1)), Some(b'D'));
        assert_eq!(s.letter_at(CellPos::new(2, 0)), None);
        assert_eq!(s.mark_at(CellPos::new(0, 1)), Some(CellMark::Found));
        assert!(s.is_selected(CellPos::new(1, 0)));

        s.clear();
        assert!(!s.has_puzzle());
        assert_eq!(s.letter_at(CellPos::new(0, 0)), None);
    }
}
