//! Grid module - the square letter grid
//!
//! Two stages share the same flat, row-major layout:
//!
//! - [`PlacementGrid`]: used while placing words; cells may still be empty.
//! - [`Grid`]: the finished puzzle; every cell holds an uppercase ASCII letter.
//!
//! Coordinates: (row, col) where row 0 is the top row and col 0 the left column.

use crate::rng::RandomSource;
use crate::types::{CellPos, Direction};

#[inline(always)]
fn index(size: usize, pos: CellPos) -> Option<usize> {
    if !pos.in_bounds(size) {
        return None;
    }
    Some((pos.row as usize) * size + (pos.col as usize))
}

/// Grid under construction. `None` marks an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementGrid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl PlacementGrid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position.
    /// Returns None if out of bounds
    pub fn get(&self, pos: CellPos) -> Option<Option<u8>> {
        index(self.size, pos).map(|idx| self.cells[idx])
    }

    /// Check whether `word` fits starting at `start` along `dir`.
    ///
    /// Every letter must land inside the grid on a cell that is empty or already
    /// holds the same letter.
    pub fn can_place(&self, word: &[u8], start: CellPos, dir: Direction) -> bool {
        word.iter().enumerate().all(|(i, &letter)| {
            match self.get(start.step(dir, i as i16)) {
                Some(None) => true,
                Some(Some(existing)) => existing == letter,
                None => false,
            }
        })
    }

    /// Write `word` into the grid.
    /// Returns false (and leaves the grid untouched) if it does not fit
    pub fn place(&mut self, word: &[u8], start: CellPos, dir: Direction) -> bool {
        if !self.can_place(word, start, dir) {
            return false;
        }

        for (i, &letter) in word.iter().enumerate() {
            if let Some(idx) = index(self.size, start.step(dir, i as i16)) {
                self.cells[idx] = Some(letter);
            }
        }

        true
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill every empty cell with a uniformly random letter A-Z and seal the grid.
    pub fn fill<R: RandomSource + ?Sized>(self, rng: &mut R) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| b'A' + rng.next_range(26) as u8))
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }
}

/// The finished letter grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from row strings (tests and fixtures).
    ///
    /// Returns None unless the rows form a square of uppercase ASCII letters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 {
            return None;
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let bytes = row.as_bytes();
            if bytes.len() != size || !bytes.iter().all(u8::is_ascii_uppercase) {
                return None;
            }
            cells.extend_from_slice(bytes);
        }
        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at position, or None if out of bounds
    pub fn get(&self, pos: CellPos) -> Option<u8> {
        index(self.size, pos).map(|idx| self.cells[idx])
    }

    /// Flat row-major letters
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Read the letters under a cell path, in path order.
    ///
    /// Returns None if any cell is off the grid.
    pub fn read_path(&self, cells: &[CellPos]) -> Option<String> {
        cells
            .iter()
            .map(|&pos| self.get(pos).map(char::from))
            .collect()
    }

    /// Read `len` letters starting at `start` along `dir`.
    pub fn word_along(&self, start: CellPos, dir: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| self.get(start.step(dir, i as i16)).map(char::from))
            .collect()
    }
}
