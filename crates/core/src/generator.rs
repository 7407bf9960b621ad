//! Generator module - builds a puzzle from a candidate word list
//!
//! Algorithm:
//!
//! 1. Keep usable candidates (uppercase A-Z, 4-8 letters, no longer than the
//!    grid) and drop duplicates.
//! 2. Sample `clamp(pool, 5, 8)` words without replacement (fewer if the pool
//!    is smaller).
//! 3. Place longest words first; each word gets up to 200 random probes of
//!    (direction, row, col). Overlaps are fine when the letters agree.
//! 4. A word that never fits is dropped; the puzzle just has fewer words.
//! 5. Fill the remaining cells with random letters.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::grid::{Grid, PlacementGrid};
use crate::rng::RandomSource;
use crate::types::{
    CellPos, Direction, MAX_WORDS, MAX_WORD_LEN, MIN_WORDS, MIN_WORD_LEN, PLACEMENT_ATTEMPTS,
};

/// A target word and where it was hidden.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    pub word: String,
    pub start: CellPos,
    pub direction: Direction,
    /// Flips false → true once, when the player finds the word.
    pub found: bool,
}

impl PlacedWord {
    pub fn new(word: impl Into<String>, start: CellPos, direction: Direction) -> Self {
        Self {
            word: word.into(),
            start,
            direction,
            found: false,
        }
    }

    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.word.len()).map(move |i| self.start.step(self.direction, i as i16))
    }

    /// Whether `pos` is one of the word's cells.
    pub fn covers(&self, pos: CellPos) -> bool {
        self.cells().any(|c| c == pos)
    }
}

/// A generated grid with its hidden words.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: ArrayVec<PlacedWord, MAX_WORDS>,
}

impl Puzzle {
    /// Build a puzzle from fixed placements, filling the rest from `rng`.
    ///
    /// Returns None if a placement leaves the grid, conflicts with an earlier
    /// one, or there are more than `MAX_WORDS` of them.
    pub fn with_placements<R: RandomSource + ?Sized>(
        grid_size: usize,
        placements: &[(&str, CellPos, Direction)],
        rng: &mut R,
    ) -> Option<Self> {
        let mut grid = PlacementGrid::new(grid_size);
        let mut words = ArrayVec::new();
        for &(word, start, direction) in placements {
            if !grid.place(word.as_bytes(), start, direction) {
                return None;
            }
            words
                .try_push(PlacedWord::new(word, start, direction))
                .ok()?;
        }
        Some(Self {
            grid: grid.fill(rng),
            words,
        })
    }

    /// Check that every placed word reads correctly off the grid.
    pub fn placements_hold(&self) -> bool {
        self.words.iter().all(|w| {
            self.grid.word_along(w.start, w.direction, w.word.len()).as_deref()
                == Some(w.word.as_str())
        })
    }
}

/// How many words a puzzle aims for, given the pool size.
///
/// # Examples
///
/// ```
/// use word_search_core::generator::target_count;
///
/// assert_eq!(target_count(3), 5);
/// assert_eq!(target_count(6), 6);
/// assert_eq!(target_count(12), 8);
/// ```
pub fn target_count(available: usize) -> usize {
    available.clamp(MIN_WORDS, MAX_WORDS)
}

/// True for words the generator can use on a `grid_size` grid.
pub fn is_usable(word: &str, grid_size: usize) -> bool {
    let len = word.len();
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
        && len <= grid_size
        && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Generate a puzzle on a `grid_size` x `grid_size` grid.
///
/// Never fails: unusable candidates are skipped and unplaceable words dropped.
/// With no usable candidates the result is a grid of random letters and no
/// words.
pub fn generate<R, S>(candidates: &[S], grid_size: usize, rng: &mut R) -> Puzzle
where
    R: RandomSource + ?Sized,
    S: AsRef<str>,
{
    let mut pool: Vec<&str> = Vec::with_capacity(candidates.len());
    for word in candidates.iter().map(|w| w.as_ref()) {
        if is_usable(word, grid_size) && !pool.contains(&word) {
            pool.push(word);
        }
    }

    let count = target_count(pool.len()).min(pool.len());
    let mut selected: Vec<&str> = Vec::with_capacity(count);
    while selected.len() < count && !pool.is_empty() {
        let idx = rng.choose_index(pool.len());
        selected.push(pool.remove(idx));
    }

    // Longest first: long words have the fewest valid spots.
    selected.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut grid = PlacementGrid::new(grid_size);
    let mut words = ArrayVec::new();

    for word in selected {
        match place_randomly(&mut grid, word.as_bytes(), rng) {
            Some((start, direction)) => {
                words.push(PlacedWord::new(word, start, direction));
            }
            None => {
                warn!(word, "could not place word; skipping for this puzzle");
            }
        }
    }

    debug!(
        placed = words.len(),
        empty_before_fill = grid.empty_count(),
        "puzzle generated"
    );

    let puzzle = Puzzle {
        grid: grid.fill(rng),
        words,
    };
    debug_assert!(puzzle.placements_hold());
    puzzle
}

/// Probe random (direction, row, col) triples until one fits.
fn place_randomly<R: RandomSource + ?Sized>(
    grid: &mut PlacementGrid,
    word: &[u8],
    rng: &mut R,
) -> Option<(CellPos, Direction)> {
    let size = grid.size() as u32;
    for _ in 0..PLACEMENT_ATTEMPTS {
        let direction = Direction::ALL[rng.next_range(8) as usize];
        let row = rng.next_range(size) as i16;
        let col = rng.next_range(size) as i16;
        let start = CellPos::new(row, col);

        if grid.place(word, start, direction) {
            return Some((start, direction));
        }
    }
    None
}
