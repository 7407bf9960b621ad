//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, lexicon lookup, terminal rendering).
//!
//! # Grid Coordinates
//!
//! Cells are addressed as `(row, col)` with row 0 at the top and column 0 at the
//! left. The default puzzle is an 8x8 grid.
//!
//! # Directions
//!
//! Words are placed along one of eight unit vectors. The index order is stable
//! and is part of the placement metadata:
//!
//! | Index | (row, col) | Reads |
//! |-------|------------|-------|
//! | 0 | (-1, -1) | up-left |
//! | 1 | (-1, 0) | up |
//! | 2 | (-1, 1) | up-right |
//! | 3 | (0, -1) | left |
//! | 4 | (0, 1) | right |
//! | 5 | (1, -1) | down-left |
//! | 6 | (1, 0) | down |
//! | 7 | (1, 1) | down-right |
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WORDS` / `MAX_WORDS` | 5 / 8 | Target word count clamp |
//! | `MIN_WORD_LEN` / `MAX_WORD_LEN` | 4 / 8 | Usable word length |
//! | `PLACEMENT_ATTEMPTS` | 200 | Random probes per word |
//! | `POINTS_PER_LETTER` | 15 | Score per letter of a found word |
//! | `FOUND_PULSE_MS` | 500 | Pulse before a found cell settles |
//! | `INCORRECT_FLASH_MS` | 300 | Flash on a rejected selection |
//!
//! # Examples
//!
//! ```
//! use word_search_types::{CellPos, Direction, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_index(1).unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.delta(), (-1, 0));
//!
//! let next = CellPos::new(5, 3).step(dir, 1);
//! assert_eq!(next, CellPos::new(4, 3));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 8);
//! ```

/// Default grid edge length (8x8).
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Smallest grid that can still hold a minimum-length word.
pub const MIN_GRID_SIZE: usize = 4;

/// Largest grid the terminal view is laid out for.
pub const MAX_GRID_SIZE: usize = 16;

/// Lower bound of the target word count.
pub const MIN_WORDS: usize = 5;

/// Upper bound of the target word count.
pub const MAX_WORDS: usize = 8;

/// Shortest usable word.
pub const MIN_WORD_LEN: usize = 4;

/// Longest usable word.
pub const MAX_WORD_LEN: usize = 8;

/// Randomized placement probes per word before it is dropped.
pub const PLACEMENT_ATTEMPTS: u32 = 200;

/// Points awarded per letter of a found word.
pub const POINTS_PER_LETTER: u32 = 15;

/// Duration of the pulse on newly found cells.
pub const FOUND_PULSE_MS: u64 = 500;

/// Duration of the flash on a rejected selection.
pub const INCORRECT_FLASH_MS: u64 = 300;

/// Elapsed-time counter resolution (one second).
pub const TIMER_INTERVAL_MS: u64 = 1000;

/// Fixed UI loop interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u64 = 16;

/// Number of related words requested from the remote lexicon.
pub const LOOKUP_MAX_RESULTS: usize = 12;

/// Upper bound on a remote lexicon lookup before falling back.
pub const LOOKUP_TIMEOUT_MS: u64 = 2500;

/// A lookup yielding fewer usable words than this falls back to the static list.
pub const MIN_LOOKUP_WORDS: usize = 5;

/// A grid coordinate.
///
/// Signed so that stepping off the grid edge is representable; bounds are
/// checked by the grid, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    pub row: i16,
    pub col: i16,
}

impl CellPos {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Move `steps` cells along `dir`.
    pub fn step(self, dir: Direction, steps: i16) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }

    /// Offset by raw deltas.
    pub fn offset(self, dr: i16, dc: i16) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// True when the position lies inside a `size` x `size` grid.
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i16;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }
}

/// The eight placement directions.
///
/// The discriminant is the stable direction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft = 0,
    Up = 1,
    UpRight = 2,
    Left = 3,
    Right = 4,
    DownLeft = 5,
    Down = 6,
    DownRight = 7,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Look up a direction by its stable index (0-7).
    ///
    /// # Examples
    ///
    /// ```
    /// use word_search_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(0), Some(Direction::UpLeft));
    /// assert_eq!(Direction::from_index(7), Some(Direction::DownRight));
    /// assert_eq!(Direction::from_index(8), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// (row delta, col delta)
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }

    /// Direction pointing the opposite way.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_search_types::Direction;
    ///
    /// assert_eq!(Direction::Up.reverse(), Direction::Down);
    /// assert_eq!(Direction::UpRight.reverse(), Direction::DownLeft);
    /// ```
    pub fn reverse(self) -> Self {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// Screen-level game phase.
///
/// `Welcome → CategorySelect → Playing`; a finished puzzle stays in `Playing`
/// with its completion flag set until the player starts another or leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Welcome,
    CategorySelect,
    Playing,
}

/// Word categories bundled with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nature,
    Pop,
    General,
}

impl Category {
    /// Categories in menu order.
    pub const ALL: [Category; 3] = [Category::Nature, Category::Pop, Category::General];

    /// Parse category key (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use word_search_types::Category;
    ///
    /// assert_eq!(Category::from_str("nature"), Some(Category::Nature));
    /// assert_eq!(Category::from_str("POP"), Some(Category::Pop));
    /// assert_eq!(Category::from_str("sports"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nature" => Some(Category::Nature),
            "pop" => Some(Category::Pop),
            "general" => Some(Category::General),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Pop => "pop",
            Category::General => "general",
        }
    }

    /// Human-readable name shown in menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Nature => "Natural World",
            Category::Pop => "Pop Culture",
            Category::General => "General Knowledge",
        }
    }
}

/// Player intents, produced by keyboard or mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the welcome screen for the category menu
    Start,
    /// Start a puzzle in the given category
    SelectCategory(Category),
    /// Start another puzzle in the current category
    NewPuzzle,
    /// Abandon the run and return to the welcome screen
    BackToWelcome,
    /// Drag gesture input
    Pointer(PointerEvent),
    /// Move the keyboard cursor by (row, col)
    CursorMove(i16, i16),
    /// Anchor a keyboard selection at the cursor, or release it
    CursorToggle,
    /// Drop the open keyboard selection without checking it
    CursorCancel,
}

/// Drag gesture events on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer pressed on a cell
    Down(CellPos),
    /// Pointer moved over a cell while pressed
    Move(CellPos),
    /// Pointer released
    Up,
    /// Pointer left the grid area while pressed (treated as a release)
    Leave,
}

/// Presentation effect attached to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMark {
    /// Briefly emphasized right after a word is found
    FoundPulse,
    /// Part of a found word
    Found,
    /// Part of a rejected selection
    Incorrect,
}

/// Observational signals for the presentation layer.
///
/// The core emits these; it never acts on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The highlighted drag path changed
    SelectionChanged(Vec<CellPos>),
    /// A target word was matched
    WordFound { word: String, cells: Vec<CellPos> },
    /// A released selection matched nothing
    WordIncorrect { cells: Vec<CellPos> },
    /// Every target word of the puzzle has been found
    PuzzleComplete,
    /// The running score changed
    ScoreChanged(u32),
    /// Elapsed seconds for the current puzzle
    TimerTick(u32),
    /// A puzzle request went out; new requests are blocked until it lands
    PuzzleLoading,
    /// A new puzzle replaced the previous one
    PuzzleStarted { theme: &'static str, words: usize },
}
