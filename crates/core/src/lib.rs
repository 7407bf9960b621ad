//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules, session state, and the phase machine.
//! It has **zero dependencies** on terminal, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and word list produce the same puzzle
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: Seedable random source used for theme choice, placement and fill
//! - [`grid`]: Square letter grid, placement and filler
//! - [`generator`]: Picks target words and places them in random directions
//! - [`selection`]: Straight/diagonal line resolution for drag gestures
//! - [`matching`]: Forward/backward matching against unfound targets
//! - [`scoring`]: Word points and time formatting
//! - [`session`]: One puzzle in play: score, timer, completion
//! - [`effects`]: Timed found/incorrect cell marks
//! - [`catalog`]: Bundled category → theme → word lists
//! - [`game`]: Phase machine tying all of the above together
//!
//! # Game Rules
//!
//! - **Placement**: 5-8 words of 4-8 letters, longest first, 200 random probes
//!   each; letters may be shared only when they agree
//! - **Selection**: Horizontal, vertical, or 45° diagonal runs only
//! - **Matching**: A selection matches a word read either way
//! - **Scoring**: 15 points per letter, carried across puzzles of one run
//!
//! # Example
//!
//! ```
//! use word_search_core::Game;
//! use word_search_types::{Category, GameAction, Phase};
//!
//! let mut game = Game::new(12345);
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::SelectCategory(Category::Nature));
//!
//! // Satisfy the request with the bundled word list
//! let request = game.take_puzzle_request().unwrap();
//! game.finish_puzzle(&request, request.theme.words);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game::Game::tick) every frame with elapsed time. It
//! advances the per-second timer and settles cell effects.

pub mod catalog;
pub mod effects;
pub mod game;
pub mod generator;
pub mod grid;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use word_search_types as types;

// Re-export commonly used types for convenience
pub use catalog::{find_theme, themes, Theme, WELCOME_QUOTES};
pub use effects::CellEffects;
pub use game::{Game, PuzzleRequest};
pub use generator::{generate, PlacedWord, Puzzle};
pub use grid::{Grid, PlacementGrid};
pub use matching::MatchOutcome;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{format_time, word_score};
pub use selection::{resolve_line, DragState};
pub use session::PuzzleSession;
pub use snapshot::{GameSnapshot, WordStatus};
