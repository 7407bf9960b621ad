//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget libraries and instead renders into a simple framebuffer
//! that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only what changed between frames
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use word_search_core as core;
pub use word_search_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, GridLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
