//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] per screen, and turns mouse
//! press/drag/release into the grid's pointer events. Hit-testing (which
//! cell is under the mouse) belongs to the view and is passed in.

pub mod map;
pub mod pointer;

pub use word_search_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
