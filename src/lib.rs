//! Word search (workspace facade crate).
//!
//! Re-exports the workspace crates as `word_search::{core,input,lexicon,term,types}`
//! and holds the pieces the binary needs around them: environment
//! configuration, logging setup, and the background puzzle loader.

pub mod config;
pub mod loader;
pub mod logging;

pub use word_search_core as core;
pub use word_search_input as input;
pub use word_search_lexicon as lexicon;
pub use word_search_term as term;
pub use word_search_types as types;

pub use config::AppConfig;
pub use loader::{LoadedPuzzle, PuzzleLoader};
