//! Lexicon module - themed word lists with a bundled fallback
//!
//! Words for a puzzle come from a remote "means like" lookup when it is
//! reachable and useful, and from the bundled catalog otherwise. The caller
//! never sees a failure: every error path ends in the static list.
//!
//! # Sources
//!
//! - [`StaticSource`]: the bundled theme lists, total and synchronous
//! - [`DatamuseSource`]: `GET {base}/words?ml={theme}&max={n}`, consuming only
//!   the `word` field of each result
//!
//! # Fallback Rules
//!
//! [`LexiconProvider::candidate_words`] returns the bundled list when the
//! remote lookup is disabled, fails to connect, returns a malformed body,
//! exceeds the timeout, or yields fewer than 5 usable words after
//! [`normalize_words`].
//!
//! # Environment Variables
//!
//! - `WORD_SEARCH_LEXICON_URL`: Service root (default: "https://api.datamuse.com")
//! - `WORD_SEARCH_LEXICON_TIMEOUT_MS`: Lookup deadline (default: 2500)
//! - `WORD_SEARCH_LEXICON_MAX`: Results requested (default: 12)
//! - `WORD_SEARCH_LEXICON_DISABLED`: Set to "1" or "true" to skip the lookup
//!
//! # Example
//!
//! ```
//! use word_search_lexicon::{LexiconProvider, StaticSource};
//!
//! # tokio_test_block(async {
//! let provider = LexiconProvider::<StaticSource>::disabled();
//! let words = provider.candidate_words("Forest", &["TREE", "LEAF"], 12).await;
//! assert_eq!(words, vec!["TREE", "LEAF"]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod source;

pub use word_search_core as core;
pub use word_search_types as types;

pub use config::LexiconConfig;
pub use error::LexiconError;
pub use normalize::normalize_words;
pub use provider::LexiconProvider;
pub use source::{DatamuseSource, StaticSource, WordSource};
