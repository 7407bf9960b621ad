use crate::types::{LOOKUP_MAX_RESULTS, LOOKUP_TIMEOUT_MS};

pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com";

/// Remote lexicon settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub max_results: usize,
    pub disabled: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: LOOKUP_TIMEOUT_MS,
            max_results: LOOKUP_MAX_RESULTS,
            disabled: false,
        }
    }
}

impl LexiconConfig {
    /// Create from environment variables
    ///
    /// - `WORD_SEARCH_LEXICON_URL`: service root (default Datamuse)
    /// - `WORD_SEARCH_LEXICON_TIMEOUT_MS`: lookup deadline
    /// - `WORD_SEARCH_LEXICON_MAX`: result cap
    /// - `WORD_SEARCH_LEXICON_DISABLED`: "1" or "true" to use bundled words only
    pub fn from_env() -> Self {
        use std::env;

        let base_url = env::var("WORD_SEARCH_LEXICON_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = env::var("WORD_SEARCH_LEXICON_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LOOKUP_TIMEOUT_MS);

        let max_results = env::var("WORD_SEARCH_LEXICON_MAX")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(LOOKUP_MAX_RESULTS);

        let disabled = env::var("WORD_SEARCH_LEXICON_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            base_url,
            timeout_ms,
            max_results,
            disabled,
        }
    }
}
