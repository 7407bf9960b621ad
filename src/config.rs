use std::path::PathBuf;

use crate::lexicon::LexiconConfig;
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub grid_size: usize,
    /// Fixed RNG seed; None seeds from the clock
    pub seed: Option<u32>,
    /// Log file; None disables logging
    pub log_path: Option<PathBuf>,
    pub lexicon: LexiconConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
            log_path: None,
            lexicon: LexiconConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `WORD_SEARCH_GRID_SIZE`: grid edge, clamped to 4..=16 (default 8)
    /// - `WORD_SEARCH_SEED`: fixed seed for reproducible puzzles
    /// - `WORD_SEARCH_LOG_PATH`: write logs to this file
    /// - `WORD_SEARCH_LEXICON_*`: see [`LexiconConfig::from_env`]
    pub fn from_env() -> Self {
        use std::env;

        let grid_size = env::var("WORD_SEARCH_GRID_SIZE")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(|n| n.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE))
            .unwrap_or(DEFAULT_GRID_SIZE);

        let seed = env::var("WORD_SEARCH_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let log_path = env::var("WORD_SEARCH_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self {
            grid_size,
            seed,
            log_path,
            lexicon: LexiconConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every variable in one test; the environment is process-wide.
    #[test]
    fn test_from_env() {
        std::env::set_var("WORD_SEARCH_GRID_SIZE", "40");
        std::env::set_var("WORD_SEARCH_SEED", "99");
        std::env::set_var("WORD_SEARCH_LOG_PATH", "  ");
        let config = AppConfig::from_env();
        assert_eq!(config.grid_size, MAX_GRID_SIZE);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_path, None);

        std::env::set_var("WORD_SEARCH_GRID_SIZE", "2");
        std::env::set_var("WORD_SEARCH_SEED", "abc");
        std::env::set_var("WORD_SEARCH_LOG_PATH", "/tmp/word-search.log");
        let config = AppConfig::from_env();
        assert_eq!(config.grid_size, MIN_GRID_SIZE);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/word-search.log")));

        std::env::remove_var("WORD_SEARCH_GRID_SIZE");
        std::env::remove_var("WORD_SEARCH_SEED");
        std::env::remove_var("WORD_SEARCH_LOG_PATH");
        assert_eq!(AppConfig::from_env().grid_size, DEFAULT_GRID_SIZE);
    }
}
