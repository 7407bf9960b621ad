//! Two-stage word provider
//!
//! The primary source is fallible and asynchronous; the bundled list is total
//! and synchronous. [`LexiconProvider::candidate_words`] composes them so the
//! caller always gets a word list, within the configured timeout.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::LexiconConfig;
use crate::error::LexiconError;
use crate::normalize::normalize_words;
use crate::source::{DatamuseSource, WordSource};
use crate::types::{LOOKUP_MAX_RESULTS, LOOKUP_TIMEOUT_MS, MIN_LOOKUP_WORDS};

#[derive(Debug, Clone)]
pub struct LexiconProvider<S> {
    /// None when the remote lookup is switched off
    primary: Option<S>,
    timeout: Duration,
    max_results: usize,
}

impl LexiconProvider<DatamuseSource> {
    pub fn from_config(config: &LexiconConfig) -> Self {
        let primary = (!config.disabled).then(|| DatamuseSource::new(config.base_url.clone()));
        if primary.is_none() {
            info!("remote lexicon disabled, using bundled words only");
        }
        Self {
            primary,
            timeout: Duration::from_millis(config.timeout_ms),
            max_results: config.max_results,
        }
    }
}

impl<S: WordSource> LexiconProvider<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary: Some(primary),
            timeout: Duration::from_millis(LOOKUP_TIMEOUT_MS),
            max_results: LOOKUP_MAX_RESULTS,
        }
    }

    /// A provider that always serves the fallback list.
    pub fn disabled() -> Self {
        Self {
            primary: None,
            timeout: Duration::from_millis(LOOKUP_TIMEOUT_MS),
            max_results: LOOKUP_MAX_RESULTS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn is_enabled(&self) -> bool {
        self.primary.is_some()
    }

    /// Query the primary source only.
    ///
    /// Succeeds with at least `MIN_LOOKUP_WORDS` normalized words.
    pub async fn lookup(&self, theme: &str, max: usize) -> Result<Vec<String>, LexiconError> {
        let primary = self.primary.as_ref().ok_or(LexiconError::Disabled)?;

        let raw = tokio::time::timeout(self.timeout, primary.lookup(theme, max))
            .await
            .map_err(|_| LexiconError::Timeout(self.timeout))??;

        let words = normalize_words(raw);
        if words.len() < MIN_LOOKUP_WORDS {
            return Err(LexiconError::TooFew {
                found: words.len(),
                needed: MIN_LOOKUP_WORDS,
            });
        }
        Ok(words)
    }

    /// Words for `theme`, falling back to `fallback` on any lookup failure.
    ///
    /// Never fails and never waits longer than the configured timeout.
    #[instrument(skip(self, fallback))]
    pub async fn candidate_words<T: AsRef<str>>(
        &self,
        theme: &str,
        fallback: &[T],
        max: usize,
    ) -> Vec<String> {
        match self.lookup(theme, max).await {
            Ok(words) => {
                debug!(count = words.len(), "using lexicon words");
                words
            }
            Err(LexiconError::Disabled) => fallback_words(fallback),
            Err(err) => {
                warn!(error = %err, "lexicon lookup failed, using bundled words");
                fallback_words(fallback)
            }
        }
    }

    /// [`candidate_words`](Self::candidate_words) with the configured result cap.
    pub async fn words_for<T: AsRef<str>>(&self, theme: &str, fallback: &[T]) -> Vec<String> {
        self.candidate_words(theme, fallback, self.max_results).await
    }
}

fn fallback_words<T: AsRef<str>>(fallback: &[T]) -> Vec<String> {
    fallback.iter().map(|w| w.as_ref().to_string()).collect()
}
