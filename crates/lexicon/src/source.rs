//! Word sources
//!
//! A [`WordSource`] answers "words related to this theme". The static source
//! never fails; the Datamuse source goes over HTTP and may fail in every way
//! a network call can.

use std::future::Future;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::find_theme;
use crate::error::LexiconError;

/// Something that can list words related to a theme.
pub trait WordSource: Send + Sync {
    /// Up to `max` raw entries related to `theme`, unfiltered.
    fn lookup(
        &self,
        theme: &str,
        max: usize,
    ) -> impl Future<Output = Result<Vec<String>, LexiconError>> + Send;
}

/// The bundled theme word lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl StaticSource {
    /// Bundled words for `theme`, verbatim; empty for an unknown theme.
    pub fn words(theme: &str) -> Vec<String> {
        find_theme(theme)
            .map(|t| t.words.iter().map(|w| w.to_string()).collect())
            .unwrap_or_default()
    }
}

impl WordSource for StaticSource {
    async fn lookup(&self, theme: &str, max: usize) -> Result<Vec<String>, LexiconError> {
        let mut words = Self::words(theme);
        words.truncate(max);
        Ok(words)
    }
}

/// One entry of a Datamuse `/words` response. Only `word` is consumed.
#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
}

/// Parse a Datamuse `/words` response body into raw words.
///
/// # Examples
///
/// ```
/// use word_search_lexicon::source::parse_datamuse;
///
/// let body = br#"[{"word":"woodland","score":1234},{"word":"pine"}]"#;
/// assert_eq!(parse_datamuse(body).unwrap(), vec!["woodland", "pine"]);
/// ```
pub fn parse_datamuse(body: &[u8]) -> Result<Vec<String>, LexiconError> {
    let entries: Vec<DatamuseEntry> = serde_json::from_slice(body)?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}

/// The Datamuse "means like" lookup.
#[derive(Debug, Clone)]
pub struct DatamuseSource {
    base_url: String,
    client: reqwest::Client,
}

impl DatamuseSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn words_url(&self) -> String {
        format!("{}/words", self.base_url.trim_end_matches('/'))
    }
}

impl WordSource for DatamuseSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn lookup(&self, theme: &str, max: usize) -> Result<Vec<String>, LexiconError> {
        let max = max.to_string();
        let body = self
            .client
            .get(self.words_url())
            .query(&[("ml", theme), ("max", max.as_str())])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let words = parse_datamuse(&body)?;
        debug!(count = words.len(), "lexicon response");
        Ok(words)
    }
}
