use std::time::Duration;

/// Why the remote lexicon produced no usable word list.
///
/// None of these reach the player: the provider logs them and falls back to
/// the bundled words.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed lexicon response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("only {found} usable words (need {needed})")]
    TooFew { found: usize, needed: usize },

    #[error("lexicon lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("remote lexicon disabled")]
    Disabled,
}
