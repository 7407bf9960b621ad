//! Background puzzle loader.
//!
//! Word lookups run on the tokio runtime while the UI loop keeps drawing.
//! Each [`PuzzleRequest`] becomes one spawned task; its result comes back over
//! a channel that the UI loop drains without blocking.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::core::PuzzleRequest;
use crate::lexicon::{LexiconProvider, WordSource};

/// Words obtained for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPuzzle {
    pub request: PuzzleRequest,
    pub words: Vec<String>,
}

pub struct PuzzleLoader<S> {
    provider: Arc<LexiconProvider<S>>,
    tx: mpsc::UnboundedSender<LoadedPuzzle>,
    rx: mpsc::UnboundedReceiver<LoadedPuzzle>,
}

impl<S: WordSource + 'static> PuzzleLoader<S> {
    pub fn new(provider: LexiconProvider<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider: Arc::new(provider),
            tx,
            rx,
        }
    }

    /// Start fetching words for `request` on `handle`.
    pub fn spawn(&self, handle: &Handle, request: PuzzleRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        handle.spawn(async move {
            let words = provider
                .words_for(request.theme.name, request.theme.words)
                .await;
            if tx.send(LoadedPuzzle { request, words }).is_err() {
                debug!(request = request.id, "loader closed before lookup finished");
            }
        });
    }

    /// A finished lookup, if one is ready.
    pub fn try_recv(&mut self) -> Option<LoadedPuzzle> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished lookup.
    pub async fn recv(&mut self) -> Option<LoadedPuzzle> {
        self.rx.recv().await
    }
}
