//! Shared application state

use std::sync::Arc;

use crate::application::ports::{AudioFetcher, StagingStore, Transcriber, Translator};
use crate::application::TranslateLyricsUseCase;

/// Process-wide state handed to every request handler.
///
/// Holds the pipeline (and through it the external API clients) constructed
/// once at startup and shared read-only across invocations.
pub struct AppState<F, S, T, L>
where
    F: AudioFetcher,
    S: StagingStore,
    T: Transcriber,
    L: Translator,
{
    pipeline: Arc<TranslateLyricsUseCase<F, S, T, L>>,
}

impl<F, S, T, L> AppState<F, S, T, L>
where
    F: AudioFetcher,
    S: StagingStore,
    T: Transcriber,
    L: Translator,
{
    /// Wrap a pipeline for sharing across handlers
    pub fn new(pipeline: TranslateLyricsUseCase<F, S, T, L>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The shared pipeline
    pub fn pipeline(&self) -> &TranslateLyricsUseCase<F, S, T, L> {
        &self.pipeline
    }
}

// Manual impl: deriving Clone would demand Clone on the port types
impl<F, S, T, L> Clone for AppState<F, S, T, L>
where
    F: AudioFetcher,
    S: StagingStore,
    T: Transcriber,
    L: Translator,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
