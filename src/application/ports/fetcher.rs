//! Audio retrieval port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioLocator;

/// Retrieval errors
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    #[error("Failed to fetch file. Status: {status}")]
    UpstreamStatus { status: u16 },

    #[error("Audio fetch failed: {0}")]
    RequestFailed(String),
}

/// Port for retrieving raw audio bytes from a locator.
///
/// A single attempt per call; failures propagate immediately with no retry.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Fetch the full payload behind the locator.
    async fn fetch(&self, locator: &AudioLocator) -> Result<Vec<u8>, RetrievalError>;
}
