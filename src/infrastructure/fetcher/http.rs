//! HTTP audio fetcher adapter

use async_trait::async_trait;

use crate::application::ports::{AudioFetcher, RetrievalError};
use crate::domain::audio::AudioLocator;

/// Fetches audio bytes over plain HTTP GET.
///
/// One request per call, no retry. The shared client carries the process-wide
/// timeout, so a stalled transfer surfaces as a `RetrievalError`.
pub struct HttpAudioFetcher {
    client: reqwest::Client,
}

impl HttpAudioFetcher {
    /// Create a fetcher backed by the given client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(&self, locator: &AudioLocator) -> Result<Vec<u8>, RetrievalError> {
        let response = self
            .client
            .get(locator.as_str())
            .send()
            .await
            .map_err(|e| RetrievalError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::RequestFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
