//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use super::staging::StagedAudio;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Failed to read staged audio: {0}")]
    ReadFailed(String),

    #[error("Transcription request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse transcription response: {0}")]
    ParseError(String),

    #[error("Transcription API error: {0}")]
    ApiError(String),
}

/// Raw transcription result
#[derive(Debug, Clone)]
pub struct TranscriptOutput {
    /// Transcript text, trimmed of leading/trailing whitespace
    pub text: String,
    /// The source-language code supplied with the request, advisory only
    pub language_hint: Option<String>,
}

/// Port for speech-to-text transcription of staged audio
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the staged audio to raw text.
    ///
    /// # Arguments
    /// * `staged` - Handle to the staged audio payload
    /// * `language_hint` - Optional source-language code; the service may
    ///   auto-detect when omitted
    async fn transcribe(
        &self,
        staged: &StagedAudio,
        language_hint: Option<&str>,
    ) -> Result<TranscriptOutput, TranscriptionError>;
}
