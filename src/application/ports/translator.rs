//! Translation port interface

use async_trait::async_trait;
use thiserror::Error;

/// Translation errors
#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse translation response: {0}")]
    ParseError(String),

    #[error("Translation API error: {0}")]
    ApiError(String),
}

/// Translated text as returned by the external service.
///
/// Line-break preservation is requested from the model but never enforced;
/// the text may come back with a different structure. An empty string means
/// the service returned no completion content, which is a degenerate success
/// rather than an error.
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub text: String,
}

/// Port for translating line-structured lyrics into a target language
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate the lyrics, preserving line structure on a best-effort basis.
    async fn translate(
        &self,
        lyrics: &str,
        target_language: &str,
    ) -> Result<TranslationResult, TranslationError>;
}
