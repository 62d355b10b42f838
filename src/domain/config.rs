//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration;

/// Default model for speech-to-text
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// Default model for lyric translation
pub const DEFAULT_TRANSLATION_MODEL: &str = "mixtral-8x7b-32768";

/// Default bound on each external call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Application configuration.
/// Assembled once at process start and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the external transcription/translation provider
    pub api_key: String,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Speech-to-text model identifier
    pub transcription_model: String,
    /// Text-generation model identifier for translation
    pub translation_model: String,
    /// Upper bound on each outbound call (fetch, transcribe, translate)
    pub request_timeout: Duration,
    /// Directory for staged audio files; system temp dir when None
    pub staging_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a config with the given API key and defaults elsewhere
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            bind_addr: "0.0.0.0:3000".to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            translation_model: DEFAULT_TRANSLATION_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            staging_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = AppConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.transcription_model, "whisper-large-v3");
        assert_eq!(config.translation_model, "mixtral-8x7b-32768");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert!(config.staging_dir.is_none());
    }
}
