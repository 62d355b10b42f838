//! Groq Whisper transcriber adapter

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{StagedAudio, Transcriber, TranscriptOutput, TranscriptionError};
use crate::domain::config::DEFAULT_TRANSCRIPTION_MODEL;

/// Groq OpenAI-compatible API base URL
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

// Response types for the transcriptions endpoint

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Whisper-style transcriber backed by the Groq audio API
pub struct GroqTranscriber {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqTranscriber {
    /// Create a new transcriber with the default model
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used to point at test doubles)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }

    /// Pull a human-readable message out of an error response body
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(ApiErrorResponse { error: Some(e) }) => e.message,
            _ => format!("HTTP {}: {}", status, body),
        }
    }

    async fn build_form(
        &self,
        staged: &StagedAudio,
        language_hint: Option<&str>,
    ) -> Result<multipart::Form, TranscriptionError> {
        let bytes = tokio::fs::read(staged.path())
            .await
            .map_err(|e| TranscriptionError::ReadFailed(e.to_string()))?;

        let file = multipart::Part::bytes(bytes)
            .file_name(staged.file_name())
            .mime_str(staged.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let mut form = multipart::Form::new()
            .part("file", file)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        if let Some(lang) = language_hint {
            form = form.text("language", lang.to_string());
        }

        Ok(form)
    }
}

#[async_trait]
impl Transcriber for GroqTranscriber {
    async fn transcribe(
        &self,
        staged: &StagedAudio,
        language_hint: Option<&str>,
    ) -> Result<TranscriptOutput, TranscriptionError> {
        let form = self.build_form(staged, language_hint).await?;

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::ApiError(Self::error_message(
                status, &body,
            )));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        Ok(TranscriptOutput {
            text: parsed.text.trim().to_string(),
            language_hint: language_hint.map(str::to_string),
        })
    }
}
