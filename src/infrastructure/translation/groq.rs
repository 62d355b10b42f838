//! Groq chat-completions translator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationError, TranslationResult, Translator};
use crate::domain::config::DEFAULT_TRANSLATION_MODEL;

/// Groq OpenAI-compatible API base URL
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Fixed persona for every translation request
const SYSTEM_PROMPT: &str = "You are a professional song lyric translator. \
    Keep the lyrics structured properly with correct line breaks.";

// Request types for the chat completions endpoint

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

// Response types for the chat completions endpoint

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Lyric translator backed by the Groq chat completions API.
///
/// Line-break preservation is an instruction to the model, not a guarantee;
/// the returned text is passed through as-is.
pub struct GroqTranslator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqTranslator {
    /// Create a new translator with the default model
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_TRANSLATION_MODEL.to_string(),
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
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the request body
    fn build_request(&self, lyrics: &str, target_language: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: format!(
                        "Translate this song into {}, maintaining its structure as lyrics \
                         with proper line breaks:\n\n{}",
                        target_language, lyrics
                    ),
                },
            ],
        }
    }

    /// Extract the first completion's text, if any
    fn extract_text(response: ChatCompletionResponse) -> Option<String> {
        response
            .choices?
            .into_iter()
            .next()?
            .message?
            .content
    }

    /// Pull a human-readable message out of an error response body
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(ApiErrorResponse { error: Some(e) }) => e.message,
            _ => format!("HTTP {}: {}", status, body),
        }
    }
}

#[async_trait]
impl Translator for GroqTranslator {
    async fn translate(
        &self,
        lyrics: &str,
        target_language: &str,
    ) -> Result<TranslationResult, TranslationError> {
        let body = self.build_request(lyrics, target_language);

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranslationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranslationError::ApiError(Self::error_message(
                status, &body,
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::ParseError(e.to_string()))?;

        // A well-formed response with no choices is a degenerate success
        Ok(TranslationResult {
            text: Self::extract_text(parsed).unwrap_or_default(),
        })
    }
}
