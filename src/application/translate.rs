//! Translate lyrics use case

use thiserror::Error;

use crate::domain::audio::{AudioLocator, AudioMimeType};
use crate::domain::lyrics::segment_lyrics;

use super::ports::{
    AudioFetcher, RetrievalError, StagedAudio, StagingError, StagingStore, Transcriber,
    TranscriptionError, TranslationError, Translator,
};

/// Errors from the translate-lyrics use case
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Audio retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Audio staging failed: {0}")]
    Staging(#[from] StagingError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),
}

impl TranslateError {
    /// Name of the stage the error originated from, for logging
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Retrieval(_) => "fetch",
            Self::Staging(_) => "stage",
            Self::Transcription(_) => "transcribe",
            Self::Translation(_) => "translate",
        }
    }
}

/// Input parameters for the translate-lyrics use case
#[derive(Debug, Clone)]
pub struct TranslateInput {
    /// Locator of the uploaded audio file
    pub locator: AudioLocator,
    /// Source-language hint passed through to transcription
    pub source_language: Option<String>,
    /// Language the lyrics are translated into
    pub target_language: String,
    /// Content hint used for the staged file name and upload metadata
    pub mime_type: AudioMimeType,
}

impl TranslateInput {
    /// Create an input with the default content hint (mp3)
    pub fn new(
        locator: AudioLocator,
        source_language: Option<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            locator,
            source_language,
            target_language: target_language.into(),
            mime_type: AudioMimeType::default(),
        }
    }
}

/// Output from the translate-lyrics use case
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Segmented transcript in the source language
    pub original: String,
    /// Translated lyrics; empty when the service returned no completion
    pub translated: String,
}

/// Audio-to-translated-lyrics pipeline.
///
/// Stages run strictly in order: fetch, stage, transcribe, segment,
/// translate. The first failing stage short-circuits the rest. Once staging
/// has succeeded the staged file is released before the invocation returns,
/// on the success path and on every failure path.
pub struct TranslateLyricsUseCase<F, S, T, L>
where
    F: AudioFetcher,
    S: StagingStore,
    T: Transcriber,
    L: Translator,
{
    fetcher: F,
    staging: S,
    transcriber: T,
    translator: L,
}

impl<F, S, T, L> TranslateLyricsUseCase<F, S, T, L>
where
    F: AudioFetcher,
    S: StagingStore,
    T: Transcriber,
    L: Translator,
{
    /// Create a new use case instance
    pub fn new(fetcher: F, staging: S, transcriber: T, translator: L) -> Self {
        Self {
            fetcher,
            staging,
            transcriber,
            translator,
        }
    }

    /// Execute the pipeline for one invocation
    pub async fn execute(&self, input: TranslateInput) -> Result<PipelineOutput, TranslateError> {
        tracing::debug!(locator = %input.locator, "fetching audio");
        let bytes = self.fetcher.fetch(&input.locator).await?;

        let staged = self.staging.stage(&bytes, input.mime_type).await?;
        tracing::debug!(path = %staged.path().display(), "audio staged");

        let result = self.run_staged(&staged, &input).await;

        // Release runs unconditionally; a failed release is logged but never
        // masks the pipeline outcome
        if let Err(e) = self.staging.release(staged).await {
            tracing::warn!(error = %e, "failed to release staged audio");
        }

        result
    }

    async fn run_staged(
        &self,
        staged: &StagedAudio,
        input: &TranslateInput,
    ) -> Result<PipelineOutput, TranslateError> {
        let transcript = self
            .transcriber
            .transcribe(staged, input.source_language.as_deref())
            .await?;
        tracing::debug!(chars = transcript.text.len(), "transcription complete");

        let original = segment_lyrics(&transcript.text);

        tracing::debug!(target = %input.target_language, "translating lyrics");
        let translation = self
            .translator
            .translate(&original, &input.target_language)
            .await?;

        Ok(PipelineOutput {
            original,
            translated: translation.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::{TranscriptOutput, TranslationResult};

    // Mock implementations for testing

    struct MockFetcher {
        result: Result<Vec<u8>, RetrievalError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AudioFetcher for MockFetcher {
        async fn fetch(&self, _locator: &AudioLocator) -> Result<Vec<u8>, RetrievalError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[derive(Clone, Default)]
    struct MockStaging {
        stage_calls: Arc<AtomicUsize>,
        release_calls: Arc<AtomicUsize>,
        staged_bytes: Arc<Mutex<Vec<u8>>>,
    }

    #[async_trait]
    impl StagingStore for MockStaging {
        async fn stage(
            &self,
            bytes: &[u8],
            mime_type: AudioMimeType,
        ) -> Result<StagedAudio, StagingError> {
            self.stage_calls.fetch_add(1, Ordering::SeqCst);
            *self.staged_bytes.lock().unwrap() = bytes.to_vec();
            Ok(StagedAudio::new(
                PathBuf::from("/tmp/mock-staged.mp3"),
                mime_type,
            ))
        }

        async fn release(&self, _staged: StagedAudio) -> Result<(), StagingError> {
            self.release_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MockTranscriber {
        result: Result<String, TranscriptionError>,
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            _staged: &StagedAudio,
            language_hint: Option<&str>,
        ) -> Result<TranscriptOutput, TranscriptionError> {
            self.result.clone().map(|text| TranscriptOutput {
                text,
                language_hint: language_hint.map(str::to_string),
            })
        }
    }

    struct MockTranslator {
        result: Result<String, TranslationError>,
        seen_input: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl Translator for MockTranslator {
        async fn translate(
            &self,
            lyrics: &str,
            _target_language: &str,
        ) -> Result<TranslationResult, TranslationError> {
            *self.seen_input.lock().unwrap() = Some(lyrics.to_string());
            self.result.clone().map(|text| TranslationResult { text })
        }
    }

    fn input() -> TranslateInput {
        TranslateInput::new(
            AudioLocator::parse("https://example.com/song.mp3").unwrap(),
            Some("en".to_string()),
            "Spanish",
        )
    }

    fn ok_fetcher() -> MockFetcher {
        MockFetcher {
            result: Ok(vec![1, 2, 3]),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[tokio::test]
    async fn execute_returns_segmented_original_and_translation() {
        let staging = MockStaging::default();
        let translator_input = Arc::new(Mutex::new(None));
        let use_case = TranslateLyricsUseCase::new(
            ok_fetcher(),
            staging.clone(),
            MockTranscriber {
                result: Ok("Hello world. How are you?".to_string()),
            },
            MockTranslator {
                result: Ok("Hola mundo.\n¿Cómo estás?\n".to_string()),
                seen_input: Arc::clone(&translator_input),
            },
        );

        let output = use_case.execute(input()).await.unwrap();

        assert_eq!(output.original, "Hello world.\nHow are you?\n");
        assert_eq!(output.translated, "Hola mundo.\n¿Cómo estás?\n");
        // The translator receives the segmented form, not the raw transcript
        assert_eq!(
            translator_input.lock().unwrap().as_deref(),
            Some("Hello world.\nHow are you?\n")
        );
        assert_eq!(staging.release_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_failure_never_stages() {
        let staging = MockStaging::default();
        let use_case = TranslateLyricsUseCase::new(
            MockFetcher {
                result: Err(RetrievalError::UpstreamStatus { status: 404 }),
                calls: Arc::new(AtomicUsize::new(0)),
            },
            staging.clone(),
            MockTranscriber {
                result: Ok(String::new()),
            },
            MockTranslator {
                result: Ok(String::new()),
                seen_input: Arc::new(Mutex::new(None)),
            },
        );

        let err = use_case.execute(input()).await.unwrap_err();

        assert!(matches!(err, TranslateError::Retrieval(_)));
        assert_eq!(staging.stage_calls.load(Ordering::SeqCst), 0);
        assert_eq!(staging.release_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transcription_failure_still_releases_staged_audio() {
        let staging = MockStaging::default();
        let use_case = TranslateLyricsUseCase::new(
            ok_fetcher(),
            staging.clone(),
            MockTranscriber {
                result: Err(TranscriptionError::ApiError("payload rejected".to_string())),
            },
            MockTranslator {
                result: Ok(String::new()),
                seen_input: Arc::new(Mutex::new(None)),
            },
        );

        let err = use_case.execute(input()).await.unwrap_err();

        assert!(matches!(err, TranslateError::Transcription(_)));
        assert_eq!(staging.stage_calls.load(Ordering::SeqCst), 1);
        assert_eq!(staging.release_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn translation_failure_still_releases_staged_audio() {
        let staging = MockStaging::default();
        let use_case = TranslateLyricsUseCase::new(
            ok_fetcher(),
            staging.clone(),
            MockTranscriber {
                result: Ok("La la la.".to_string()),
            },
            MockTranslator {
                result: Err(TranslationError::RateLimited),
                seen_input: Arc::new(Mutex::new(None)),
            },
        );

        let err = use_case.execute(input()).await.unwrap_err();

        assert!(matches!(err, TranslateError::Translation(_)));
        assert_eq!(staging.release_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_translation_is_success() {
        let staging = MockStaging::default();
        let use_case = TranslateLyricsUseCase::new(
            ok_fetcher(),
            staging.clone(),
            MockTranscriber {
                result: Ok("La la la.".to_string()),
            },
            MockTranslator {
                result: Ok(String::new()),
                seen_input: Arc::new(Mutex::new(None)),
            },
        );

        let output = use_case.execute(input()).await.unwrap();

        assert_eq!(output.original, "La la la.\n");
        assert_eq!(output.translated, "");
        assert_eq!(staging.release_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_stage_names() {
        assert_eq!(
            TranslateError::from(RetrievalError::RequestFailed("x".into())).stage(),
            "fetch"
        );
        assert_eq!(
            TranslateError::from(StagingError::WriteFailed("x".into())).stage(),
            "stage"
        );
        assert_eq!(
            TranslateError::from(TranscriptionError::RateLimited).stage(),
            "transcribe"
        );
        assert_eq!(
            TranslateError::from(TranslationError::RateLimited).stage(),
            "translate"
        );
    }
}
