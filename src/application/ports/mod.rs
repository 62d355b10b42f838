//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod fetcher;
pub mod staging;
pub mod transcriber;
pub mod translator;

// Re-export common types
pub use fetcher::{AudioFetcher, RetrievalError};
pub use staging::{StagedAudio, StagingError, StagingStore};
pub use transcriber::{Transcriber, TranscriptOutput, TranscriptionError};
pub use translator::{TranslationError, TranslationResult, Translator};
