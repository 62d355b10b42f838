//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like object storage and the Groq API.

pub mod fetcher;
pub mod staging;
pub mod transcription;
pub mod translation;

// Re-export adapters
pub use fetcher::HttpAudioFetcher;
pub use staging::TempDirStaging;
pub use transcription::GroqTranscriber;
pub use translation::GroqTranslator;
