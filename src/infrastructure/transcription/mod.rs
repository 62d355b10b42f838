//! Transcription adapters

mod groq;

pub use groq::GroqTranscriber;
