//! LyricRelay - audio-to-translated-lyrics HTTP service
//!
//! This crate accepts a URL to a previously uploaded audio file, transcribes
//! its sung/spoken content through the Groq Whisper API, reformats the
//! transcript into lyric-style lines, and translates it into a target
//! language through the Groq chat completions API while asking the model to
//! preserve the line structure.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the lyric segmentation transform, and errors
//! - **Application**: The pipeline use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP fetcher, temp-dir
//!   staging, Groq transcription and translation clients)
//! - **Server**: axum HTTP boundary, validation, and error mapping

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod server;
