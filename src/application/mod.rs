//! Application layer - Use cases and port interfaces
//!
//! Contains the core pipeline operation and trait definitions
//! for external system interactions.

pub mod ports;
pub mod translate;

// Re-export use case types
pub use translate::{PipelineOutput, TranslateError, TranslateInput, TranslateLyricsUseCase};
