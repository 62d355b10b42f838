//! Domain layer - Core business logic
//!
//! Contains value objects, pure transforms, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod lyrics;

// Re-export common types
pub use audio::{AudioLocator, AudioMimeType};
pub use config::AppConfig;
pub use error::*;
pub use lyrics::segment_lyrics;
