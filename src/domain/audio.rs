//! Audio value objects

use std::fmt;

use super::error::InvalidLocatorError;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Ogg,
    Mp3,
    Mpeg,
    Wav,
    Webm,
    Mp4,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Mp4 => "mp4",
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Mp3
    }
}

/// Value object identifying a retrievable audio resource.
/// Opaque to the pipeline; always caller-supplied, never generated internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLocator(String);

impl AudioLocator {
    /// Parse a locator from a caller-supplied string.
    /// Rejects empty and whitespace-only input.
    pub fn parse(input: impl Into<String>) -> Result<Self, InvalidLocatorError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(InvalidLocatorError { input });
        }
        Ok(Self(input))
    }

    /// Get the locator string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
