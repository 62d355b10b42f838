//! Staging port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioMimeType;

/// Staging errors
#[derive(Debug, Clone, Error)]
pub enum StagingError {
    #[error("Failed to write staged audio: {0}")]
    WriteFailed(String),

    #[error("Failed to remove staged audio: {0}")]
    ReleaseFailed(String),
}

/// Handle to a payload staged at a process-local writable location.
///
/// Exclusively owned by the pipeline invocation that created it and valid
/// only until released. The handle is consumed by `release`, so it cannot
/// outlive the staged file.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
    mime_type: AudioMimeType,
}

impl StagedAudio {
    /// Create a handle for a file already written at `path`
    pub fn new(path: PathBuf, mime_type: AudioMimeType) -> Self {
        Self { path, mime_type }
    }

    /// Path of the staged file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// MIME type of the staged payload
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// File name for upload metadata (e.g. `a1b2c3.mp3`)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("audio.{}", self.mime_type.extension()))
    }
}

/// Port for scoped local persistence of an audio payload.
///
/// `stage` either writes the full payload or fails leaving nothing behind.
/// `release` is idempotent and must be called exactly once per successful
/// `stage`, on every exit path of the pipeline. Implementations must give
/// each invocation an isolated file identity so concurrent requests never
/// observe or delete each other's payload.
#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Persist the payload and return a handle to it.
    async fn stage(
        &self,
        bytes: &[u8],
        mime_type: AudioMimeType,
    ) -> Result<StagedAudio, StagingError>;

    /// Delete the staged file. Succeeds if it is already gone.
    async fn release(&self, staged: StagedAudio) -> Result<(), StagingError>;
}
