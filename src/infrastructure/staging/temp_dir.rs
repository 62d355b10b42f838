//! Temp-directory staging adapter

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{StagedAudio, StagingError, StagingStore};
use crate::domain::audio::AudioMimeType;

/// Stages payloads as uniquely named files in a local directory.
///
/// Each `stage` call generates a fresh UUID-based file name, so concurrent
/// invocations cannot collide or delete each other's payload.
pub struct TempDirStaging {
    dir: PathBuf,
}

impl TempDirStaging {
    /// Stage under the system temp directory
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    /// Stage under a specific directory (must already exist)
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for TempDirStaging {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StagingStore for TempDirStaging {
    async fn stage(
        &self,
        bytes: &[u8],
        mime_type: AudioMimeType,
    ) -> Result<StagedAudio, StagingError> {
        let name = format!("lyric-relay-{}.{}", Uuid::new_v4(), mime_type.extension());
        let path = self.dir.join(name);

        if let Err(e) = tokio::fs::write(&path, bytes).await {
            // No partial file may linger after a failed write
            let _ = tokio::fs::remove_file(&path).await;
            return Err(StagingError::WriteFailed(e.to_string()));
        }

        Ok(StagedAudio::new(path, mime_type))
    }

    async fn release(&self, staged: StagedAudio) -> Result<(), StagingError> {
        match tokio::fs::remove_file(staged.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StagingError::ReleaseFailed(e.to_string())),
        }
    }
}
