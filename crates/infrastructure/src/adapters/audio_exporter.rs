//! Download action - writes synthesized audio to disk

use std::path::{Path, PathBuf};

use domain::SynthesizedAudio;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors from saving audio
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to write
    #[error("Audio payload is empty")]
    EmptyAudio,

    /// Filesystem failure
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Target path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Saves audio under its fixed download file name
#[derive(Debug, Clone)]
pub struct AudioExporter {
    output_dir: PathBuf,
}

impl AudioExporter {
    /// Export into `output_dir`, created on first save if missing
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the given audio would be saved at
    fn target_path(&self, audio: &SynthesizedAudio) -> PathBuf {
        self.output_dir.join(audio.download_filename())
    }

    /// Write the audio to `<output_dir>/generated_speech.<ext>`
    ///
    /// An existing file of the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the payload is empty or the write fails.
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    pub async fn save(&self, audio: &SynthesizedAudio) -> Result<PathBuf, ExportError> {
        if audio.is_empty() {
            return Err(ExportError::EmptyAudio);
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ExportError::Io {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.target_path(audio);
        tokio::fs::write(&path, audio.bytes())
            .await
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "Saved synthesized audio");
        Ok(path)
    }
}
