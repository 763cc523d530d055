//! Synthesized audio payload

use crate::value_objects::AudioFormat;

/// Base name of the file offered by the download action
pub const DOWNLOAD_BASENAME: &str = "generated_speech";

/// Raw audio bytes returned by the synthesis provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    bytes: Vec<u8>,
    format: AudioFormat,
}

impl SynthesizedAudio {
    /// Create a new audio payload
    #[must_use]
    pub const fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    /// Get the raw bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the MIME type of the payload
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Payload size in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name used by the download action, e.g. `generated_speech.mp3`
    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{DOWNLOAD_BASENAME}.{}", self.format.extension())
    }
}
