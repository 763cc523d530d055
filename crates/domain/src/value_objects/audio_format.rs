//! Audio encoding of synthesized speech

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoding of a synthesized audio payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 (`audio/mpeg`), the provider default
    #[default]
    Mp3,
    /// Opus in an Ogg container
    Opus,
    /// AAC
    Aac,
    /// FLAC (lossless)
    Flac,
    /// WAV (uncompressed)
    Wav,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Aac => "audio/aac",
            Self::Flac => "audio/flac",
            Self::Wav => "audio/wav",
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
        }
    }

    /// Parse from MIME type
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base = mime.split(';').next().unwrap_or(mime).trim();
        match base {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/opus" | "audio/ogg" => Some(Self::Opus),
            "audio/aac" | "audio/x-aac" => Some(Self::Aac),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            _ => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
