//! Types for speech synthesis
//!
//! Contains data structures for audio data, formats, synthesis requests and voice information.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio formats the TTS endpoint can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format (provider default)
    #[default]
    Mp3,
    /// Opus codec in an Ogg container
    Opus,
    /// AAC format
    Aac,
    /// FLAC format (lossless)
    Flac,
    /// WAV format (uncompressed)
    Wav,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
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

    /// Get the file extension for this audio format
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

    /// Value of the `response_format` request field
    #[must_use]
    pub const fn response_format(&self) -> &'static str {
        self.extension()
    }
}

/// Container for synthesized audio
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// A single synthesis call
///
/// The API key travels with the request rather than living in the provider,
/// so one provider can serve whichever credential the user typed last.
#[derive(Clone, Copy)]
pub struct SynthesisRequest<'a> {
    /// Text to synthesize
    pub text: &'a str,
    /// Voice identifier, provider default when `None`
    pub voice: Option<&'a str>,
    /// Output format, provider default when `None`
    pub format: Option<AudioFormat>,
    /// Bearer token
    pub api_key: &'a str,
}

impl<'a> SynthesisRequest<'a> {
    /// Create a request with default voice and format
    #[must_use]
    pub const fn new(text: &'a str, api_key: &'a str) -> Self {
        Self {
            text,
            voice: None,
            format: None,
            api_key,
        }
    }

    /// Use a specific voice
    #[must_use]
    pub const fn with_voice(mut self, voice: &'a str) -> Self {
        self.voice = Some(voice);
        self
    }

    /// Request a specific output format
    #[must_use]
    pub const fn with_format(mut self, format: AudioFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl fmt::Debug for SynthesisRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesisRequest")
            .field("text_len", &self.text.len())
            .field("voice", &self.voice)
            .field("format", &self.format)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Information about an available voice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Voice identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of the voice
    pub description: Option<String>,
    /// Voice gender (if known)
    pub gender: Option<VoiceGender>,
}

impl VoiceInfo {
    /// Create a new voice info
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            gender: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// Voice gender classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Male voice
    Male,
    /// Female voice
    Female,
    /// Neutral/androgynous voice
    Neutral,
}
