//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the speech synthesis provider
///
/// Holds no API key; the key travels with each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// OpenAI API base URL (for custom endpoints)
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Text-to-speech model
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Voice used when a request names none
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Output audio format for TTS
    #[serde(default)]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// TTS speaking speed (0.25 to 4.0)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Longest input the provider accepts, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_tts_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_speed() -> f32 {
    1.0
}

const fn default_max_input_chars() -> usize {
    4096
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            openai_base_url: default_openai_base_url(),
            tts_model: default_tts_model(),
            default_voice: default_voice(),
            output_format: AudioFormat::default(),
            timeout_ms: default_timeout_ms(),
            speed: default_speed(),
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.openai_base_url.trim().is_empty() {
            return Err("Base URL must not be empty".to_string());
        }

        if self.tts_model.trim().is_empty() {
            return Err("TTS model must not be empty".to_string());
        }

        if !(0.25..=4.0).contains(&self.speed) {
            return Err(format!(
                "Speed must be between 0.25 and 4.0, got {}",
                self.speed
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_input_chars == 0 {
            return Err("Max input length must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Speech endpoint URL, tolerant of a trailing slash on the base URL
    pub fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.openai_base_url.trim_end_matches('/'))
    }
}
