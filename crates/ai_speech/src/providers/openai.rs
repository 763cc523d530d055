//! OpenAI Speech Provider
//!
//! Implements `TextToSpeech` using the OpenAI `/audio/speech` endpoint.
//!
//! # Supported Audio Formats
//! - mp3 (default), opus, aac, flac, wav

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat, SynthesisRequest, VoiceGender, VoiceInfo};

/// OpenAI speech provider implementing TTS
#[derive(Debug, Clone)]
pub struct OpenAISpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAISpeechProvider {
    /// Create a new OpenAI speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the active configuration
    pub const fn config(&self) -> &SpeechConfig {
        &self.config
    }

    /// Map a non-success response to an error
    fn classify_failure(&self, status: StatusCode, error_body: &str, voice: &str) -> SpeechError {
        let api_error = serde_json::from_str::<ApiError>(error_body).ok();

        if status == StatusCode::UNAUTHORIZED {
            let message = api_error.map_or_else(|| format!("HTTP {status}"), |e| e.error.message);
            return SpeechError::Unauthorized(message);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return SpeechError::RateLimited;
        }

        if let Some(api_error) = api_error {
            return match api_error.error.code.as_deref() {
                Some("rate_limit_exceeded") => SpeechError::RateLimited,
                Some("model_not_found") => {
                    SpeechError::ModelNotAvailable(self.config.tts_model.clone())
                },
                Some("invalid_voice") => SpeechError::VoiceNotFound(voice.to_string()),
                _ => SpeechError::SynthesisFailed(api_error.error.message),
            };
        }

        SpeechError::SynthesisFailed(format!("HTTP {status}: {error_body}"))
    }
}

/// OpenAI TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

/// OpenAI API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

/// Whether a success response carries something other than audio
fn is_textual_content_type(content_type: &str) -> bool {
    let base = content_type.split(';').next().unwrap_or(content_type).trim();
    base.starts_with("text/") || base == "application/json"
}

#[async_trait]
impl TextToSpeech for OpenAISpeechProvider {
    #[instrument(skip(self, request), fields(text_len = request.text.len(), voice = ?request.voice))]
    async fn synthesize(&self, request: &SynthesisRequest<'_>) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech with OpenAI TTS");

        let api_key = request.api_key.trim();
        if api_key.is_empty() {
            return Err(SpeechError::MissingApiKey);
        }

        if request.text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        let text_chars = request.text.chars().count();
        if text_chars > self.config.max_input_chars {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {text_chars} characters exceeds {} limit",
                self.config.max_input_chars
            )));
        }

        let voice = request.voice.unwrap_or(&self.config.default_voice);
        let format = request.format.unwrap_or(self.config.output_format);

        // mp3 is the endpoint default, so leave it off the wire
        let body = TtsRequest {
            model: &self.config.tts_model,
            input: request.text,
            voice,
            response_format: (format != AudioFormat::Mp3).then_some(format.response_format()),
            speed: if (self.config.speed - 1.0).abs() < f32::EPSILON {
                None
            } else {
                Some(self.config.speed)
            },
        };

        let response = self
            .client
            .post(self.config.speech_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let err = self.classify_failure(status, &error_body, voice);
            warn!(status = %status, error = %err, "OpenAI TTS request rejected");
            return Err(err);
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if is_textual_content_type(content_type) {
                return Err(SpeechError::InvalidResponse(format!(
                    "Expected audio, got {content_type}"
                )));
            }
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Empty audio payload".to_string(),
            ));
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(audio_bytes.to_vec(), format))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError> {
        // OpenAI doesn't have a voices endpoint, return static list
        Ok(vec![
            VoiceInfo::new("alloy", "Alloy")
                .with_description("Neutral and balanced voice")
                .with_gender(VoiceGender::Neutral),
            VoiceInfo::new("echo", "Echo")
                .with_description("Warm and conversational voice")
                .with_gender(VoiceGender::Male),
            VoiceInfo::new("fable", "Fable")
                .with_description("British-accented storyteller voice")
                .with_gender(VoiceGender::Male),
            VoiceInfo::new("onyx", "Onyx")
                .with_description("Deep and authoritative voice")
                .with_gender(VoiceGender::Male),
            VoiceInfo::new("nova", "Nova")
                .with_description("Friendly and upbeat voice")
                .with_gender(VoiceGender::Female),
            VoiceInfo::new("shimmer", "Shimmer")
                .with_description("Clear and expressive voice")
                .with_gender(VoiceGender::Female),
        ])
    }

    fn model_name(&self) -> &str {
        &self.config.tts_model
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }
}
