//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that synthesis adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, SynthesisRequest, VoiceInfo};

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SynthesisRequest, TextToSpeech};
///
/// async fn create_voice_response(
///     tts: &impl TextToSpeech,
///     text: &str,
///     api_key: &str,
/// ) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(&SynthesisRequest::new(text, api_key)).await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the input is rejected locally, the service
    /// cannot be reached, or the service answers with anything but audio.
    async fn synthesize(&self, request: &SynthesisRequest<'_>) -> Result<AudioData, SpeechError>;

    /// List available voices
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if listing fails.
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, SpeechError>;

    /// Get the name of the current TTS model
    fn model_name(&self) -> &str;

    /// Get the default voice ID
    fn default_voice(&self) -> &str;
}
