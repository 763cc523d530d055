//! Speech adapter - Implements SpeechSynthesisPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{
    AudioData, AudioFormat as AiAudioFormat, OpenAISpeechProvider, SpeechConfig, SpeechError,
    SynthesisRequest, TextToSpeech,
};
use application::error::ApplicationError;
use application::ports::SpeechSynthesisPort;
use async_trait::async_trait;
use domain::{AudioFormat, Credential, SynthesizedAudio, Voice};
use tracing::{debug, instrument};

/// Adapter for speech synthesis using ai_speech crate
pub struct SpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
    output_format: AiAudioFormat,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("model", &self.provider.model_name())
            .field("output_format", &self.output_format)
            .finish_non_exhaustive()
    }
}

impl SpeechAdapter {
    /// Create a new speech adapter backed by the OpenAI provider
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let output_format = config.output_format;
        let provider = OpenAISpeechProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self::with_provider(Arc::new(provider), output_format))
    }

    /// Create an adapter around any TTS provider
    pub fn with_provider(provider: Arc<dyn TextToSpeech>, output_format: AiAudioFormat) -> Self {
        Self {
            provider,
            output_format,
        }
    }

    /// Convert ai_speech AudioFormat to domain AudioFormat
    const fn ai_to_domain_format(format: AiAudioFormat) -> AudioFormat {
        match format {
            AiAudioFormat::Mp3 => AudioFormat::Mp3,
            AiAudioFormat::Opus => AudioFormat::Opus,
            AiAudioFormat::Aac => AudioFormat::Aac,
            AiAudioFormat::Flac => AudioFormat::Flac,
            AiAudioFormat::Wav => AudioFormat::Wav,
        }
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::MissingApiKey => {
                ApplicationError::NotAuthorized("API key is required".to_string())
            },
            SpeechError::Unauthorized(e) => ApplicationError::NotAuthorized(e),
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            SpeechError::SynthesisFailed(e) => {
                ApplicationError::ExternalService(format!("Synthesis failed: {e}"))
            },
            SpeechError::InvalidResponse(e) => {
                ApplicationError::ExternalService(format!("Invalid response: {e}"))
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Speech service timeout after {ms}ms"))
            },
            SpeechError::VoiceNotFound(v) => {
                ApplicationError::ExternalService(format!("Voice not found: {v}"))
            },
            SpeechError::ModelNotAvailable(m) => {
                ApplicationError::Configuration(format!("Model not available: {m}"))
            },
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for SpeechAdapter {
    #[instrument(skip(self, text, credential), fields(text_len = text.len(), voice = %voice))]
    async fn synthesize(
        &self,
        text: String,
        voice: Voice,
        credential: Credential,
    ) -> Result<SynthesizedAudio, ApplicationError> {
        let request = SynthesisRequest::new(&text, credential.expose_trimmed())
            .with_voice(voice.id())
            .with_format(self.output_format);

        let audio: AudioData = self
            .provider
            .synthesize(&request)
            .await
            .map_err(Self::map_error)?;

        debug!(audio_size = audio.size_bytes(), "Synthesis complete");

        let format = Self::ai_to_domain_format(audio.format());
        Ok(SynthesizedAudio::new(audio.into_data(), format))
    }
}
