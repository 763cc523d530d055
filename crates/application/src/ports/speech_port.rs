//! Speech port - Interface for text-to-speech synthesis

use async_trait::async_trait;
use domain::{Credential, SynthesizedAudio, Voice};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize speech from text
    ///
    /// # Arguments
    /// * `text` - Text to synthesize, already trimmed
    /// * `voice` - Voice to speak with
    /// * `credential` - Bearer token for the provider
    ///
    /// # Returns
    /// The non-empty audio payload
    async fn synthesize(
        &self,
        text: String,
        voice: Voice,
        credential: Credential,
    ) -> Result<SynthesizedAudio, ApplicationError>;
}
