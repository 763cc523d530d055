//! Speech request - the inputs collected by the form

use crate::value_objects::{Credential, Voice};

/// Text, voice and credential for one synthesis attempt
///
/// Fields are freely editable between attempts; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct SpeechRequest {
    /// Content to synthesize
    pub text: String,
    /// Selected voice
    pub voice: Voice,
    /// Bearer token, write-only from the presentation side
    pub credential: Credential,
}

impl SpeechRequest {
    /// Create a request from its parts
    pub fn new(text: impl Into<String>, voice: Voice, credential: impl Into<Credential>) -> Self {
        Self {
            text: text.into(),
            voice,
            credential: credential.into(),
        }
    }

    /// Set the text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the voice
    #[must_use]
    pub const fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    /// Text with surrounding whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Whether the text is empty after trimming
    pub fn has_text(&self) -> bool {
        !self.trimmed_text().is_empty()
    }

    /// Whether a credential was entered
    pub fn has_credential(&self) -> bool {
        !self.credential.is_blank()
    }

    /// Whether the submit action should be enabled
    ///
    /// Both text and credential must be non-empty after trimming.
    pub fn is_submittable(&self) -> bool {
        self.has_text() && self.has_credential()
    }
}
