//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Voice identifier outside the supported set
    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    /// Audio format the provider cannot produce
    #[error("Unsupported audio format: {0}")]
    UnsupportedAudioFormat(String),

    /// Playback source URI could not be parsed
    #[error("Invalid playback source: {0}")]
    InvalidPlaybackSource(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
