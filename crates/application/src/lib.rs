//! Application layer for VoiceForge
//!
//! Orchestrates one synthesis request per user action through the
//! `SpeechRequestController` and defines the ports the infrastructure
//! layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{PlaybackStorePort, SpeechSynthesisPort};
pub use services::{
    ControllerSnapshot, ControllerState, ErrorKind, MISSING_CREDENTIAL_MESSAGE,
    SYNTHESIS_FAILED_MESSAGE, SpeechRequestController, SubmitError,
};
