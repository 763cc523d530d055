//! Domain layer for VoiceForge
//!
//! Contains the request inputs, synthesized audio, playback references and
//! domain errors. This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
