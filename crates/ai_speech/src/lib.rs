//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the `TextToSpeech` trait and its OpenAI implementation.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{OpenAISpeechProvider, SpeechConfig, SynthesisRequest, TextToSpeech};
//!
//! let provider = OpenAISpeechProvider::new(SpeechConfig::default())?;
//! let request = SynthesisRequest::new("Hello, world!", api_key).with_voice("nova");
//! let audio = provider.synthesize(&request).await?;
//! std::fs::write("hello.mp3", audio.data())?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::openai::OpenAISpeechProvider;
pub use types::{AudioData, AudioFormat, SynthesisRequest, VoiceGender, VoiceInfo};
