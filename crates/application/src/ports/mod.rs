//! Ports - Interfaces the application layer depends on

mod playback_port;
mod speech_port;

pub use playback_port::PlaybackStorePort;
pub use speech_port::SpeechSynthesisPort;

#[cfg(test)]
pub use playback_port::MockPlaybackStorePort;
#[cfg(test)]
pub use speech_port::MockSpeechSynthesisPort;
