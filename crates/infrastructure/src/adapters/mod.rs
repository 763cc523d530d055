//! Adapters implementing application ports and platform capabilities

mod audio_exporter;
mod audio_player;
mod playback_store;
mod speech_adapter;

pub use audio_exporter::{AudioExporter, ExportError};
pub use audio_player::{AudioPlayer, PlayerError};
pub use playback_store::InMemoryPlaybackStore;
pub use speech_adapter::SpeechAdapter;
