//! Value objects - Immutable objects defined by their attributes

mod audio_format;
mod credential;
mod playback_source;
mod voice;

pub use audio_format::AudioFormat;
pub use credential::Credential;
pub use playback_source::PlaybackSource;
pub use voice::Voice;
