//! Playback store port - Revocable references to synthesized audio

use std::sync::Arc;

use domain::{PlaybackSource, SynthesizedAudio};
#[cfg(test)]
use mockall::automock;

/// Registry handing out revocable playback sources
///
/// Plays the role of a browser's object-URL table: registering audio yields a
/// URI that the player and the download action can resolve until it is
/// revoked.
#[cfg_attr(test, automock)]
pub trait PlaybackStorePort: Send + Sync {
    /// Store the audio and return a fresh source for it
    fn register(&self, audio: SynthesizedAudio) -> PlaybackSource;

    /// Look up the audio behind a source, `None` once revoked
    fn resolve(&self, source: &PlaybackSource) -> Option<Arc<SynthesizedAudio>>;

    /// Release a source; returns whether it was still live
    fn revoke(&self, source: &PlaybackSource) -> bool;

    /// Number of live sources
    fn active_count(&self) -> usize;
}
