//! In-memory playback store

use std::collections::HashMap;
use std::sync::Arc;

use application::ports::PlaybackStorePort;
use domain::{PlaybackSource, SynthesizedAudio};
use parking_lot::RwLock;
use tracing::trace;
use uuid::Uuid;

/// Process-local table of live playback sources
#[derive(Debug, Default)]
pub struct InMemoryPlaybackStore {
    entries: RwLock<HashMap<Uuid, Arc<SynthesizedAudio>>>,
}

impl InMemoryPlaybackStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes held by live sources
    pub fn retained_bytes(&self) -> usize {
        self.entries
            .read()
            .values()
            .map(|audio| audio.size_bytes())
            .sum()
    }
}

impl PlaybackStorePort for InMemoryPlaybackStore {
    fn register(&self, audio: SynthesizedAudio) -> PlaybackSource {
        let source = PlaybackSource::new();
        self.entries
            .write()
            .insert(source.as_uuid(), Arc::new(audio));
        trace!(source = %source, "Registered playback source");
        source
    }

    fn resolve(&self, source: &PlaybackSource) -> Option<Arc<SynthesizedAudio>> {
        self.entries.read().get(&source.as_uuid()).cloned()
    }

    fn revoke(&self, source: &PlaybackSource) -> bool {
        let removed = self.entries.write().remove(&source.as_uuid()).is_some();
        trace!(source = %source, removed, "Revoked playback source");
        removed
    }

    fn active_count(&self) -> usize {
        self.entries.read().len()
    }
}
