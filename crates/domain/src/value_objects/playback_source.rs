//! Revocable reference to synthesized audio

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::errors::DomainError;

const SCHEME_PREFIX: &str = "blob:voiceforge/";

/// URI handed to the player and the download action
///
/// Rendered as `blob:voiceforge/<uuid>`. A source only resolves while the
/// playback store still holds it; once revoked it is dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackSource(Uuid);

impl PlaybackSource {
    /// Create a new unique source
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PlaybackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaybackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME_PREFIX}{}", self.0)
    }
}

impl FromStr for PlaybackSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(SCHEME_PREFIX)
            .and_then(|id| Uuid::parse_str(id).ok())
            .map(Self)
            .ok_or_else(|| DomainError::InvalidPlaybackSource(s.to_string()))
    }
}
