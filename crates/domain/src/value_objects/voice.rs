//! Voice selection value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One of the voices offered by the synthesis provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    /// Neutral and balanced
    #[default]
    Alloy,
    /// Warm and conversational
    Echo,
    /// British-accented storyteller
    Fable,
    /// Deep and authoritative
    Onyx,
    /// Friendly and upbeat
    Nova,
    /// Clear and expressive
    Shimmer,
}

impl Voice {
    /// All supported voices, in display order
    pub const ALL: [Self; 6] = [
        Self::Alloy,
        Self::Echo,
        Self::Fable,
        Self::Onyx,
        Self::Nova,
        Self::Shimmer,
    ];

    /// Identifier sent to the provider
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
            Self::Shimmer => "shimmer",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alloy => "Alloy",
            Self::Echo => "Echo",
            Self::Fable => "Fable",
            Self::Onyx => "Onyx",
            Self::Nova => "Nova",
            Self::Shimmer => "Shimmer",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Voice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|voice| voice.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownVoice(s.to_string()))
    }
}
