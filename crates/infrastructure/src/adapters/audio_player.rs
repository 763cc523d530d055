//! Playback through an installed command-line audio player

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Players tried in order when no preference is given
const KNOWN_PLAYERS: [&str; 5] = ["ffplay", "mpv", "mpg123", "afplay", "paplay"];

/// Errors from playing audio
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No usable player binary on `PATH`
    #[error("No audio player found (tried: {0})")]
    NoPlayer(String),

    /// Player could not be started
    #[error("Failed to launch {player}: {source}")]
    Spawn {
        /// Player binary
        player: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Player exited unsuccessfully
    #[error("{player} exited with {status}")]
    Failed {
        /// Player binary
        player: String,
        /// Exit status description
        status: String,
    },
}

/// Plays saved audio files with an external player
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    binary: PathBuf,
}

impl AudioPlayer {
    /// Pick a player, honouring `preference` when it is installed
    ///
    /// A preference containing a path separator is used as-is when the file
    /// exists; a bare name is searched on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::NoPlayer` if neither the preference nor any
    /// known player is found on `PATH`.
    pub fn detect(preference: Option<&str>) -> Result<Self, PlayerError> {
        let path_var = std::env::var_os("PATH").unwrap_or_default();
        Self::detect_in(preference, &path_var)
    }

    /// Like [`detect`](Self::detect), searching the given `PATH` value
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::NoPlayer` if no candidate is found.
    pub fn detect_in(preference: Option<&str>, path_var: &OsString) -> Result<Self, PlayerError> {
        if let Some(explicit) = preference.map(Path::new).filter(|p| p.components().count() > 1) {
            if explicit.is_file() {
                debug!(player = %explicit.display(), "Using configured player path");
                return Ok(Self::with_binary(explicit));
            }
        }

        let candidates = preference.into_iter().chain(KNOWN_PLAYERS);

        for name in candidates {
            if let Some(binary) = find_in_path(name, path_var) {
                debug!(player = %binary.display(), "Selected audio player");
                return Ok(Self { binary });
            }
        }

        let tried: Vec<&str> = preference.into_iter().chain(KNOWN_PLAYERS).collect();
        Err(PlayerError::NoPlayer(tried.join(", ")))
    }

    /// Use an explicit binary without searching
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Binary that will be launched
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Arguments passed before the file path
    fn player_args(&self) -> &'static [&'static str] {
        match self.binary.file_stem().and_then(|s| s.to_str()) {
            Some("ffplay") => &["-autoexit", "-nodisp", "-loglevel", "quiet"],
            Some("mpv") => &["--no-video", "--really-quiet"],
            Some("mpg123") => &["-q"],
            _ => &[],
        }
    }

    /// Play a file and wait for the player to exit
    ///
    /// # Errors
    ///
    /// Returns `PlayerError` if the player cannot be launched or fails.
    #[instrument(skip(self), fields(player = %self.binary.display()))]
    pub async fn play(&self, file: &Path) -> Result<(), PlayerError> {
        let player = self.binary.display().to_string();
        info!(file = %file.display(), "Playing audio");

        let status = Command::new(&self.binary)
            .args(self.player_args())
            .arg(file)
            .status()
            .await
            .map_err(|source| PlayerError::Spawn {
                player: player.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PlayerError::Failed {
                player,
                status: status.to_string(),
            })
        }
    }
}

/// Locate an executable by name in a `PATH`-style list
fn find_in_path(name: &str, path_var: &OsString) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
