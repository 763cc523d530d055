//! Speech request controller - One synthesis attempt per user action
//!
//! Owns the three result slots the presentation layer observes (playback
//! source, error, loading) and drives them through a small state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx audio──▶ Succeeded
//!   │                  │                         │
//!   │ blank credential └──any failure──▶ Failed ◀┘ (next submit re-enters Submitting)
//!   └────────────────────────────────────▶ Failed
//! ```
//!
//! At most one request is in flight. A re-entrant `submit` while busy is
//! rejected without touching any slot.

use std::fmt;
use std::sync::Arc;

use domain::{PlaybackSource, SpeechRequest, SynthesizedAudio};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::ports::{PlaybackStorePort, SpeechSynthesisPort};

/// Shown when the credential field is empty
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please enter your OpenAI API key.";

/// Shown for every remote failure, whatever the cause
pub const SYNTHESIS_FAILED_MESSAGE: &str =
    "An error occurred while generating speech. Please check your API key and try again.";

/// User-facing failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local validation failure, no network call was made
    MissingCredential,
    /// Any remote failure: bad credential, network fault, non-2xx, malformed payload
    SynthesisFailed,
}

impl ErrorKind {
    /// Fixed message for this kind
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            Self::SynthesisFailed => SYNTHESIS_FAILED_MESSAGE,
        }
    }
}

/// Why a `submit` call did not produce audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Credential empty after trimming
    #[error("Please enter your OpenAI API key.")]
    MissingCredential,

    /// The provider call failed
    #[error("An error occurred while generating speech. Please check your API key and try again.")]
    SynthesisFailed,

    /// Another request is still in flight; nothing was changed
    #[error("A speech request is already in progress")]
    Busy,
}

impl SubmitError {
    /// The outcome kind, `None` for a rejected re-entrant call
    #[must_use]
    pub const fn kind(self) -> Option<ErrorKind> {
        match self {
            Self::MissingCredential => Some(ErrorKind::MissingCredential),
            Self::SynthesisFailed => Some(ErrorKind::SynthesisFailed),
            Self::Busy => None,
        }
    }
}

impl From<ErrorKind> for SubmitError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::MissingCredential => Self::MissingCredential,
            ErrorKind::SynthesisFailed => Self::SynthesisFailed,
        }
    }
}

/// Lifecycle state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No attempt yet, or the last result was released
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The last attempt produced audio
    Succeeded,
    /// The last attempt failed
    Failed(ErrorKind),
}

/// Read-only view for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSnapshot {
    /// Current state
    pub state: ControllerState,
    /// Drives the disabled state of the submit action
    pub is_loading: bool,
    /// Feeds the player and the download action
    pub playback_source: Option<PlaybackSource>,
    /// Message for the error banner
    pub error_message: Option<&'static str>,
}

#[derive(Debug, Default)]
struct Slots {
    state: ControllerState,
    playback: Option<PlaybackSource>,
}

impl Slots {
    fn error(&self) -> Option<ErrorKind> {
        match self.state {
            ControllerState::Failed(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Settles the controller as failed if the in-flight future is dropped
///
/// Keeps `is_busy` false on every exit path, including cancellation and
/// panics inside the provider.
struct SettleGuard<'a> {
    slots: &'a Mutex<Slots>,
    settled: bool,
}

impl<'a> SettleGuard<'a> {
    const fn new(slots: &'a Mutex<Slots>) -> Self {
        Self {
            slots,
            settled: false,
        }
    }

    fn succeed(mut self, source: PlaybackSource) {
        let mut slots = self.slots.lock();
        slots.state = ControllerState::Succeeded;
        slots.playback = Some(source);
        self.settled = true;
    }

    fn fail(mut self) {
        let mut slots = self.slots.lock();
        slots.state = ControllerState::Failed(ErrorKind::SynthesisFailed);
        slots.playback = None;
        self.settled = true;
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut slots = self.slots.lock();
            slots.state = ControllerState::Failed(ErrorKind::SynthesisFailed);
            slots.playback = None;
        }
    }
}

/// Orchestrates synthesis requests and owns their results
pub struct SpeechRequestController {
    speech: Arc<dyn SpeechSynthesisPort>,
    playback: Arc<dyn PlaybackStorePort>,
    slots: Mutex<Slots>,
}

impl fmt::Debug for SpeechRequestController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechRequestController")
            .field("slots", &*self.slots.lock())
            .finish_non_exhaustive()
    }
}

impl SpeechRequestController {
    /// Create a controller in the `Idle` state
    pub fn new(speech: Arc<dyn SpeechSynthesisPort>, playback: Arc<dyn PlaybackStorePort>) -> Self {
        Self {
            speech,
            playback,
            slots: Mutex::new(Slots::default()),
        }
    }

    /// Run one synthesis attempt
    ///
    /// Clears the previous error and revokes the previous playback source
    /// before anything else, so a stale result is never shown next to a new
    /// one. The credential is the only precondition checked here; empty text
    /// is left to the provider, which rejects it without a network call.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Busy` if a request is already in flight (no slot changes)
    /// - `SubmitError::MissingCredential` if the credential is blank
    /// - `SubmitError::SynthesisFailed` for any provider failure
    #[instrument(skip(self, input), fields(voice = %input.voice, text_len = input.text.len()))]
    pub async fn submit(&self, input: &SpeechRequest) -> Result<PlaybackSource, SubmitError> {
        let (superseded, outcome) = {
            let mut slots = self.slots.lock();
            if slots.state == ControllerState::Submitting {
                debug!("Rejecting submit while a request is in flight");
                return Err(SubmitError::Busy);
            }

            let superseded = slots.playback.take();
            if input.has_credential() {
                slots.state = ControllerState::Submitting;
                (superseded, None)
            } else {
                slots.state = ControllerState::Failed(ErrorKind::MissingCredential);
                (superseded, Some(SubmitError::MissingCredential))
            }
        };

        if let Some(old) = superseded {
            self.playback.revoke(&old);
            debug!(source = %old, "Revoked superseded playback source");
        }

        if let Some(err) = outcome {
            info!("Submit refused: credential missing");
            return Err(err);
        }

        let guard = SettleGuard::new(&self.slots);

        let result = self
            .speech
            .synthesize(
                input.trimmed_text().to_string(),
                input.voice,
                input.credential.clone(),
            )
            .await;

        match result {
            Ok(audio) => {
                let size = audio.size_bytes();
                let source = self.playback.register(audio);
                guard.succeed(source);
                info!(source = %source, audio_size = size, "Speech synthesized");
                Ok(source)
            },
            Err(e) => {
                guard.fail();
                warn!(error = %e, "Speech synthesis failed");
                Err(SubmitError::SynthesisFailed)
            },
        }
    }

    /// Whether a request is in flight
    pub fn is_busy(&self) -> bool {
        self.slots.lock().state == ControllerState::Submitting
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.slots.lock().state
    }

    /// Playback source of the last successful attempt
    pub fn playback_source(&self) -> Option<PlaybackSource> {
        self.slots.lock().playback
    }

    /// Message of the last failed attempt
    pub fn error_message(&self) -> Option<&'static str> {
        self.slots.lock().error().map(ErrorKind::user_message)
    }

    /// Consistent view of all result slots
    pub fn snapshot(&self) -> ControllerSnapshot {
        let slots = self.slots.lock();
        ControllerSnapshot {
            state: slots.state,
            is_loading: slots.state == ControllerState::Submitting,
            playback_source: slots.playback,
            error_message: slots.error().map(ErrorKind::user_message),
        }
    }

    /// Audio behind the current playback source, for the player and download
    pub fn current_audio(&self) -> Option<Arc<SynthesizedAudio>> {
        let source = self.playback_source()?;
        self.playback.resolve(&source)
    }

    /// Revoke the current playback source and return to `Idle`
    ///
    /// Does nothing while a request is in flight.
    pub fn release(&self) {
        let released = {
            let mut slots = self.slots.lock();
            if slots.state == ControllerState::Submitting {
                return;
            }
            slots.state = ControllerState::Idle;
            slots.playback.take()
        };

        if let Some(source) = released {
            self.playback.revoke(&source);
            debug!(source = %source, "Released playback source");
        }
    }
}

impl Drop for SpeechRequestController {
    fn drop(&mut self) {
        if let Some(source) = self.slots.get_mut().playback.take() {
            self.playback.revoke(&source);
        }
    }
}
