//! Application services

mod speech_request_controller;

pub use speech_request_controller::{
    ControllerSnapshot, ControllerState, ErrorKind, MISSING_CREDENTIAL_MESSAGE,
    SYNTHESIS_FAILED_MESSAGE, SpeechRequestController, SubmitError,
};
