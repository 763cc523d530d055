//! Domain entities - Request inputs and synthesis results

mod speech_request;
mod synthesized_audio;

pub use speech_request::SpeechRequest;
pub use synthesized_audio::{DOWNLOAD_BASENAME, SynthesizedAudio};
