//! Line-oriented session input

use domain::{DomainError, Voice};

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Text to synthesize
    Speak(String),
    /// Switch the selected voice
    SwitchVoice(Voice),
    /// Print the current status
    Status,
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
    /// Blank line
    Empty,
}

/// Parse a line typed at the session prompt
///
/// Lines starting with `:` are commands; anything else is text.
pub fn parse_line(line: &str) -> Result<SessionInput, DomainError> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(SessionInput::Empty);
    }

    let Some(command) = line.strip_prefix(':') else {
        return Ok(SessionInput::Speak(line.to_string()));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    match name.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(SessionInput::Quit),
        "h" | "help" => Ok(SessionInput::Help),
        "status" => Ok(SessionInput::Status),
        "voice" | "v" => arg.parse().map(SessionInput::SwitchVoice),
        other => Err(DomainError::ValidationError(format!(
            "Unknown command ':{other}'"
        ))),
    }
}

/// Command summary shown by `:help`
pub const HELP: &str = "\
Type text and press Enter to generate speech.
  :voice <id>   switch voice (alloy, echo, fable, onyx, nova, shimmer)
  :status       show the last result
  :help         show this help
  :quit         leave the session";
