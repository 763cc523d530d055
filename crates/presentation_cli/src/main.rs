//! VoiceForge CLI
//!
//! Turns text into speech with the OpenAI speech endpoint, saves the result
//! and optionally plays it.

#![allow(clippy::print_stdout)]

mod session;

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ai_speech::{OpenAISpeechProvider, TextToSpeech};
use application::{ControllerSnapshot, ControllerState, SpeechRequestController, SubmitError};
use clap::{Parser, Subcommand};
use domain::{SpeechRequest, Voice};
use infrastructure::{
    AppConfig, AudioExporter, AudioPlayer, InMemoryPlaybackStore, PlayerError, SpeechAdapter,
    init_logging,
};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::session::{HELP, SessionInput, parse_line};

/// VoiceForge CLI
#[derive(Parser)]
#[command(name = "voiceforge")]
#[command(author, version, about = "Text-to-speech from the command line", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by `speak` and `session`
#[derive(clap::Args, Debug, Clone)]
struct RequestArgs {
    /// Voice to use (alloy, echo, fable, onyx, nova, shimmer)
    #[arg(long)]
    voice: Option<Voice>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Directory for the generated audio file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate speech for a piece of text
    ///
    /// Example: voiceforge speak "Hello world" --voice nova --play
    Speak {
        /// Text to synthesize
        text: String,

        #[command(flatten)]
        request: RequestArgs,

        /// Play the audio after saving it
        #[arg(long)]
        play: bool,
    },

    /// Interactive session reusing one set of inputs
    Session {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// List available voices
    Voices,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Pick the voice: flag first, then the configured default
fn resolve_voice(flag: Option<Voice>, config: &AppConfig) -> anyhow::Result<Voice> {
    match flag {
        Some(voice) => Ok(voice),
        None => Ok(config.speech.default_voice.parse()?),
    }
}

/// One-line status for a controller snapshot
fn render_snapshot(snapshot: &ControllerSnapshot) -> String {
    if snapshot.is_loading {
        return "⏳ Generating speech...".to_string();
    }

    if let Some(message) = snapshot.error_message {
        return format!("❌ {message}");
    }

    match (snapshot.state, snapshot.playback_source) {
        (ControllerState::Succeeded, Some(source)) => format!("✅ Audio ready: {source}"),
        _ => "💤 Nothing generated yet".to_string(),
    }
}

/// Why a request produced no audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum Refusal {
    /// Text empty after trimming; nothing was submitted
    #[error("Please enter some text to convert to speech.")]
    EmptyText,

    /// The controller rejected or failed the request
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Empty text disables the submit action, so it never reaches the controller
fn check_text(request: &SpeechRequest) -> Result<(), Refusal> {
    if request.has_text() {
        Ok(())
    } else {
        Err(Refusal::EmptyText)
    }
}

fn build_controller(
    config: &AppConfig,
) -> anyhow::Result<(SpeechRequestController, Arc<InMemoryPlaybackStore>)> {
    let adapter = SpeechAdapter::new(config.speech.clone())?;
    let store = Arc::new(InMemoryPlaybackStore::new());
    let controller = SpeechRequestController::new(Arc::new(adapter), store.clone());
    Ok((controller, store))
}

/// Submit one request and save the result
async fn generate(
    controller: &SpeechRequestController,
    exporter: &AudioExporter,
    request: &SpeechRequest,
) -> anyhow::Result<Result<PathBuf, Refusal>> {
    if let Err(refusal) = check_text(request) {
        return Ok(Err(refusal));
    }

    if let Err(err) = controller.submit(request).await {
        return Ok(Err(err.into()));
    }

    let Some(audio) = controller.current_audio() else {
        return Ok(Err(SubmitError::SynthesisFailed.into()));
    };

    let path = exporter.save(&audio).await?;
    debug!(path = %path.display(), bytes = audio.size_bytes(), "Saved audio");

    Ok(Ok(path))
}

/// Find a player and play a saved file
async fn play_saved(preference: Option<&str>, path: &Path) -> Result<(), PlayerError> {
    let player = AudioPlayer::detect(preference)?;
    println!("   🔈 Playing with {}", player.binary().display());
    player.play(path).await
}

async fn run_session(
    config: &AppConfig,
    controller: &SpeechRequestController,
    store: &InMemoryPlaybackStore,
    exporter: &AudioExporter,
    mut request: SpeechRequest,
) -> anyhow::Result<()> {
    let player = AudioPlayer::detect(config.player.as_deref()).ok();

    println!("🎙️  VoiceForge session (voice: {})", request.voice.label());
    println!("   📁 Saving to {}", exporter.output_dir().display());
    if let Some(player) = &player {
        println!("   🔈 Player: {}", player.binary().display());
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Ok(SessionInput::Quit) => break,
            Ok(SessionInput::Empty) => {},
            Ok(SessionInput::Help) => println!("{HELP}"),
            Ok(SessionInput::Status) => {
                println!("{}", render_snapshot(&controller.snapshot()));
                println!("   📦 {} bytes held", store.retained_bytes());
            },
            Ok(SessionInput::SwitchVoice(voice)) => {
                request = request.with_voice(voice);
                println!("🔊 Voice: {}", voice.label());
            },
            Ok(SessionInput::Speak(text)) => {
                request = request.with_text(text);
                println!("⏳ Generating speech...");

                match generate(controller, exporter, &request).await {
                    Ok(Ok(path)) => {
                        println!("✅ Saved {}", path.display());
                        if let Some(player) = &player {
                            if let Err(e) = player.play(&path).await {
                                println!("⚠️  {e}");
                            }
                        }
                    },
                    Ok(Err(refusal)) => println!("❌ {refusal}"),
                    Err(e) => println!("⚠️  {e}"),
                }
            },
            Err(e) => println!("⚠️  {e}"),
        }
    }

    controller.release();
    println!("👋 Bye");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Speak {
            text,
            request,
            play,
        } => {
            let voice = resolve_voice(request.voice, &config)?;
            let exporter =
                AudioExporter::new(request.output_dir.unwrap_or_else(|| config.output_dir.clone()));
            let (controller, _store) = build_controller(&config)?;
            let input = SpeechRequest::new(text, voice, request.api_key.unwrap_or_default());

            match generate(&controller, &exporter, &input).await? {
                Ok(path) => {
                    println!("✅ Speech generated with voice {}", voice.label());
                    println!("   📁 {}", path.display());

                    if play {
                        if let Err(e) = play_saved(config.player.as_deref(), &path).await {
                            println!("   ⚠️  Playback skipped: {e}");
                        }
                    }
                },
                Err(refusal) => {
                    println!("❌ {refusal}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Session { request } => {
            let voice = resolve_voice(request.voice, &config)?;
            let exporter =
                AudioExporter::new(request.output_dir.unwrap_or_else(|| config.output_dir.clone()));
            let (controller, store) = build_controller(&config)?;
            let input = SpeechRequest::new("", voice, request.api_key.unwrap_or_default());

            run_session(&config, &controller, &store, &exporter, input).await?;
        },

        Commands::Voices => {
            let provider = OpenAISpeechProvider::new(config.speech.clone())?;
            let voices = provider.list_voices().await?;

            println!("🔊 Available voices ({}):", provider.model_name());
            for voice in voices {
                let marker = if voice.id == provider.default_voice() {
                    " (default)"
                } else {
                    ""
                };
                match voice.description {
                    Some(description) => {
                        println!("   {:<8} {}{marker} - {description}", voice.id, voice.name);
                    },
                    None => println!("   {:<8} {}{marker}", voice.id, voice.name),
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use application::ErrorKind;
    use domain::PlaybackSource;

    use super::*;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn log_filter_verbosity_zero_uses_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn speak_parses_all_flags() {
        let cli = parse_args(&[
            "voiceforge",
            "-vv",
            "speak",
            "Hello world",
            "--voice",
            "nova",
            "--api-key",
            "sk-test",
            "--output-dir",
            "/tmp/out",
            "--play",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Speak {
            text,
            request,
            play,
        } = cli.command
        else {
            panic!("expected speak");
        };
        assert_eq!(text, "Hello world");
        assert_eq!(request.voice, Some(Voice::Nova));
        assert_eq!(request.api_key.as_deref(), Some("sk-test"));
        assert_eq!(request.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(play);
    }

    #[test]
    fn speak_rejects_unknown_voice() {
        assert!(parse_args(&["voiceforge", "speak", "Hi", "--voice", "robot"]).is_err());
    }

    #[test]
    fn speak_requires_text() {
        assert!(parse_args(&["voiceforge", "speak"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = parse_args(&["voiceforge", "voices", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Voices));
    }

    #[test]
    fn session_parses_voice() {
        let cli = parse_args(&["voiceforge", "session", "--voice", "ECHO"]).unwrap();
        let Commands::Session { request } = cli.command else {
            panic!("expected session");
        };
        assert_eq!(request.voice, Some(Voice::Echo));
    }

    #[test]
    fn resolve_voice_prefers_flag() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_voice(Some(Voice::Onyx), &config).unwrap(),
            Voice::Onyx
        );
    }

    #[test]
    fn resolve_voice_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.speech.default_voice = "fable".to_string();
        assert_eq!(resolve_voice(None, &config).unwrap(), Voice::Fable);
    }

    #[test]
    fn resolve_voice_rejects_bad_config() {
        let mut config = AppConfig::default();
        config.speech.default_voice = "robot".to_string();
        assert!(resolve_voice(None, &config).is_err());
    }

    #[test]
    fn render_loading() {
        let snapshot = ControllerSnapshot {
            state: ControllerState::Submitting,
            is_loading: true,
            playback_source: None,
            error_message: None,
        };
        assert_eq!(render_snapshot(&snapshot), "⏳ Generating speech...");
    }

    #[test]
    fn render_error() {
        let snapshot = ControllerSnapshot {
            state: ControllerState::Failed(ErrorKind::MissingCredential),
            is_loading: false,
            playback_source: None,
            error_message: Some(ErrorKind::MissingCredential.user_message()),
        };
        assert_eq!(
            render_snapshot(&snapshot),
            "❌ Please enter your OpenAI API key."
        );
    }

    #[test]
    fn render_success() {
        let source = PlaybackSource::new();
        let snapshot = ControllerSnapshot {
            state: ControllerState::Succeeded,
            is_loading: false,
            playback_source: Some(source),
            error_message: None,
        };
        assert_eq!(
            render_snapshot(&snapshot),
            format!("✅ Audio ready: {source}")
        );
    }

    #[test]
    fn render_idle() {
        let snapshot = ControllerSnapshot {
            state: ControllerState::Idle,
            is_loading: false,
            playback_source: None,
            error_message: None,
        };
        assert_eq!(render_snapshot(&snapshot), "💤 Nothing generated yet");
    }

    #[test]
    fn blank_text_is_refused_before_submit() {
        let request = SpeechRequest::new("   \n", Voice::Alloy, "sk-valid");
        assert_eq!(check_text(&request), Err(Refusal::EmptyText));
    }

    #[test]
    fn text_check_ignores_credential() {
        let request = SpeechRequest::new("Hello", Voice::Alloy, "");
        assert_eq!(check_text(&request), Ok(()));
    }

    #[test]
    fn refusal_messages() {
        assert_eq!(
            Refusal::EmptyText.to_string(),
            "Please enter some text to convert to speech."
        );
        assert_eq!(
            Refusal::from(SubmitError::MissingCredential).to_string(),
            "Please enter your OpenAI API key."
        );
    }

    #[tokio::test]
    async fn blank_text_never_reaches_the_controller() {
        let (controller, store) = build_controller(&AppConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let exporter = AudioExporter::new(dir.path());
        let request = SpeechRequest::new("  ", Voice::Nova, "sk-valid");

        let outcome = generate(&controller, &exporter, &request).await.unwrap();

        assert_eq!(outcome, Err(Refusal::EmptyText));
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(store.retained_bytes(), 0);
    }
}
