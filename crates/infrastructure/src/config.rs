//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `VOICEFORGE_*` environment variables (nested keys joined with
//! `__`, e.g. `VOICEFORGE_SPEECH__TTS_MODEL=tts-1-hd`).
//!
//! The API credential is never read from configuration.

use std::path::{Path, PathBuf};

use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "VOICEFORGE";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the download action writes to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Preferred audio player binary
    #[serde(default)]
    pub player: Option<String>,

    /// Speech provider settings
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            player: None,
            speech: SpeechConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise `config.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate nested settings
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.speech
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("speech: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ai_speech::AudioFormat;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.player.is_none());
        assert_eq!(config.logging.filter, "warn");
        assert!(!config.logging.json);
        assert_eq!(config.speech.tts_model, "tts-1");
    }

    #[test]
    fn loads_explicit_file() {
        let file = write_config(
            r#"
            output_dir = "/tmp/speech"
            player = "mpv"

            [speech]
            tts_model = "tts-1-hd"
            default_voice = "nova"
            output_format = "wav"

            [logging]
            filter = "debug"
            json = true
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("/tmp/speech"));
        assert_eq!(config.player.as_deref(), Some("mpv"));
        assert_eq!(config.speech.tts_model, "tts-1-hd");
        assert_eq!(config.speech.default_voice, "nova");
        assert_eq!(config.speech.output_format, AudioFormat::Wav);
        assert_eq!(config.speech.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/voiceforge.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_speech_settings_are_rejected() {
        let file = write_config(
            r#"
            [speech]
            speed = 9.0
            "#,
        );

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("speech"));
    }

    #[test]
    fn serializes_back_to_toml() {
        let rendered = toml::to_string(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[speech]"));
        assert!(rendered.contains("tts_model = \"tts-1\""));
    }
}
