//! Integration tests for CLI
//!
//! Run the built binary; requests that reach the speech endpoint go to a mock server.

use std::process::{Command, Output};

fn voiceforge(args: &[&str], dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_voiceforge"))
        .args(args)
        .current_dir(dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn voices_lists_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["voices"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["alloy", "echo", "fable", "onyx", "nova", "shimmer"] {
        assert!(stdout.contains(id), "missing {id} in {stdout}");
    }
    assert!(stdout.contains("(default)"));
}

#[test]
fn speak_without_api_key_reports_missing_credential() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["speak", "Hello"], dir.path());

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter your OpenAI API key."));
    assert!(!dir.path().join("generated_speech.mp3").exists());
}

#[test]
fn speak_with_blank_api_key_reports_missing_credential() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["speak", "Hello", "--api-key", "   "], dir.path());

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter your OpenAI API key."));
}

#[test]
fn config_file_selects_default_voice() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[speech]\ndefault_voice = \"onyx\"\n",
    )
    .unwrap();

    let output = voiceforge(&["voices"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let default_line = stdout
        .lines()
        .find(|line| line.contains("(default)"))
        .unwrap();
    assert!(default_line.contains("onyx"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["--config", "absent.toml", "voices"], dir.path());

    assert!(!output.status.success());
}

#[test]
fn unknown_voice_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["speak", "Hi", "--voice", "robot"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("robot"));
}

#[test]
fn speak_with_blank_text_is_refused_without_blaming_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = voiceforge(&["speak", "   ", "--api-key", "sk-valid"], dir.path());

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter some text to convert to speech."));
    assert!(!stdout.contains("Please check your API key"));
    assert!(!dir.path().join("generated_speech.mp3").exists());
}

#[tokio::test]
async fn play_without_player_still_saves_audio() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(b"ID3\x04\x00\x00fake-frames".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let empty_path = tempfile::tempdir().unwrap();

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_voiceforge"))
        .args(["speak", "Hello world", "--api-key", "sk-valid", "--play"])
        .current_dir(dir.path())
        .env("PATH", empty_path.path())
        .env("VOICEFORGE_SPEECH__OPENAI_BASE_URL", format!("{}/v1", server.uri()))
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("generated_speech.mp3"));
    assert!(stdout.contains("No audio player found"));
    assert!(dir.path().join("generated_speech.mp3").exists());
}
