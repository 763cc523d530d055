//! Integration tests for ai_speech crate
//!
//! Exercises the OpenAI provider against a mocked `/v1/audio/speech` endpoint.

use ai_speech::{
    AudioFormat, OpenAISpeechProvider, SpeechConfig, SpeechError, SynthesisRequest, TextToSpeech,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test configuration pointing to mock server
fn test_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        openai_base_url: format!("{base_url}/v1"),
        timeout_ms: 5000,
        ..Default::default()
    }
}

/// Start of an MP3 file carrying an ID3v2 tag
fn mock_mp3_audio() -> Vec<u8> {
    vec![
        0x49, 0x44, 0x33, 0x04, // "ID3" v2.4
        0x00, 0x00, 0x00, 0x00, // Flags and size
        0x00, 0x00, 0xFF, 0xFB, // Frame sync
        0x90, 0x00, 0x00, 0x00,
    ]
}

#[tokio::test]
async fn tts_synthesis_full_request_contract() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "model": "tts-1",
            "input": "Hello world",
            "voice": "nova"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(mock_mp3_audio())
                .insert_header("content-type", "audio/mpeg"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAISpeechProvider::new(test_config(&mock_server.uri()))
        .expect("Failed to create provider");

    let request = SynthesisRequest::new("Hello world", "test-api-key").with_voice("nova");
    let audio = provider.synthesize(&request).await.expect("Synthesis should succeed");

    assert_eq!(audio.data(), mock_mp3_audio().as_slice());
    assert_eq!(audio.format(), AudioFormat::Mp3);
    assert_eq!(audio.mime_type(), "audio/mpeg");
}

#[tokio::test]
async fn tts_synthesis_uses_configured_default_voice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(body_json(serde_json::json!({
            "model": "tts-1",
            "input": "Default voice",
            "voice": "shimmer"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(mock_mp3_audio()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        default_voice: "shimmer".to_string(),
        ..test_config(&mock_server.uri())
    };
    let provider = OpenAISpeechProvider::new(config).expect("Failed to create provider");

    let result = provider
        .synthesize(&SynthesisRequest::new("Default voice", "key"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn tts_synthesis_unauthorized_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "message": "Incorrect API key provided: sk-bad",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAISpeechProvider::new(test_config(&mock_server.uri()))
        .expect("Failed to create provider");

    let result = provider
        .synthesize(&SynthesisRequest::new("Hi", "sk-bad").with_voice("echo"))
        .await;

    assert!(matches!(result, Err(SpeechError::Unauthorized(_))));
}

#[tokio::test]
async fn tts_synthesis_model_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "message": "The model `tts-9` does not exist",
                "type": "invalid_request_error",
                "code": "model_not_found"
            }
        })))
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        tts_model: "tts-9".to_string(),
        ..test_config(&mock_server.uri())
    };
    let provider = OpenAISpeechProvider::new(config).expect("Failed to create provider");

    let result = provider.synthesize(&SynthesisRequest::new("Hi", "key")).await;

    assert!(matches!(result, Err(SpeechError::ModelNotAvailable(m)) if m == "tts-9"));
}

#[tokio::test]
async fn tts_synthesis_connection_refused() {
    // Nothing listens on port 1
    let provider = OpenAISpeechProvider::new(test_config("http://127.0.0.1:1"))
        .expect("Failed to create provider");

    let result = provider.synthesize(&SynthesisRequest::new("Hi", "key")).await;

    assert!(matches!(
        result,
        Err(SpeechError::ConnectionFailed(_) | SpeechError::RequestFailed(_))
    ));
}

#[tokio::test]
async fn tts_local_rejections_never_reach_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(mock_mp3_audio()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = OpenAISpeechProvider::new(test_config(&mock_server.uri()))
        .expect("Failed to create provider");

    assert!(provider
        .synthesize(&SynthesisRequest::new("", "key"))
        .await
        .is_err());
    assert!(provider
        .synthesize(&SynthesisRequest::new("Hello", ""))
        .await
        .is_err());
}
