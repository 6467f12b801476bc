use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tower::ServiceExt;

use voxtutor::application::ports::{
    ChatClient, ChatClientError, SpeechError, SpeechSynthesizer, TranscriptionEngine,
    TranscriptionError,
};
use voxtutor::application::services::TutorService;
use voxtutor::domain::AudioFormat;
use voxtutor::presentation::{AppState, create_router};

const TEST_MAX_UPLOAD_MB: usize = 1;
const TEST_SPEECH_BYTES: &[u8] = b"mock mp3 bytes";

struct MockTranscriptionEngine {
    transcript: &'static str,
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        Ok(self.transcript.to_string())
    }
}

struct FailingTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for FailingTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed(
            "upstream unavailable".to_string(),
        ))
    }
}

struct MockChatClient;

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, question: &str) -> Result<String, ChatClientError> {
        Ok(format!("Answer to: {}", question))
    }
}

struct MockSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, SpeechError> {
        Ok(TEST_SPEECH_BYTES.to_vec())
    }
}

fn create_test_app(transcript: &'static str) -> axum::Router {
    let tutor_service = Arc::new(TutorService::new(
        Arc::new(MockTranscriptionEngine { transcript }),
        Arc::new(MockChatClient),
        Arc::new(MockSpeechSynthesizer),
    ));
    create_router(AppState { tutor_service }, TEST_MAX_UPLOAD_MB)
}

fn create_failing_app() -> axum::Router {
    let tutor_service = Arc::new(TutorService::new(
        Arc::new(FailingTranscriptionEngine),
        Arc::new(MockChatClient),
        Arc::new(MockSpeechSynthesizer),
    ));
    create_router(AppState { tutor_service }, TEST_MAX_UPLOAD_MB)
}

const BOUNDARY: &str = "test-boundary-7349";

fn multipart_body(field_name: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn converse_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/converse")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = create_test_app("ignored");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_webm_upload_when_converse_then_returns_transcript_reply_and_audio() {
    let app = create_test_app("Qual é a capital do Brasil?");

    let body = multipart_body("audio", "audio.webm", "audio/webm", b"fake webm bytes");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["transcription"], "Qual é a capital do Brasil?");
    assert_eq!(
        json["ai_response"],
        "Answer to: Qual é a capital do Brasil?"
    );

    let audio = BASE64
        .decode(json["audio_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(audio, TEST_SPEECH_BYTES);
}

#[tokio::test]
async fn given_octet_stream_with_webm_filename_when_converse_then_accepts_upload() {
    let app = create_test_app("hello");

    let body = multipart_body(
        "audio",
        "recording.webm",
        "application/octet-stream",
        b"fake webm bytes",
    );
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_no_audio_field_when_converse_then_returns_bad_request() {
    let app = create_test_app("ignored");

    let body = multipart_body("attachment", "notes.webm", "audio/webm", b"bytes");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_empty_audio_body_when_converse_then_returns_bad_request() {
    let app = create_test_app("ignored");

    let body = multipart_body("audio", "audio.webm", "audio/webm", b"");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_unsupported_content_type_when_converse_then_returns_unsupported_media_type() {
    let app = create_test_app("ignored");

    let body = multipart_body("audio", "notes.txt", "text/plain", b"not audio");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn given_silent_recording_when_converse_then_returns_unprocessable() {
    let app = create_test_app("   ");

    let body = multipart_body("audio", "audio.webm", "audio/webm", b"silence");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn given_transcription_failure_when_converse_then_returns_server_error() {
    let app = create_failing_app();

    let body = multipart_body("audio", "audio.webm", "audio/webm", b"bytes");
    let response = app.oneshot(converse_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("transcription"));
}

#[tokio::test]
async fn given_get_method_when_converse_then_returns_method_not_allowed() {
    let app = create_test_app("ignored");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/converse")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let app = create_test_app("ignored");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = create_test_app("ignored");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
