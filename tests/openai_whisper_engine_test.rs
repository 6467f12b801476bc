use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxtutor::application::ports::{TranscriptionEngine, TranscriptionError};
use voxtutor::domain::{AudioFormat, Language};
use voxtutor::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn engine(base_url: &str) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("whisper-1".to_string()),
        Language::new("pt").unwrap(),
    )
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "Olá, professor!\n").await;

    let result = engine(&base_url)
        .transcribe(b"fake webm bytes", AudioFormat::Webm)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Olá, professor!");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_error() {
    let response_body = r#"{"error": {"message": "invalid audio"}}"#;
    let (base_url, shutdown_tx) = start_mock_whisper_server(400, response_body).await;

    let result = engine(&base_url)
        .transcribe(b"bad audio", AudioFormat::Webm)
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_silent_audio_when_transcribing_then_returns_empty_string() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "  ").await;

    let result = engine(&base_url)
        .transcribe(b"silent audio", AudioFormat::Wav)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_transcribing_then_returns_api_error() {
    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        None,
        Language::default(),
    );

    let result = engine.transcribe(b"bytes", AudioFormat::Webm).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
}
