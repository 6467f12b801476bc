use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxtutor::application::ports::{SpeechError, SpeechSynthesizer};
use voxtutor::infrastructure::speech::OpenAiSpeechEngine;

const MOCK_MP3: &[u8] = b"binary mp3 payload";

async fn start_mock_speech_server(response_status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/speech",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, MOCK_MP3.to_vec()).into_response()
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

fn engine(base_url: &str) -> OpenAiSpeechEngine {
    OpenAiSpeechEngine::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("tts-1".to_string()),
        Some("alloy".to_string()),
    )
}

#[tokio::test]
async fn given_reply_text_when_synthesizing_then_returns_audio_bytes() {
    let (base_url, shutdown_tx) = start_mock_speech_server(200).await;

    let result = engine(&base_url).synthesize("The answer is 42.").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), MOCK_MP3);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_text_when_synthesizing_then_returns_empty_text_error() {
    let (base_url, shutdown_tx) = start_mock_speech_server(200).await;

    let result = engine(&base_url).synthesize("").await;

    assert!(matches!(result, Err(SpeechError::EmptyText)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upstream_error_when_synthesizing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_speech_server(500).await;

    let result = engine(&base_url).synthesize("text").await;

    assert!(matches!(result, Err(SpeechError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
