use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxtutor::application::services::TutorService;
use voxtutor::domain::Language;
use voxtutor::infrastructure::audio::TranscriptionEngineFactory;
use voxtutor::infrastructure::llm::create_chat_client;
use voxtutor::infrastructure::observability::{TracingConfig, init_tracing};
use voxtutor::infrastructure::speech::SpeechEngineFactory;
use voxtutor::presentation::config::{Environment, Settings};
use voxtutor::presentation::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            default_level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let language = Language::new(&settings.tutor.language)
        .map_err(|e| anyhow::anyhow!("Invalid tutor language: {}", e))?;

    let transcription_engine =
        TranscriptionEngineFactory::create(&settings.transcription, language.clone())
            .context("Failed to create transcription engine")?;
    let chat_client =
        Arc::new(create_chat_client(&settings.chat).context("Failed to create chat client")?);
    let speech_synthesizer = SpeechEngineFactory::create(&settings.speech, language)
        .context("Failed to create speech engine")?;

    let tutor_service = Arc::new(TutorService::new(
        transcription_engine,
        chat_client,
        speech_synthesizer,
    ));

    let state = AppState { tutor_service };
    let router = create_router(state, settings.server.max_upload_mb);

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .context("Invalid server host")?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
