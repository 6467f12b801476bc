use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render text to playable audio bytes (mp3).
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("nothing to synthesize")]
    EmptyText,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine configuration invalid: {0}")]
    ConfigurationInvalid(String),
}
