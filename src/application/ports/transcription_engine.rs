use async_trait::async_trait;

use crate::domain::AudioFormat;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        format: AudioFormat,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine configuration invalid: {0}")]
    ConfigurationInvalid(String),
}
