use async_trait::async_trait;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Generate the tutor's written answer to a transcribed question.
    async fn complete(&self, question: &str) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
