use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechError, SpeechSynthesizer};

pub struct OpenAiSpeechEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

impl OpenAiSpeechEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "tts-1".to_string()),
            voice: voice.unwrap_or_else(|| "alloy".to_string()),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechEngine {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let url = format!("{}/audio/speech", self.base_url);
        let request_body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        tracing::debug!(model = %self.model, voice = %self.voice, "Sending text to OpenAI speech API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SpeechError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(bytes = bytes.len(), "OpenAI speech synthesis completed");

        Ok(bytes.to_vec())
    }
}
