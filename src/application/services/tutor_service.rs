use std::sync::Arc;

use crate::application::ports::{
    ChatClient, ChatClientError, SpeechError, SpeechSynthesizer, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::{AudioFormat, Exchange};

/// Sequences one spoken exchange: transcribe the question, generate the
/// answer, synthesize the answer to speech. Holds no per-request state.
pub struct TutorService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    chat_client: Arc<dyn ChatClient>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl TutorService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        chat_client: Arc<dyn ChatClient>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            transcription_engine,
            chat_client,
            speech_synthesizer,
        }
    }

    pub async fn respond(
        &self,
        audio_data: &[u8],
        format: AudioFormat,
    ) -> Result<SpokenReply, TutorError> {
        let transcript = self
            .transcription_engine
            .transcribe(audio_data, format)
            .await
            .map_err(TutorError::Transcription)?;

        if transcript.trim().is_empty() {
            return Err(TutorError::EmptyTranscript);
        }

        let reply = self
            .chat_client
            .complete(&transcript)
            .await
            .map_err(TutorError::Completion)?;

        let speech = self
            .speech_synthesizer
            .synthesize(&reply)
            .await
            .map_err(TutorError::Synthesis)?;

        let exchange = Exchange::new(transcript, reply);

        tracing::info!(
            exchange_id = %exchange.id.as_uuid(),
            transcript_chars = exchange.transcript.len(),
            reply_chars = exchange.reply.len(),
            speech_bytes = speech.len(),
            "Exchange completed"
        );

        Ok(SpokenReply { exchange, speech })
    }
}

#[derive(Debug)]
pub struct SpokenReply {
    pub exchange: Exchange,
    pub speech: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("nothing was said in the recording")]
    EmptyTranscript,
    #[error("completion: {0}")]
    Completion(ChatClientError),
    #[error("synthesis: {0}")]
    Synthesis(SpeechError),
}
