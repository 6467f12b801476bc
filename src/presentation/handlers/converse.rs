use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::application::services::TutorError;
use crate::domain::AudioFormat;
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

/// Multipart field name the recorder posts the clip under.
const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct ConverseResponse {
    pub transcription: String,
    pub ai_response: String,
    pub audio_base64: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

struct AudioUpload {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn converse_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_audio_field(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Converse request with no audio field");
            return error_response(StatusCode::BAD_REQUEST, "No audio file received");
        }
        Err(response) => return response,
    };

    let format = match resolve_format(upload.content_type.as_deref(), &upload.filename) {
        Some(f) => f,
        None => {
            tracing::warn!(
                content_type = ?upload.content_type,
                filename = %upload.filename,
                "Unsupported audio upload"
            );
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                &format!(
                    "Unsupported audio type: {}",
                    upload.content_type.as_deref().unwrap_or("unknown")
                ),
            );
        }
    };

    if upload.data.is_empty() {
        tracing::warn!("Converse request with empty audio body");
        return error_response(StatusCode::BAD_REQUEST, "No audio file received");
    }

    tracing::debug!(bytes = upload.data.len(), format = ?format, "Audio upload received");

    match state.tutor_service.respond(&upload.data, format).await {
        Ok(reply) => {
            tracing::info!(
                exchange_id = %reply.exchange.id.as_uuid(),
                transcript = %sanitize_transcript(&reply.exchange.transcript),
                "Converse successful"
            );
            (
                StatusCode::OK,
                Json(ConverseResponse {
                    transcription: reply.exchange.transcript,
                    ai_response: reply.exchange.reply,
                    audio_base64: BASE64.encode(&reply.speech),
                }),
            )
                .into_response()
        }
        Err(TutorError::EmptyTranscript) => {
            tracing::warn!("Recording transcribed to empty text");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Nothing was said in the recording",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Converse failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error during processing: {}", e),
            )
        }
    }
}

/// Pulls the `audio` field out of the multipart stream, skipping any
/// unrelated fields the client sends along.
async fn read_audio_field(mut multipart: Multipart) -> Result<Option<AudioUpload>, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Failed to read multipart: {}", e),
                ));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audio bytes");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Failed to read audio: {}", e),
                ));
            }
        };

        return Ok(Some(AudioUpload {
            filename,
            content_type,
            data,
        }));
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn resolve_format(content_type: Option<&str>, filename: &str) -> Option<AudioFormat> {
    match content_type {
        Some("application/octet-stream") | None => filename
            .rsplit_once('.')
            .and_then(|(_, ext)| AudioFormat::from_extension(ext)),
        Some(mime) => AudioFormat::from_mime(mime),
    }
}
