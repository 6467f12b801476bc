mod init_tracing;
mod request_id;
mod transcript_sanitizer;

pub use init_tracing::{TracingConfig, init_tracing};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use transcript_sanitizer::sanitize_transcript;
