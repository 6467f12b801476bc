const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes transcribed or generated text for safe logging.
///
/// Transcripts are user speech; they get truncated so log lines stay bounded
/// and anything that looks like a dictated credential gets redacted.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let boundary = visible_boundary(trimmed);
    let sanitized = if boundary < trimmed.len() {
        format!(
            "{}... ({} chars total)",
            &trimmed[..boundary],
            trimmed.chars().count()
        )
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

// Byte index of the truncation point, never inside a UTF-8 character.
fn visible_boundary(text: &str) -> usize {
    text.char_indices()
        .nth(MAX_VISIBLE_LENGTH)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
