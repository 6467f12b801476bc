use std::fmt;

/// Language tag shared by transcription and speech synthesis.
///
/// Stored as a lowercase ISO 639-1 style tag ("pt", "en", "es"). The tag is
/// passed through to the providers, which own the actual language support.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    pub fn new(tag: &str) -> Result<Self, String> {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(format!("Invalid language tag: {:?}", tag));
        }
        Ok(Self(tag))
    }

    pub fn as_tag(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("pt".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
