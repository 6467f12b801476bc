use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeId(Uuid);

impl ExchangeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

/// One question-and-answer round trip. Exists only for the lifetime of the
/// request; the id ties the pipeline's log lines together.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub id: ExchangeId,
    pub transcript: String,
    pub reply: String,
}

impl Exchange {
    pub fn new(transcript: String, reply: String) -> Self {
        Self {
            id: ExchangeId::new(),
            transcript,
            reply,
        }
    }
}
