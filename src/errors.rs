//! Error types for action ingestion and reporting

/// Error returned by the registry and the service adapters
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The record named no action kind; nothing was recorded
    #[error("Invalid input: {0}")]
    InvalidInput(Box<str>),
    /// The raw record could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The statistics report could not be encoded
    #[error("Encode error: {0}")]
    Encode(serde_json::Error),
}

impl ActionError {
    /// Error for a record with an empty or missing action kind
    pub fn empty_kind() -> Self {
        Self::InvalidInput("action kind must not be empty".into())
    }

    /// Check if the caller supplied an invalid kind
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if the raw record failed to decode
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
