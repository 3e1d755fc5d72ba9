//! Decoded action records

use serde::{Deserialize, Serialize};

/// A single timed action, as delivered by an ingestion adapter
///
/// On the wire the kind is the `action` field and the duration is `time`:
///
/// ```json
/// {"action": "jump", "time": 100}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Action kind (e.g., "jump")
    #[serde(rename = "action")]
    pub kind: Box<str>,
    /// Time the action took
    #[serde(rename = "time")]
    pub duration: u64,
}

impl ActionRecord {
    /// Create a new record
    pub fn new(kind: impl Into<Box<str>>, duration: u64) -> Self {
        Self {
            kind: kind.into(),
            duration,
        }
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActionRecord [name='{}', time={}]", self.kind, self.duration)
    }
}
