//! Text-in, text-out service over an action registry

use crate::{codec, ActionError, ActionRegistry, ActionStatsSnapshot};

/// Service accepting serialized actions and reporting per-kind averages.
///
/// Implementations decide the wire format; the statistics themselves always
/// live in an [`ActionRegistry`].
pub trait ActionService: Send + Sync {
    /// Decode one serialized action and record it.
    ///
    /// Malformed input is reported as an error and records nothing.
    fn add_action(&self, raw: &str) -> Result<(), ActionError>;

    /// Serialized averages for every kind seen so far
    fn get_stats(&self) -> Result<String, ActionError>;

    /// Statistics for a single kind, mostly for verification
    fn action_statistics(&self, kind: &str) -> Option<ActionStatsSnapshot>;
}

/// JSON implementation of [`ActionService`]
///
/// ```rust
/// use action_stats::{ActionService, JsonActionService};
///
/// let service = JsonActionService::new();
/// service.add_action(r#"{"action":"jump", "time":100}"#).unwrap();
/// service.add_action(r#"{"action":"jump", "time":200}"#).unwrap();
/// assert_eq!(service.get_stats().unwrap(), r#"[{"action":"jump","avg":150}]"#);
/// ```
#[derive(Debug, Default)]
pub struct JsonActionService {
    registry: ActionRegistry,
}

impl JsonActionService {
    /// Create a service with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing registry
    pub fn with_registry(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Indented variant of [`ActionService::get_stats`]
    pub fn get_stats_pretty(&self) -> Result<String, ActionError> {
        codec::encode_report_pretty(&self.registry.all_statistics())
    }
}

impl ActionService for JsonActionService {
    fn add_action(&self, raw: &str) -> Result<(), ActionError> {
        let record = codec::decode_action(raw).inspect_err(|err| {
            tracing::warn!(error = %err, "Failed to decode action");
        })?;
        self.registry.record(&record)
    }

    fn get_stats(&self) -> Result<String, ActionError> {
        let view = self.registry.all_statistics();
        tracing::debug!(kinds = view.len(), "Encoding statistics report");
        codec::encode_report(&view)
    }

    fn action_statistics(&self, kind: &str) -> Option<ActionStatsSnapshot> {
        self.registry.statistics_for(kind)
    }
}
