//! Concurrent registry of per-action statistics

use crate::{
    ActionError, ActionObserver, ActionRecord, ActionStats, ActionStatsSnapshot, NoOpObserver,
    RegistryConfig,
};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

/// Registry mapping each action kind to its statistics.
///
/// Statistics for a kind are created on the first recorded action of that
/// kind and live as long as the registry. Creation goes through the map's
/// entry API, so racing first writers for a new kind always share one
/// [`ActionStats`].
///
/// ```rust
/// use action_stats::ActionRegistry;
///
/// let registry = ActionRegistry::new();
/// registry.record_action("jump", 100).unwrap();
/// registry.record_action("jump", 200).unwrap();
///
/// let jump = registry.statistics_for("jump").unwrap();
/// assert_eq!((jump.event_count, jump.average), (2, 150));
/// ```
pub struct ActionRegistry {
    stats: DashMap<Box<str>, Arc<ActionStats>>,
    observer: Arc<dyn ActionObserver>,
}

impl ActionRegistry {
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry from explicit settings
    pub fn with_config(config: RegistryConfig) -> Self {
        let stats = match config.effective_shard_amount() {
            Some(shard_amount) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shard_amount)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };
        Self {
            stats,
            observer: Arc::new(NoOpObserver),
        }
    }

    /// Attach an observer notified about creations, records and rejections
    pub fn with_observer(mut self, observer: Arc<dyn ActionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Record one action of `kind` that took `duration`.
    ///
    /// Returns [`ActionError::InvalidInput`] without touching the registry
    /// when `kind` is empty or blank.
    pub fn record_action(&self, kind: &str, duration: u64) -> Result<(), ActionError> {
        if kind.trim().is_empty() {
            let err = ActionError::empty_kind();
            self.observer.on_action_rejected(&err.to_string());
            return Err(err);
        }

        self.resolve(kind).update(duration);
        self.observer.on_action_recorded(kind, duration);
        Ok(())
    }

    /// Record a decoded action
    pub fn record(&self, record: &ActionRecord) -> Result<(), ActionError> {
        self.record_action(&record.kind, record.duration)
    }

    /// Snapshot of the statistics for `kind`, if any action of that kind was recorded
    pub fn statistics_for(&self, kind: &str) -> Option<ActionStatsSnapshot> {
        if kind.trim().is_empty() {
            return None;
        }
        self.stats.get(kind).map(|entry| entry.value().snapshot())
    }

    /// Snapshots of every kind seen so far, in no particular order
    pub fn all_statistics(&self) -> ActionStatsView {
        // Clone the handles first so no shard lock is held while the
        // per-kind locks are taken.
        let handles: Vec<Arc<ActionStats>> = self
            .stats
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        ActionStatsView {
            entries: handles.iter().map(|stats| stats.snapshot()).collect(),
        }
    }

    /// Number of distinct kinds seen so far
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check if no action was recorded yet
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    fn resolve(&self, kind: &str) -> Arc<ActionStats> {
        if let Some(entry) = self.stats.get(kind) {
            return Arc::clone(entry.value());
        }

        let mut created = false;
        let stats = Arc::clone(
            self.stats
                .entry(kind.into())
                .or_insert_with(|| {
                    created = true;
                    Arc::new(ActionStats::new(kind))
                })
                .value(),
        );
        if created {
            self.observer.on_kind_created(kind);
        }
        stats
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("kinds", &self.stats.len())
            .finish()
    }
}

/// Read-only set of statistics snapshots taken from a registry.
///
/// The view owns its snapshots; nothing done with it reaches back into the
/// registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionStatsView {
    entries: Vec<ActionStatsSnapshot>,
}

impl ActionStatsView {
    /// Number of kinds in the view
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the view holds no kinds
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the snapshots
    pub fn iter(&self) -> std::slice::Iter<'_, ActionStatsSnapshot> {
        self.entries.iter()
    }

    /// Find the snapshot for `kind`
    pub fn get(&self, kind: &str) -> Option<&ActionStatsSnapshot> {
        self.entries.iter().find(|entry| entry.kind.as_ref() == kind)
    }
}

impl<'a> IntoIterator for &'a ActionStatsView {
    type Item = &'a ActionStatsSnapshot;
    type IntoIter = std::slice::Iter<'a, ActionStatsSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ActionStatsView {
    type Item = ActionStatsSnapshot;
    type IntoIter = std::vec::IntoIter<ActionStatsSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
