//! Per-action statistics

use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Counters {
    total_duration: u64,
    event_count: u64,
}

/// Running count and total time for one action kind
///
/// Both counters sit behind a single lock, so every reader sees a whole
/// number of applied updates and never one half of an update.
pub struct ActionStats {
    kind: Box<str>,
    counters: Mutex<Counters>,
}

impl ActionStats {
    /// Create empty statistics for the given kind
    pub fn new(kind: impl Into<Box<str>>) -> Self {
        Self {
            kind: kind.into(),
            counters: Mutex::new(Counters::default()),
        }
    }

    /// The action kind these statistics belong to
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Apply one action of the given duration
    pub fn update(&self, duration: u64) {
        let mut counters = self.lock();
        counters.event_count = counters.event_count.saturating_add(1);
        counters.total_duration = counters.total_duration.saturating_add(duration);
    }

    /// Total time across all applied actions
    pub fn total_duration(&self) -> u64 {
        self.lock().total_duration
    }

    /// Number of applied actions
    pub fn event_count(&self) -> u64 {
        self.lock().event_count
    }

    /// Truncated average time, or 0 before the first action
    pub fn average(&self) -> u64 {
        let counters = self.lock();
        average(counters.total_duration, counters.event_count)
    }

    /// Consistent copy of the current counters and average
    pub fn snapshot(&self) -> ActionStatsSnapshot {
        let counters = self.lock();
        ActionStatsSnapshot {
            kind: self.kind.clone(),
            total_duration: counters.total_duration,
            event_count: counters.event_count,
            average: average(counters.total_duration, counters.event_count),
        }
    }

    // The critical sections above cannot panic, so a poisoned lock still
    // guards consistent counters.
    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn average(total_duration: u64, event_count: u64) -> u64 {
    if event_count == 0 {
        0
    } else {
        total_duration / event_count
    }
}

impl std::fmt::Debug for ActionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("ActionStats")
            .field("kind", &snapshot.kind)
            .field("total_duration", &snapshot.total_duration)
            .field("event_count", &snapshot.event_count)
            .finish()
    }
}

impl std::fmt::Display for ActionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// Point-in-time copy of an action's statistics
///
/// Serializes as the report entry `{"action": kind, "avg": average}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionStatsSnapshot {
    /// Action kind
    #[serde(rename = "action")]
    pub kind: Box<str>,
    /// Total time across all applied actions
    #[serde(skip)]
    pub total_duration: u64,
    /// Number of applied actions
    #[serde(skip)]
    pub event_count: u64,
    /// Truncated average time (0 when no actions were applied)
    #[serde(rename = "avg")]
    pub average: u64,
}

impl std::fmt::Display for ActionStatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ActionStats [name='{}', totalTime={}, totalCount={}, average={}]",
            self.kind, self.total_duration, self.event_count, self.average
        )
    }
}
