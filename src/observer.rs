//! Registry observer trait

/// Observer trait for external observability
pub trait ActionObserver: Send + Sync + 'static {
    fn on_kind_created(&self, kind: &str);
    fn on_action_recorded(&self, kind: &str, duration: u64);
    fn on_action_rejected(&self, reason: &str);
}

/// No-op observer
pub struct NoOpObserver;

impl ActionObserver for NoOpObserver {
    fn on_kind_created(&self, _kind: &str) {}
    fn on_action_recorded(&self, _kind: &str, _duration: u64) {}
    fn on_action_rejected(&self, _reason: &str) {}
}

/// Tracing-based observer
pub struct TracingObserver;

impl ActionObserver for TracingObserver {
    fn on_kind_created(&self, kind: &str) {
        tracing::debug!(action = %kind, "Action kind created");
    }

    fn on_action_recorded(&self, kind: &str, duration: u64) {
        tracing::trace!(action = %kind, duration = duration, "Action recorded");
    }

    fn on_action_rejected(&self, reason: &str) {
        tracing::warn!(reason = %reason, "Action rejected");
    }
}
