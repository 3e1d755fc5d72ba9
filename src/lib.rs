//! Concurrent per-action timing statistics
//!
//! Callers report actions as a kind plus the time they took; the crate keeps a
//! running count, total and truncated average per kind, safe to update and
//! read from any number of threads at once.
//!
//! # Quick Start
//!
//! ```rust
//! use action_stats::{ActionRegistry, ActionService, JsonActionService};
//!
//! // Typed entry point
//! let registry = ActionRegistry::new();
//! registry.record_action("run", 75).unwrap();
//! assert_eq!(registry.statistics_for("run").unwrap().average, 75);
//!
//! // JSON entry point
//! let service = JsonActionService::new();
//! service.add_action(r#"{"action":"jump", "time":100}"#).unwrap();
//! assert_eq!(service.get_stats().unwrap(), r#"[{"action":"jump","avg":100}]"#);
//! ```

#![warn(missing_docs)]

// === Core Types ===
mod action;
mod errors;
mod stats;

// === Registry ===
mod config;
mod registry;

// === Observability ===
mod observer;

// === Adapters ===
pub mod codec;
mod service;

#[cfg(any(test, feature = "test-harness"))]
pub mod test_support;

// === Re-exports ===

// Types
pub use action::ActionRecord;
pub use stats::{ActionStats, ActionStatsSnapshot};

// Errors
pub use errors::ActionError;

// Registry
pub use config::RegistryConfig;
pub use registry::{ActionRegistry, ActionStatsView};

// Observability
pub use observer::{ActionObserver, NoOpObserver, TracingObserver};

// Service
pub use service::{ActionService, JsonActionService};
