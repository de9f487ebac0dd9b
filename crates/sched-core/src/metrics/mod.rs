//! Metrics collection abstraction for the scheduling core.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected into
//! [`crate::policy::SchedulePolicy`] and [`crate::registry::ExecutorRegistry`].
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, ScheduleOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
