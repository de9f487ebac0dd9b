use crate::metrics::backend::{MetricsBackend, ScheduleOutcome};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_schedule(&self, _: &str, _: ScheduleOutcome) {}

    #[inline(always)]
    fn record_executor_created(&self, _: &str) {}

    #[inline(always)]
    fn record_registry_error(&self, _: &str, _: &str) {}
}
