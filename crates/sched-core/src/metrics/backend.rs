use std::sync::Arc;

/// How a scheduling request left the label pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Label scheduling is switched off for the cluster.
    Disabled,
    /// Executor kind does not take part in label scheduling.
    Excluded,
    /// Pipeline ran and produced constraints.
    Scheduled,
    /// Request rejected (unknown kind or payload mismatch).
    Rejected,
}

impl ScheduleOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ScheduleOutcome::Disabled => "disabled",
            ScheduleOutcome::Excluded => "excluded",
            ScheduleOutcome::Scheduled => "scheduled",
            ScheduleOutcome::Rejected => "rejected",
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record one evaluated scheduling request.
    ///
    /// # Arguments
    /// - `kind`: executor kind as requested by the caller
    /// - `outcome`: how the request left the pipeline
    fn record_schedule(&self, kind: &str, outcome: ScheduleOutcome);
    /// Record an executor instance built through the registry.
    fn record_executor_created(&self, kind: &str);
    /// Record a registry failure (bad kind, duplicate, constructor error).
    ///
    /// # Arguments
    /// - `kind`: executor kind involved
    /// - `error_kind`: error category
    fn record_registry_error(&self, kind: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
