use std::sync::Arc;

use prometheus::{CounterVec, Opts, Registry, proto::MetricFamily};

use sched_core::metrics::{MetricsBackend, ScheduleOutcome};

const NAMESPACE: &str = "sched";

/// Prometheus-backed [`MetricsBackend`].
///
/// Label values are bounded: `kind` is an executor kind, `outcome` a
/// [`ScheduleOutcome`] label, `error_kind` a registry or executor error label.
#[derive(Clone)]
pub struct PrometheusMetrics {
    schedule_requests: CounterVec,
    executors_created: CounterVec,
    registry_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let schedule_requests = CounterVec::new(
            Opts::new("schedule_requests_total", "Scheduling requests evaluated by the label pipeline")
                .namespace(NAMESPACE),
            &["kind", "outcome"],
        )?;
        registry.register(Box::new(schedule_requests.clone()))?;

        let executors_created = CounterVec::new(
            Opts::new("executors_created_total", "Executor instances built through the registry")
                .namespace(NAMESPACE),
            &["kind"],
        )?;
        registry.register(Box::new(executors_created.clone()))?;

        let registry_errors = CounterVec::new(
            Opts::new("registry_errors_total", "Executor registry failures").namespace(NAMESPACE),
            &["kind", "error_kind"],
        )?;
        registry.register(Box::new(registry_errors.clone()))?;

        Ok(Self {
            schedule_requests,
            executors_created,
            registry_errors,
            registry,
        })
    }

    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_schedule(&self, kind: &str, outcome: ScheduleOutcome) {
        self.schedule_requests
            .with_label_values(&[kind, outcome.as_label()])
            .inc();
    }

    fn record_executor_created(&self, kind: &str) {
        self.executors_created.with_label_values(&[kind]).inc();
    }

    fn record_registry_error(&self, kind: &str, error_kind: &str) {
        self.registry_errors
            .with_label_values(&[kind, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sched_core::prelude::*;
    use sched_model::{ClusterConfig, Job, Labels, Name, Options, Workload};

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn record_schedule_splits_by_kind_and_outcome() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_schedule("MARATHON", ScheduleOutcome::Scheduled);
        metrics.record_schedule("MARATHON", ScheduleOutcome::Scheduled);
        metrics.record_schedule("MARATHON", ScheduleOutcome::Disabled);
        metrics.record_schedule("K8S", ScheduleOutcome::Rejected);

        let families = metrics.gather();
        let requests = family(&families, "sched_schedule_requests_total");
        assert_eq!(requests.get_metric().len(), 3);

        let scheduled = metrics
            .schedule_requests
            .with_label_values(&["MARATHON", "scheduled"])
            .get();
        assert_eq!(scheduled, 2.0);
    }

    #[test]
    fn record_registry_events() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_executor_created("K8S");
        metrics.record_registry_error("K8S", "duplicate_kind");
        metrics.record_registry_error("edas", "invalid_kind");

        let families = metrics.gather();
        assert_eq!(family(&families, "sched_executors_created_total").get_metric().len(), 1);
        assert_eq!(family(&families, "sched_registry_errors_total").get_metric().len(), 2);
    }

    #[test]
    fn policy_reports_through_backend() {
        let metrics = PrometheusMetrics::new().unwrap();
        let policy = SchedulePolicy::new().with_metrics(Arc::new(metrics.clone()));

        let enabled = ClusterConfig::new([("ENABLETAG", "true")].into_iter().collect::<Options>(), None);
        let disabled = ClusterConfig::default();
        let job = Workload::Job(Job::new("j", Labels::new()));
        let name = Name::new("METRONOMEFORTEST");

        policy.evaluate(&enabled, &name, "METRONOME", &job).unwrap();
        policy.evaluate(&disabled, &name, "METRONOME", &job).unwrap();
        assert!(policy.evaluate(&enabled, &name, "K8S", &job).is_err());

        let get = |kind: &str, outcome: &str| {
            metrics
                .schedule_requests
                .with_label_values(&[kind, outcome])
                .get()
        };
        assert_eq!(get("METRONOME", "scheduled"), 1.0);
        assert_eq!(get("METRONOME", "disabled"), 1.0);
        assert_eq!(get("K8S", "rejected"), 1.0);
    }

    #[test]
    fn registering_twice_in_one_registry_fails() {
        let registry = Arc::new(Registry::new());
        PrometheusMetrics::new_with_registry(registry.clone()).unwrap();
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
