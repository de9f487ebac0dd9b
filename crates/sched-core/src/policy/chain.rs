use sched_model::{
    ClusterConfig, ExecutorKind, Name, Options, ScheduleClass, ScheduleInfo, ScheduleInfo2,
    Selector, ServiceGroup, ServiceSelectors, Workload,
    constants::{LABEL_LOCATION_PREFIX, SELECTOR_LOCATION},
};
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::{
    error::CoreError,
    metrics::{MetricsHandle, ScheduleOutcome, noop_metrics},
    policy::{LabelInfo, run_pipeline},
};

/// What an executor receives for one workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    #[serde(rename = "scheduleInfo")]
    pub info: ScheduleInfo,
    #[serde(rename = "scheduleInfo2")]
    pub info2: ScheduleInfo2,
    /// Refined org/workspace options resolved for this workload.
    #[serde(rename = "extraConfig")]
    pub extra_config: Option<Options>,
}

impl ScheduleResult {
    /// `is_un_locked` set, everything else empty.
    pub fn unconstrained() -> Self {
        Self {
            info: ScheduleInfo::default(),
            info2: ScheduleInfo2::default(),
            extra_config: None,
        }
    }
}

/// Label scheduling entry point with injectable metrics.
#[derive(Clone)]
pub struct SchedulePolicy {
    metrics: MetricsHandle,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulePolicy {
    #[inline]
    pub fn new() -> Self {
        Self {
            metrics: noop_metrics(),
        }
    }

    #[inline]
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Compute placement constraints for `workload` on the executor `executor_name` of `kind`.
    ///
    /// Rules:
    /// - `ENABLETAG` off: unconstrained result, whatever the kind or payload;
    /// - excluded kinds (`CHRONOS`, `EDAS`, `FLINK`): unconstrained result;
    /// - unknown kind: [`CoreError::KindNotRecognized`];
    /// - payload not matching the kind: [`CoreError::NotRecognizedRuntimeType`] / [`CoreError::NotRecognizedJobType`].
    #[instrument(
        level = "debug",
        skip(self, config, workload),
        fields(executor = %executor_name, kind = kind, obj = workload.obj_name())
    )]
    pub fn evaluate(
        &self,
        config: &ClusterConfig,
        executor_name: &Name,
        kind: &str,
        workload: &Workload,
    ) -> Result<ScheduleResult, CoreError> {
        match self.dispatch(config, executor_name, kind, workload) {
            Ok((result, outcome)) => {
                self.metrics.record_schedule(kind, outcome);
                debug!(outcome = outcome.as_label(), "workload scheduled");
                Ok(result)
            }
            Err(e) => {
                self.metrics.record_schedule(kind, ScheduleOutcome::Rejected);
                debug!(error = %e, "workload rejected");
                Err(e)
            }
        }
    }

    fn dispatch(
        &self,
        config: &ClusterConfig,
        executor_name: &Name,
        kind: &str,
        workload: &Workload,
    ) -> Result<(ScheduleResult, ScheduleOutcome), CoreError> {
        if !config.enable_label_schedule() {
            return Ok((ScheduleResult::unconstrained(), ScheduleOutcome::Disabled));
        }

        let executor_kind: ExecutorKind = kind
            .parse()
            .map_err(|_| CoreError::KindNotRecognized(kind.to_string()))?;

        let li = match (executor_kind.schedule_class(), workload) {
            (ScheduleClass::Excluded, _) => {
                return Ok((ScheduleResult::unconstrained(), ScheduleOutcome::Excluded));
            }
            (ScheduleClass::ServiceGroup, Workload::ServiceGroup(sg)) => {
                LabelInfo::new(executor_kind, config)
                    .with_label(sg.labels.clone())
                    .with_obj_name(sg.id.clone())
                    .with_selectors(collect_selectors(sg))
            }
            (ScheduleClass::ServiceGroup, other) => {
                return Err(CoreError::NotRecognizedRuntimeType {
                    kind: executor_kind,
                    got: other.shape(),
                });
            }
            (ScheduleClass::Job, Workload::Job(job)) => LabelInfo::new(executor_kind, config)
                .with_label(job.labels.clone())
                .with_obj_name(job.name.clone()),
            (ScheduleClass::Job, other) => {
                return Err(CoreError::NotRecognizedJobType {
                    kind: executor_kind,
                    got: other.shape(),
                });
            }
        };
        let li = li.with_executor_name(executor_name.clone());

        let extra_config = refined_extra_config(&li);
        let decision = run_pipeline(&li);
        trace!(decision = ?decision, "pipeline finished");

        let result = ScheduleResult {
            info: decision.schedule_info(),
            info2: decision.schedule_info2(),
            extra_config,
        };
        Ok((result, ScheduleOutcome::Scheduled))
    }
}

/// [`SchedulePolicy::evaluate`] without metrics.
pub fn label_filter_chain(
    config: &ClusterConfig,
    executor_name: &Name,
    kind: &str,
    workload: &Workload,
) -> Result<ScheduleResult, CoreError> {
    SchedulePolicy::new().evaluate(config, executor_name, kind, workload)
}

/// Declared selectors per service, plus a `location` selector synthesized from
/// `LOCATION-<VALUE>` group labels for services that declare none.
fn collect_selectors(sg: &ServiceGroup) -> ServiceSelectors {
    let legacy: Vec<String> = sg
        .labels
        .with_prefix(LABEL_LOCATION_PREFIX)
        .map(|(value, _)| value.to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .collect();

    let mut out = ServiceSelectors::new();
    for svc in &sg.services {
        let mut selectors = svc.selectors.clone();
        if !legacy.is_empty() && !selectors.contains(SELECTOR_LOCATION) {
            selectors.insert(SELECTOR_LOCATION, Selector::new(legacy.iter().cloned()));
        }
        if !selectors.is_empty() {
            out.insert(svc.name.clone(), selectors);
        }
    }
    out
}

/// Options of the refined org entry with its matching workspace entry laid on top.
fn refined_extra_config(li: &LabelInfo<'_>) -> Option<Options> {
    let org = li.executor_config.refined_org(li.org()?)?;
    let extra = match li.workspace().and_then(|ws| org.workspace(&ws)) {
        Some(ws) => org.options.merged(&ws.options),
        None => org.options.clone(),
    };
    Some(extra)
}
