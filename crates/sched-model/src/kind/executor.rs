use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Backend technologies the label pipeline knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutorKind {
    Marathon,
    K8s,
    EdasV2,
    Metronome,
    Spark,
    K8sJob,
    K8sSpark,
    Chronos,
    Edas,
    Flink,
}

/// Which workload shape a kind schedules, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleClass {
    /// Never label-scheduled; the pipeline returns its default output.
    Excluded,
    /// Long running services, expects a `ServiceGroup`.
    ServiceGroup,
    /// Batch workloads, expects a `Job`.
    Job,
}

impl ExecutorKind {
    pub const ALL: [ExecutorKind; 10] = [
        ExecutorKind::Marathon,
        ExecutorKind::K8s,
        ExecutorKind::EdasV2,
        ExecutorKind::Metronome,
        ExecutorKind::Spark,
        ExecutorKind::K8sJob,
        ExecutorKind::K8sSpark,
        ExecutorKind::Chronos,
        ExecutorKind::Edas,
        ExecutorKind::Flink,
    ];

    /// Canonical upper-case name, as used in executor configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutorKind::Marathon => "MARATHON",
            ExecutorKind::K8s => "K8S",
            ExecutorKind::EdasV2 => "EDASV2",
            ExecutorKind::Metronome => "METRONOME",
            ExecutorKind::Spark => "SPARK",
            ExecutorKind::K8sJob => "K8SJOB",
            ExecutorKind::K8sSpark => "K8SSPARK",
            ExecutorKind::Chronos => "CHRONOS",
            ExecutorKind::Edas => "EDAS",
            ExecutorKind::Flink => "FLINK",
        }
    }

    pub fn schedule_class(&self) -> ScheduleClass {
        match self {
            ExecutorKind::Chronos | ExecutorKind::Edas | ExecutorKind::Flink => {
                ScheduleClass::Excluded
            }
            ExecutorKind::Marathon | ExecutorKind::K8s | ExecutorKind::EdasV2 => {
                ScheduleClass::ServiceGroup
            }
            ExecutorKind::Metronome
            | ExecutorKind::Spark
            | ExecutorKind::K8sJob
            | ExecutorKind::K8sSpark => ScheduleClass::Job,
        }
    }

    /// Plain batch job executors: the ones that get the `job` tag and workspace redirection.
    pub fn is_job_executor(&self) -> bool {
        matches!(self, ExecutorKind::Metronome | ExecutorKind::K8sJob)
    }

    /// Executors on which `JOB_KIND=bigdata` pins the workload to bigdata hosts.
    pub fn accepts_bigdata(&self) -> bool {
        matches!(
            self,
            ExecutorKind::Metronome
                | ExecutorKind::K8sJob
                | ExecutorKind::Spark
                | ExecutorKind::K8sSpark
                | ExecutorKind::Flink
        )
    }
}

impl FromStr for ExecutorKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        ExecutorKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ModelError::UnknownExecutorKind(s.to_string()))
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScheduleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScheduleClass::Excluded => "excluded",
            ScheduleClass::ServiceGroup => "serviceGroup",
            ScheduleClass::Job => "job",
        };
        f.write_str(s)
    }
}
