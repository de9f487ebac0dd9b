mod service_group;
pub use service_group::{Service, ServiceGroup};

mod job;
pub use job::Job;

use serde::{Deserialize, Serialize};

use crate::{Labels, ModelError, ModelResult};

/// Deployable unit handed to the label pipeline.
///
/// Which variant is acceptable depends on the executor kind (see [`crate::ScheduleClass`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Workload {
    /// Group of long running services.
    ServiceGroup(ServiceGroup),
    /// Single batch job.
    Job(Job),
}

impl Workload {
    /// Parse the externally tagged JSON form (`{"serviceGroup": {..}}` / `{"job": {..}}`).
    pub fn from_json(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw).map_err(|e| ModelError::Invalid(e.to_string()))
    }

    /// Workload-level labels.
    pub fn labels(&self) -> &Labels {
        match self {
            Workload::ServiceGroup(sg) => &sg.labels,
            Workload::Job(job) => &job.labels,
        }
    }

    /// Identifier used in diagnostics.
    pub fn obj_name(&self) -> &str {
        match self {
            Workload::ServiceGroup(sg) => &sg.id,
            Workload::Job(job) => &job.name,
        }
    }

    /// Returns the shape name as a static string.
    pub fn shape(&self) -> &'static str {
        match self {
            Workload::ServiceGroup(_) => "serviceGroup",
            Workload::Job(_) => "job",
        }
    }
}

impl From<ServiceGroup> for Workload {
    fn from(sg: ServiceGroup) -> Self {
        Workload::ServiceGroup(sg)
    }
}

impl From<Job> for Workload {
    fn from(job: Job) -> Self {
        Workload::Job(job)
    }
}
