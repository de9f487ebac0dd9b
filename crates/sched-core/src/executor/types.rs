use std::collections::BTreeMap;

use sched_model::{Labels, Workload};
use serde::{Deserialize, Serialize};

use crate::policy::ScheduleResult;

/// Workload plus the constraints computed for it.
#[derive(Debug, Clone)]
pub struct ExecutorSpec {
    pub workload: Workload,
    pub schedule: ScheduleResult,
}

impl ExecutorSpec {
    pub fn new(workload: Workload, schedule: ScheduleResult) -> Self {
        Self { workload, schedule }
    }
}

/// Coarse runtime state reported by a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    #[default]
    Unknown,
    Pending,
    Running,
    Healthy,
    Unhealthy,
    Stopped,
    Failed,
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDesc {
    pub status: StatusCode,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl StatusDesc {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: String::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

/// Outcome of a pre-flight check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecheckResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
}

impl PrecheckResult {
    pub fn ok() -> Self {
        Self {
            ok: true,
            info: String::new(),
        }
    }

    pub fn rejected(info: impl Into<String>) -> Self {
        Self {
            ok: false,
            info: info.into(),
        }
    }
}

/// Optional platform capabilities (operators, autoscaling) keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityInfo(pub BTreeMap<String, bool>);

impl CapacityInfo {
    pub fn supports(&self, feature: &str) -> bool {
        self.0.get(feature).copied().unwrap_or(false)
    }
}

/// Allocatable and requested resources of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResource {
    pub host: String,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    pub cpu_allocatable: f64,
    pub mem_allocatable: u64,
    pub cpu_request: f64,
    pub mem_request: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    #[serde(default)]
    pub nodes: Vec<NodeResource>,
}

impl ResourceInfo {
    /// Nodes carrying every label in `labels`.
    pub fn nodes_with<'a>(&'a self, labels: &'a Labels) -> impl Iterator<Item = &'a NodeResource> {
        self.nodes
            .iter()
            .filter(move |n| labels.iter().all(|(k, v)| n.labels.get(k) == Some(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_is_uppercase_on_the_wire() {
        let json = serde_json::to_string(&StatusDesc::new(StatusCode::Running)).unwrap();
        assert_eq!(json, r#"{"status":"RUNNING"}"#);
    }

    #[test]
    fn capacity_defaults_to_unsupported() {
        let cap: CapacityInfo = serde_json::from_str(r#"{"elasticsearch":true}"#).unwrap();
        assert!(cap.supports("elasticsearch"));
        assert!(!cap.supports("redis"));
    }

    #[test]
    fn nodes_with_matches_all_labels() {
        let info = ResourceInfo {
            nodes: vec![
                NodeResource {
                    host: "a".into(),
                    labels: [("org-1", "true"), ("workspace-dev", "true")].into_iter().collect(),
                    ..Default::default()
                },
                NodeResource {
                    host: "b".into(),
                    labels: [("org-1", "true")].into_iter().collect(),
                    ..Default::default()
                },
            ],
        };
        let want: Labels = [("org-1", "true"), ("workspace-dev", "true")].into_iter().collect();
        let hosts: Vec<_> = info.nodes_with(&want).map(|n| n.host.as_str()).collect();
        assert_eq!(hosts, vec!["a"]);
    }
}
