use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use sched_model::{Kind, Labels, Name, Options, PlusConfigs};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::executor::{
    Executor, ExecutorError, ExecutorSpec, NodeResource, ResourceInfo, StatusCode, StatusDesc,
};

/// Executor that performs no backend calls.
///
/// Tracks created workloads in memory and echoes the computed constraints back.
/// Usable for every kind; the CLI evaluates against it.
#[derive(Debug)]
pub struct DryRunExecutor {
    kind: Kind,
    name: Name,
    cluster_name: String,
    options: Options,
    workloads: Mutex<BTreeMap<String, StatusCode>>,
    nodes: Mutex<BTreeMap<String, Labels>>,
}

impl DryRunExecutor {
    pub fn new(kind: Kind, name: Name, cluster_name: impl Into<String>, options: Options) -> Self {
        Self {
            kind,
            name,
            cluster_name: cluster_name.into(),
            options,
            workloads: Mutex::new(BTreeMap::new()),
            nodes: Mutex::new(BTreeMap::new()),
        }
    }

    /// Constructor in the shape the executor registry expects.
    pub fn build(
        kind: Kind,
        name: &Name,
        cluster_name: &str,
        options: &Options,
        _plus: Option<&PlusConfigs>,
    ) -> Result<Self, ExecutorError> {
        Ok(Self::new(kind, name.clone(), cluster_name, options.clone()))
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn set_state(&self, spec: &ExecutorSpec, state: Option<StatusCode>) {
        let mut workloads = self.workloads.lock().unwrap_or_else(PoisonError::into_inner);
        let key = spec.workload.obj_name().to_string();
        match state {
            Some(s) => {
                workloads.insert(key, s);
            }
            None => {
                workloads.remove(&key);
            }
        }
    }

    fn state(&self, spec: &ExecutorSpec) -> Option<StatusCode> {
        self.workloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(spec.workload.obj_name())
            .copied()
    }

    fn echo(&self, spec: &ExecutorSpec) -> Value {
        json!({
            "executor": self.name.as_str(),
            "kind": self.kind.as_str(),
            "obj": spec.workload.obj_name(),
            "schedule": spec.schedule,
        })
    }
}

#[async_trait]
impl Executor for DryRunExecutor {
    fn kind(&self) -> &Kind {
        &self.kind
    }

    fn name(&self) -> &Name {
        &self.name
    }

    async fn create(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError> {
        self.set_state(spec, Some(StatusCode::Running));
        info!(executor = %self.name, obj = spec.workload.obj_name(), "dry-run create");
        Ok(self.echo(spec))
    }

    async fn destroy(&self, spec: &ExecutorSpec) -> Result<(), ExecutorError> {
        self.set_state(spec, Some(StatusCode::Stopped));
        debug!(executor = %self.name, obj = spec.workload.obj_name(), "dry-run destroy");
        Ok(())
    }

    async fn remove(&self, spec: &ExecutorSpec) -> Result<(), ExecutorError> {
        self.set_state(spec, None);
        debug!(executor = %self.name, obj = spec.workload.obj_name(), "dry-run remove");
        Ok(())
    }

    async fn update(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError> {
        if self.state(spec).is_none() {
            return Err(ExecutorError::InvalidSpec(format!(
                "{} was never created",
                spec.workload.obj_name()
            )));
        }
        self.set_state(spec, Some(StatusCode::Running));
        Ok(self.echo(spec))
    }

    async fn inspect(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError> {
        let mut out = self.echo(spec);
        out["status"] = json!(self.state(spec).unwrap_or_default());
        Ok(out)
    }

    async fn status(&self, spec: &ExecutorSpec) -> Result<StatusDesc, ExecutorError> {
        Ok(match self.state(spec) {
            Some(s) => StatusDesc::new(s),
            None => StatusDesc::new(StatusCode::Unknown).with_reason("not found"),
        })
    }

    async fn cancel(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError> {
        self.set_state(spec, Some(StatusCode::Stopped));
        Ok(self.echo(spec))
    }

    async fn resource_info(&self, _brief: bool) -> Result<ResourceInfo, ExecutorError> {
        let nodes = self.nodes.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(ResourceInfo {
            nodes: nodes
                .iter()
                .map(|(host, labels)| NodeResource {
                    host: host.clone(),
                    labels: labels.clone(),
                    ..Default::default()
                })
                .collect(),
        })
    }

    async fn set_node_labels(&self, hosts: &[String], labels: &Labels) -> Result<(), ExecutorError> {
        let mut nodes = self.nodes.lock().unwrap_or_else(PoisonError::into_inner);
        for host in hosts {
            let entry = nodes.entry(host.clone()).or_default();
            for (k, v) in labels.iter() {
                entry.insert(k, v);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScheduleResult;
    use sched_model::{Job, Workload};

    fn exec() -> DryRunExecutor {
        DryRunExecutor::new(
            Kind::new("METRONOME").unwrap(),
            Name::new("METRONOMEFORTEST"),
            "test",
            Options::new(),
        )
    }

    fn spec(name: &str) -> ExecutorSpec {
        ExecutorSpec::new(
            Workload::Job(Job::new(name, Labels::new())),
            ScheduleResult::unconstrained(),
        )
    }

    #[tokio::test]
    async fn lifecycle_tracks_state() {
        let e = exec();
        let s = spec("job-1");

        assert_eq!(e.status(&s).await.unwrap().status, StatusCode::Unknown);
        assert!(e.update(&s).await.is_err());

        let out = e.create(&s).await.unwrap();
        assert_eq!(out["obj"], "job-1");
        assert_eq!(out["schedule"]["scheduleInfo"]["isUnLocked"], true);
        assert_eq!(e.status(&s).await.unwrap().status, StatusCode::Running);

        e.destroy(&s).await.unwrap();
        assert_eq!(e.status(&s).await.unwrap().status, StatusCode::Stopped);

        e.remove(&s).await.unwrap();
        assert_eq!(e.status(&s).await.unwrap().status, StatusCode::Unknown);
    }

    #[tokio::test]
    async fn node_labels_show_up_in_resource_info() {
        let e = exec();
        let labels: Labels = [("org-1", "true")].into_iter().collect();
        e.set_node_labels(&["n1".into(), "n2".into()], &labels).await.unwrap();

        let info = e.resource_info(true).await.unwrap();
        assert_eq!(info.nodes.len(), 2);
        assert_eq!(info.nodes_with(&labels).count(), 2);
    }

    #[tokio::test]
    async fn default_precheck_passes() {
        assert!(exec().precheck(&spec("j")).await.unwrap().ok);
    }
}
