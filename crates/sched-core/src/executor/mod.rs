//! Executor capability interface.
//!
//! An [`Executor`] is one configured backend instance (a Marathon endpoint, a k8s cluster, ...).
//! The policy computes constraints, the executor turns them into backend requests.
use async_trait::async_trait;
use sched_model::{Kind, Labels, Name};
use serde_json::Value;

mod dry_run;
pub use dry_run::DryRunExecutor;

mod error;
pub use error::ExecutorError;

mod types;
pub use types::{
    CapacityInfo, ExecutorSpec, NodeResource, PrecheckResult, ResourceInfo, StatusCode,
    StatusDesc,
};

/// Lifecycle and introspection surface of a backend.
///
/// Payload-returning calls hand back the backend's response as opaque JSON.
#[async_trait]
pub trait Executor: Send + Sync {
    fn kind(&self) -> &Kind;
    fn name(&self) -> &Name;

    async fn create(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError>;
    async fn destroy(&self, spec: &ExecutorSpec) -> Result<(), ExecutorError>;
    /// Like [`Executor::destroy`], also dropping backend-side history.
    async fn remove(&self, spec: &ExecutorSpec) -> Result<(), ExecutorError>;
    async fn update(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError>;
    async fn inspect(&self, spec: &ExecutorSpec) -> Result<Value, ExecutorError>;
    async fn status(&self, spec: &ExecutorSpec) -> Result<StatusDesc, ExecutorError>;

    async fn cancel(&self, _spec: &ExecutorSpec) -> Result<Value, ExecutorError> {
        Err(self.unsupported("cancel"))
    }

    async fn precheck(&self, _spec: &ExecutorSpec) -> Result<PrecheckResult, ExecutorError> {
        Ok(PrecheckResult::ok())
    }

    fn capacity_info(&self) -> CapacityInfo {
        CapacityInfo::default()
    }

    async fn resource_info(&self, _brief: bool) -> Result<ResourceInfo, ExecutorError> {
        Err(self.unsupported("resource_info"))
    }

    async fn set_node_labels(&self, _hosts: &[String], _labels: &Labels) -> Result<(), ExecutorError> {
        Err(self.unsupported("set_node_labels"))
    }

    fn unsupported(&self, op: &'static str) -> ExecutorError {
        ExecutorError::Unsupported {
            executor: self.name().to_string(),
            op,
        }
    }
}
