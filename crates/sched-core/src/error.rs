use sched_model::{ExecutorKind, ModelError};
use thiserror::Error;

use crate::executor::ExecutorError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("NOT_RECOGNIZED_RUNTIME_TYPE: executor kind {kind} expects a service group, got {got}")]
    NotRecognizedRuntimeType {
        kind: ExecutorKind,
        got: &'static str,
    },

    #[error("NOT_RECOGNIZED_JOB_TYPE: executor kind {kind} expects a job, got {got}")]
    NotRecognizedJobType {
        kind: ExecutorKind,
        got: &'static str,
    },

    #[error("kind not recognized: {0}")]
    KindNotRecognized(String),

    #[error("invalid executor kind: {0}")]
    InvalidKind(String),

    #[error("executor kind already registered: {0}")]
    DuplicateKind(String),

    #[error("executor kind not registered: {0}")]
    KindNotRegistered(String),

    #[error("event channel already registered for executor: {0}")]
    DuplicateEventChannel(String),

    #[error("no event channel registered for executor: {0}")]
    EventChannelNotFound(String),

    #[error("executor not found: {0}")]
    ExecutorNotFound(String),

    #[error("executor already exists: {0}")]
    DuplicateExecutor(String),

    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl CoreError {
    /// Short label value for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            CoreError::NotRecognizedRuntimeType { .. } => "not_recognized_runtime_type",
            CoreError::NotRecognizedJobType { .. } => "not_recognized_job_type",
            CoreError::KindNotRecognized(_) => "kind_not_recognized",
            CoreError::InvalidKind(_) => "invalid_kind",
            CoreError::DuplicateKind(_) => "duplicate_kind",
            CoreError::KindNotRegistered(_) => "kind_not_registered",
            CoreError::DuplicateEventChannel(_) => "duplicate_event_channel",
            CoreError::EventChannelNotFound(_) => "event_channel_not_found",
            CoreError::ExecutorNotFound(_) => "executor_not_found",
            CoreError::DuplicateExecutor(_) => "duplicate_executor",
            CoreError::Executor(_) => "executor",
            CoreError::Model(_) => "model",
        }
    }
}
