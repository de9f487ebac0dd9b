use std::{collections::BTreeMap, sync::Arc};

use sched_model::{ExecutorConfig, Name};
use tracing::info;

use crate::{error::CoreError, executor::Executor, registry::ExecutorRegistry};

/// Configured executor instances keyed by name.
#[derive(Default)]
pub struct ExecutorManager {
    executors: BTreeMap<Name, Arc<dyn Executor>>,
}

impl ExecutorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured executor through `registry`.
    ///
    /// Stops at the first failing config or duplicate name.
    pub fn from_configs(
        registry: &ExecutorRegistry,
        configs: &[ExecutorConfig],
    ) -> Result<Self, CoreError> {
        let mut mgr = Self::new();
        for cfg in configs {
            let name = Name::new(cfg.name.as_str());
            if mgr.executors.contains_key(&name) {
                return Err(CoreError::DuplicateExecutor(cfg.name.clone()));
            }
            mgr.insert(registry.create(cfg)?)?;
        }
        info!(count = mgr.len(), "executors loaded");
        Ok(mgr)
    }

    /// Add an already built executor.
    pub fn insert(&mut self, executor: Arc<dyn Executor>) -> Result<(), CoreError> {
        let name = executor.name().clone();
        if self.executors.contains_key(&name) {
            return Err(CoreError::DuplicateExecutor(name.to_string()));
        }
        self.executors.insert(name, executor);
        Ok(())
    }

    pub fn get(&self, name: &Name) -> Result<Arc<dyn Executor>, CoreError> {
        self.executors
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::ExecutorNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.executors.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Arc<dyn Executor>)> {
        self.executors.iter()
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}
