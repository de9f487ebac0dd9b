//! Executor registries.
//!
//! [`ExecutorRegistry`] maps a [`Kind`] to its constructor. It is filled during startup
//! through `&mut self` and then shared read-only (usually behind an `Arc`).
use std::{collections::BTreeMap, fmt, sync::Arc};

use sched_model::{ExecutorConfig, Kind, Name, Options, PlusConfigs};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::CoreError,
    executor::{Executor, ExecutorError},
    metrics::{MetricsHandle, noop_metrics},
};

mod events;
pub use events::{
    EventCbFn, EventChannel, EventOp, EventRegistry, EventStore, GetEventChanFn, StatusEvent,
    pump_events,
};

mod manager;
pub use manager::ExecutorManager;

/// Executor constructor: `(name, cluster_name, options, refined options)`.
pub type CreateFn = Arc<
    dyn Fn(&Name, &str, &Options, Option<&PlusConfigs>) -> Result<Arc<dyn Executor>, ExecutorError>
        + Send
        + Sync,
>;

/// Catalogue of executor constructors keyed by kind.
pub struct ExecutorRegistry {
    factories: BTreeMap<Kind, CreateFn>,
    metrics: MetricsHandle,
}

impl Default for ExecutorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorRegistry {
    #[inline]
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
            metrics: noop_metrics(),
        }
    }

    #[inline]
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Register a constructor for `kind`.
    ///
    /// Fails when `kind` is not `^[A-Z0-9]+$` or is already registered.
    pub fn register<F>(&mut self, kind: &str, ctor: F) -> Result<(), CoreError>
    where
        F: Fn(&Name, &str, &Options, Option<&PlusConfigs>) -> Result<Arc<dyn Executor>, ExecutorError>
            + Send
            + Sync
            + 'static,
    {
        let k = Kind::new(kind).map_err(|_| {
            self.metrics.record_registry_error(kind, "invalid_kind");
            CoreError::InvalidKind(kind.to_string())
        })?;
        if self.factories.contains_key(&k) {
            self.metrics.record_registry_error(kind, "duplicate_kind");
            return Err(CoreError::DuplicateKind(kind.to_string()));
        }
        self.factories.insert(k, Arc::new(ctor));
        debug!(kind, "executor kind registered");
        Ok(())
    }

    /// Returns `true` if a constructor exists for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        Kind::new(kind).is_ok_and(|k| self.factories.contains_key(&k))
    }

    /// Registered kinds in lexicographic order.
    pub fn kinds(&self) -> impl Iterator<Item = &Kind> {
        self.factories.keys()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the executor described by `cfg`.
    #[instrument(level = "debug", skip(self, cfg), fields(kind = %cfg.kind, executor = %cfg.name))]
    pub fn create(&self, cfg: &ExecutorConfig) -> Result<Arc<dyn Executor>, CoreError> {
        let kind = Kind::new(cfg.kind.as_str())
            .map_err(|_| CoreError::InvalidKind(cfg.kind.clone()))?;
        let ctor = self.factories.get(&kind).ok_or_else(|| {
            self.metrics.record_registry_error(kind.as_str(), "kind_not_registered");
            CoreError::KindNotRegistered(cfg.kind.clone())
        })?;

        let name = Name::new(cfg.name.as_str());
        let executor = ctor(&name, &cfg.cluster_name, &cfg.options, cfg.options_plus.as_ref())
            .map_err(|e| {
                warn!(error = %e, "executor constructor failed");
                self.metrics.record_registry_error(kind.as_str(), e.as_label());
                CoreError::from(e)
            })?;

        self.metrics.record_executor_created(kind.as_str());
        info!(cluster = %cfg.cluster_name, "executor created");
        Ok(executor)
    }
}

impl fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("kinds", &self.factories.keys().collect::<Vec<_>>())
            .field("metrics", &"<handle>")
            .finish()
    }
}
