//! Prometheus metrics backend for the label scheduler.
//!
//! [`PrometheusMetrics`] implements [`sched_core::metrics::MetricsBackend`] and keeps its
//! counters in a `prometheus::Registry`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use sched_core::prelude::*;
//! use sched_prometheus::{Encoder, PrometheusMetrics, TextEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let policy = SchedulePolicy::new().with_metrics(Arc::new(metrics.clone()));
//! let registry = ExecutorRegistry::new().with_metrics(Arc::new(metrics.clone()));
//! # let _ = (policy, registry);
//!
//! let families = metrics.gather();
//! let mut buf = Vec::new();
//! TextEncoder::new().encode(&families, &mut buf)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `sched_schedule_requests_total{kind, outcome}`
//! - `sched_executors_created_total{kind}`
//! - `sched_registry_errors_total{kind, error_kind}`
//!
//! No HTTP endpoint is provided; serve [`PrometheusMetrics::gather`] from the host application.

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
