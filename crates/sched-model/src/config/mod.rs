//! Hierarchical cluster configuration: basic options plus optional per-org / per-workspace overrides.
mod options;
pub use options::Options;

mod plus;
pub use plus::{OrgConfig, PlusConfigs, WorkspaceConfig};

mod cluster;
pub use cluster::{ClusterConfig, ExecutorConfig};
