mod domain;
pub use domain::constants;
pub use domain::{Labels, Selector, Selectors, ServiceSelectors};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{ExecutorKind, Kind, Name, ScheduleClass};

mod config;
pub use config::{ClusterConfig, ExecutorConfig, Options, OrgConfig, PlusConfigs, WorkspaceConfig};

mod workload;
pub use workload::{Job, Service, ServiceGroup, Workload};

mod schedule;
pub use schedule::{HostUniqueGroups, ScheduleInfo, ScheduleInfo2};
