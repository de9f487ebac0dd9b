pub mod error;
pub mod executor;
pub mod metrics;
pub mod policy;
pub mod registry;

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::executor::{Executor, ExecutorError, ExecutorSpec};
    pub use crate::policy::{ScheduleResult, SchedulePolicy, label_filter_chain};
    pub use crate::registry::{EventRegistry, ExecutorManager, ExecutorRegistry};
}
