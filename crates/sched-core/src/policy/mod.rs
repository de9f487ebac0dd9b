//! Label scheduling policy.
//!
//! A request goes through two passes:
//! 1. [`SchedulePolicy::evaluate`] checks the master switch, dispatches on executor kind and
//!    builds a [`LabelInfo`] from the workload;
//! 2. [`run_pipeline`] feeds it through the label filters into one [`ScheduleDecision`],
//!    which is rendered as [`sched_model::ScheduleInfo`] and [`sched_model::ScheduleInfo2`].
mod chain;
pub use chain::{SchedulePolicy, ScheduleResult, label_filter_chain};

mod decision;
pub use decision::{
    IdentityDecision, OrgDecision, ProjectDecision, ScheduleDecision, WorkspaceDecision,
};

pub mod filters;

mod label_info;
pub use label_info::LabelInfo;

mod pipeline;
pub use pipeline::{LabelFilter, PIPELINE, run_pipeline};
