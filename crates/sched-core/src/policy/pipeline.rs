use tracing::trace;

use crate::policy::{
    LabelInfo, ScheduleDecision,
    filters::{
        host_unique_filter, identity_filter, location_filter, org_filter, specific_host_filter,
        workspace_filter,
    },
};

/// One pipeline stage.
pub type LabelFilter = fn(&mut ScheduleDecision, &LabelInfo<'_>);

/// Stages in execution order.
pub const PIPELINE: &[(&str, LabelFilter)] = &[
    ("org", org_filter),
    ("workspace", workspace_filter),
    ("identity", identity_filter),
    ("host-unique", host_unique_filter),
    ("specific-host", specific_host_filter),
    ("location", location_filter),
];

/// Run every stage over a fresh decision record.
pub fn run_pipeline(li: &LabelInfo<'_>) -> ScheduleDecision {
    let mut decision = ScheduleDecision::default();
    for (stage, filter) in PIPELINE {
        filter(&mut decision, li);
        trace!(stage, "label filter applied");
    }
    decision
}
