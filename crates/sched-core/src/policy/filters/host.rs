use sched_model::{
    HostUniqueGroups,
    constants::{LABEL_HOST_UNIQUE, LABEL_SPECIFIC_HOSTS},
};
use tracing::warn;

use crate::policy::{LabelInfo, ScheduleDecision};

/// Copy the `HOST_UNIQUE` spread groups; malformed JSON is logged and dropped.
pub fn host_unique_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    let Some(raw) = li.label.get_non_empty(LABEL_HOST_UNIQUE) else {
        decision.host_unique = None;
        return;
    };

    decision.host_unique = match serde_json::from_str::<HostUniqueGroups>(raw) {
        Ok(groups) => Some(groups),
        Err(e) => {
            warn!(
                obj = %li.obj_name,
                executor = %li.executor_name,
                value = raw,
                error = %e,
                "ignoring malformed HOST_UNIQUE label"
            );
            None
        }
    };
}

/// Copy the comma separated `SPECIFIC_HOSTS` list.
pub fn specific_host_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    decision.specific_hosts = li
        .label
        .get(LABEL_SPECIFIC_HOSTS)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
}
