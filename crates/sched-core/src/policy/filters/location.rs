use crate::policy::{LabelInfo, ScheduleDecision};

/// Copy per-service `location` selectors.
pub fn location_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    decision.location = li.locations();
}
