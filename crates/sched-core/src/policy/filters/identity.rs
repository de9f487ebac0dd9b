use sched_model::constants::{
    JOB_KIND_BIGDATA, LABEL_JOB_KIND, LABEL_PACK, LABEL_PLATFORM, LABEL_PROJECT, LABEL_SERVICE_TYPE,
    SERVICE_TYPE_ADDONS, SERVICE_TYPE_DAEMONSET, SERVICE_TYPE_STATELESS,
};
use tracing::trace;

use crate::policy::{LabelInfo, ProjectDecision, ScheduleDecision};

type Check = fn(&mut ScheduleDecision, &LabelInfo<'_>);

/// Sub-checks in evaluation order; `any` reads the others and stays last.
const CHECKS: &[Check] = &[
    job, pack, daemonset, service_type, bigdata, platform, locked, project, any,
];

/// Classify the workload: job, pack, service type, bigdata, platform, project and the `any` slot.
pub fn identity_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    for check in CHECKS {
        check(decision, li);
    }
    trace!(identity = ?decision.identity, project = ?decision.project, "identity resolved");
}

fn is_bigdata(li: &LabelInfo<'_>) -> bool {
    li.label.get(LABEL_JOB_KIND) == Some(JOB_KIND_BIGDATA)
}

fn job(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    d.identity.job = li.executor_kind.is_job_executor() && !is_bigdata(li);
}

fn pack(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    d.identity.pack = li.executor_kind.is_job_executor() && li.label.get(LABEL_PACK) == Some("true");
}

fn daemonset(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    d.identity.daemonset = li.label.get(LABEL_SERVICE_TYPE) == Some(SERVICE_TYPE_DAEMONSET);
}

fn service_type(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    let ty = li.label.get(LABEL_SERVICE_TYPE);
    d.identity.stateful = ty == Some(SERVICE_TYPE_ADDONS);
    d.identity.stateless = ty == Some(SERVICE_TYPE_STATELESS);
}

fn bigdata(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    d.identity.bigdata = li.executor_kind.accepts_bigdata() && is_bigdata(li);
}

fn platform(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    d.identity.platform = li.label.contains(LABEL_PLATFORM) || li.platform_selected();
}

fn locked(d: &mut ScheduleDecision, _: &LabelInfo<'_>) {
    d.identity.unlocked = true;
}

/// Deprecated: a project id pins only when the basic config or `PRESERVEPROJECTS` names it.
fn project(d: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    let cfg = li.executor_config;
    d.project = match li.label.get_non_empty(LABEL_PROJECT) {
        Some(id) if cfg.basic.contains(id) || cfg.preserve_projects().iter().any(|p| p == id) => {
            ProjectDecision::Pinned(id.to_string())
        }
        _ => ProjectDecision::Unpinned,
    };
}

fn any(d: &mut ScheduleDecision, _: &LabelInfo<'_>) {
    d.identity.any = !d.identity.bigdata && d.project == ProjectDecision::Unpinned;
}
