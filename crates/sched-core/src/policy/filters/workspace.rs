use sched_model::{
    Options,
    constants::{ENABLE_WORKSPACE, WORKSPACE_DEV, WORKSPACE_PROD, WORKSPACE_STAGING, WORKSPACE_TEST},
};
use tracing::trace;

use crate::policy::{LabelInfo, ScheduleDecision, WorkspaceDecision};

/// Pin the workload to its workspace, or redirect staging/prod jobs.
///
/// Resolution order:
/// - refined workspace entry (under the resolved org) that enables workspace scheduling;
/// - basic `ENABLE_WORKSPACE`;
/// - job destinations come from the refined entry whenever one exists, enabling or not;
/// - with workspace scheduling off, the deprecated `WORKSPACETAGS` list.
pub fn workspace_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    let Some(ws) = li.workspace() else {
        decision.workspace = WorkspaceDecision::Unpinned;
        return;
    };
    let cfg = li.executor_config;

    let entry = li.org().and_then(|org| cfg.refined_workspace(org, &ws));
    let refined_opts = entry.map(|w| &w.options);

    decision.workspace = if entry.is_some_and(|w| w.options.flag(ENABLE_WORKSPACE))
        || cfg.enable_workspace()
    {
        redirect(li, &ws, refined_opts).unwrap_or_else(|| WorkspaceDecision::Exclusive(ws.clone()))
    } else if cfg
        .workspace_tags()
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&ws))
    {
        WorkspaceDecision::Exclusive(ws.clone())
    } else {
        WorkspaceDecision::Unpinned
    };

    trace!(workspace = %ws, decision = ?decision.workspace, "workspace resolved");
}

/// Staging/prod jobs on job executors may run elsewhere.
///
/// `STAGING_JOB_DEST` / `PROD_JOB_DEST` is read from the refined options first, then basic.
/// Unset (or empty) means dev or test, while reporting the requested workspace.
fn redirect(li: &LabelInfo<'_>, ws: &str, refined: Option<&Options>) -> Option<WorkspaceDecision> {
    if !li.executor_kind.is_job_executor() {
        return None;
    }
    if ws != WORKSPACE_STAGING && ws != WORKSPACE_PROD {
        return None;
    }

    let configured = refined
        .and_then(|o| o.job_dest(ws))
        .or_else(|| li.executor_config.basic.job_dest(ws))
        .map(|dests| {
            dests
                .into_iter()
                .map(|d| d.to_ascii_lowercase())
                .collect::<Vec<_>>()
        })
        .filter(|dests| !dests.is_empty());

    Some(match configured {
        Some(destinations) => WorkspaceDecision::Redirected {
            recorded: destinations.clone(),
            destinations,
        },
        None => WorkspaceDecision::Redirected {
            destinations: vec![WORKSPACE_DEV.to_string(), WORKSPACE_TEST.to_string()],
            recorded: vec![ws.to_string()],
        },
    })
}
