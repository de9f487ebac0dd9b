use sched_model::constants::ENABLE_ORG;
use tracing::trace;

use crate::policy::{LabelInfo, OrgDecision, ScheduleDecision};

/// Pin the workload to its org when the refined org entry or the basic config enables it.
pub fn org_filter(decision: &mut ScheduleDecision, li: &LabelInfo<'_>) {
    let Some(org) = li.org() else {
        decision.org = OrgDecision::Unpinned;
        return;
    };

    let refined_enabled = li
        .executor_config
        .refined_org(org)
        .is_some_and(|o| o.options.flag(ENABLE_ORG));

    decision.org = if refined_enabled || li.executor_config.enable_org() {
        OrgDecision::Pinned(org.to_string())
    } else {
        OrgDecision::Unpinned
    };
    trace!(org, refined = refined_enabled, decision = ?decision.org, "org resolved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::filters::testing::{basic, labels, options};
    use sched_model::{
        ClusterConfig, ExecutorKind, OrgConfig, PlusConfigs,
        constants::{ENABLETAG, LABEL_ORG},
    };

    fn run(cfg: &ClusterConfig, label: &[(&str, &str)]) -> OrgDecision {
        let li = LabelInfo::new(ExecutorKind::Marathon, cfg).with_label(labels(label));
        let mut d = ScheduleDecision::default();
        org_filter(&mut d, &li);
        d.org
    }

    #[test]
    fn missing_org_is_unpinned() {
        let cfg = basic(&[(ENABLETAG, "true"), (ENABLE_ORG, "true")]);
        assert_eq!(run(&cfg, &[]), OrgDecision::Unpinned);
    }

    #[test]
    fn basic_flag_pins_org() {
        let cfg = basic(&[(ENABLE_ORG, "TRUE")]);
        assert_eq!(run(&cfg, &[(LABEL_ORG, "1")]), OrgDecision::Pinned("1".into()));

        let cfg = basic(&[(ENABLE_ORG, "false")]);
        assert_eq!(run(&cfg, &[(LABEL_ORG, "1")]), OrgDecision::Unpinned);
    }

    #[test]
    fn refined_org_overrides_disabled_basic() {
        let cfg = ClusterConfig::new(
            options(&[(ENABLETAG, "true")]),
            Some(PlusConfigs {
                orgs: vec![OrgConfig {
                    name: "acme".into(),
                    options: options(&[(ENABLE_ORG, "true")]),
                    workspaces: vec![],
                }],
            }),
        );
        assert_eq!(run(&cfg, &[(LABEL_ORG, "acme")]), OrgDecision::Pinned("acme".into()));
        assert_eq!(run(&cfg, &[(LABEL_ORG, "other")]), OrgDecision::Unpinned);
    }

    #[test]
    fn refined_org_without_flag_defers_to_basic() {
        let cfg = ClusterConfig::new(
            options(&[(ENABLE_ORG, "true")]),
            Some(PlusConfigs {
                orgs: vec![OrgConfig {
                    name: "hangzhou".into(),
                    options: options(&[("CPU_SUBSCRIBE_RATIO", "2")]),
                    workspaces: vec![],
                }],
            }),
        );
        assert_eq!(
            run(&cfg, &[(LABEL_ORG, "hangzhou")]),
            OrgDecision::Pinned("hangzhou".into())
        );
    }
}
