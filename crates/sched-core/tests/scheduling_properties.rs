use sched_core::prelude::*;
use sched_model::{
    ClusterConfig, ExecutorKind, Job, Labels, Name, OrgConfig, Options, PlusConfigs, ScheduleClass,
    ScheduleInfo, ScheduleInfo2, Selector, Selectors, Service, ServiceGroup, WorkspaceConfig,
    Workload,
};

fn opts(pairs: &[(&str, &str)]) -> Options {
    pairs.iter().copied().collect()
}

fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs.iter().copied().collect()
}

fn basic(pairs: &[(&str, &str)]) -> ClusterConfig {
    ClusterConfig::new(opts(pairs), None)
}

fn workload_for(kind: ExecutorKind, label: Labels) -> Workload {
    match kind.schedule_class() {
        ScheduleClass::Job => Workload::Job(Job::new("job-1", label)),
        _ => Workload::ServiceGroup(
            ServiceGroup::new("sg-1", label).with_service(Service::new("web")),
        ),
    }
}

fn eval(cfg: &ClusterConfig, kind: ExecutorKind, label: &[(&str, &str)]) -> ScheduleResult {
    let name = Name::new(format!("{}FORTEST", kind.as_str()));
    label_filter_chain(cfg, &name, kind.as_str(), &workload_for(kind, labels(label)))
        .expect("evaluation must succeed")
}

fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_a_org_pinned_on_marathon() {
    let cfg = basic(&[("ENABLETAG", "true"), ("ENABLE_ORG", "true")]);
    let res = eval(
        &cfg,
        ExecutorKind::Marathon,
        &[("DICE_ORG_NAME", "1"), ("DICE_WORKSPACE", "test")],
    );

    assert_eq!(res.info.exclusive_likes, strs(&["org-1"]));
    assert_eq!(res.info.un_like_prefixs, strs(&["workspace-", "project-"]));
    assert!(res.info.flag);
}

#[test]
fn scenario_b_staging_job_default_redirect() {
    let cfg = basic(&[("ENABLETAG", "true"), ("ENABLE_WORKSPACE", "true")]);
    let res = eval(&cfg, ExecutorKind::Metronome, &[("DICE_WORKSPACE", "staging")]);

    assert_eq!(res.info.inclusive_likes, strs(&["workspace-dev", "workspace-test"]));
    assert_eq!(res.info2.work_spaces, strs(&["staging"]));
}

#[test]
fn scenario_c_staging_job_configured_redirect() {
    let cfg = basic(&[
        ("ENABLETAG", "true"),
        ("ENABLE_WORKSPACE", "true"),
        ("STAGING_JOB_DEST", "test,prod"),
    ]);
    let res = eval(&cfg, ExecutorKind::Metronome, &[("DICE_WORKSPACE", "staging")]);

    assert_eq!(res.info.inclusive_likes, strs(&["workspace-test", "workspace-prod"]));
    assert!(res.info2.work_spaces.contains(&"test".to_string()));
    assert!(res.info2.work_spaces.contains(&"prod".to_string()));
}

#[test]
fn scenario_d_addons_are_stateful() {
    let cfg = basic(&[("ENABLETAG", "true")]);
    for kind in [ExecutorKind::Marathon, ExecutorKind::K8s, ExecutorKind::EdasV2] {
        let res = eval(&cfg, kind, &[("SERVICE_TYPE", "ADDONS")]);
        assert_eq!(res.info.likes, strs(&["service-stateful"]), "{kind}");
        assert!(res.info2.stateful);
        assert!(res.info.flag);
    }
}

#[test]
fn scenario_e_bigdata_job() {
    let cfg = basic(&[("ENABLETAG", "true")]);
    let res = eval(&cfg, ExecutorKind::Metronome, &[("JOB_KIND", "bigdata")]);

    assert_eq!(res.info.exclusive_likes, strs(&["bigdata"]));
    assert!(res.info2.big_data);
    assert!(!res.info.flag);
}

#[test]
fn scenario_f_malformed_host_unique_is_ignored() {
    let cfg = basic(&[("ENABLETAG", "true"), ("ENABLE_ORG", "true")]);
    let base = [("DICE_ORG_NAME", "acme")];
    let clean = eval(&cfg, ExecutorKind::K8s, &base);
    let broken = eval(
        &cfg,
        ExecutorKind::K8s,
        &[("DICE_ORG_NAME", "acme"), ("HOST_UNIQUE", "not-json")],
    );

    assert!(!broken.info.host_unique);
    assert!(!broken.info2.has_host_unique);
    assert_eq!(broken, clean);
}

#[test]
fn host_unique_groups_are_rendered() {
    let cfg = basic(&[("ENABLETAG", "true")]);
    let res = eval(&cfg, ExecutorKind::K8s, &[("HOST_UNIQUE", r#"[["web","api"],["db"]]"#)]);

    let groups = vec![strs(&["web", "api"]), strs(&["db"])];
    assert!(res.info.host_unique);
    assert_eq!(res.info.host_unique_info, groups);
    assert!(res.info2.has_host_unique);
    assert_eq!(res.info2.host_unique, groups);
}

fn configs() -> Vec<ClusterConfig> {
    let refined = PlusConfigs {
        orgs: vec![OrgConfig {
            name: "acme".into(),
            options: opts(&[("ENABLE_ORG", "true"), ("CPU_SUBSCRIBE_RATIO", "3")]),
            workspaces: vec![WorkspaceConfig {
                name: "prod".into(),
                options: opts(&[("ENABLE_WORKSPACE", "true")]),
            }],
        }],
    };

    vec![
        basic(&[("ENABLETAG", "true")]),
        basic(&[("ENABLETAG", "true"), ("ENABLE_ORG", "true")]),
        basic(&[("ENABLETAG", "true"), ("ENABLE_WORKSPACE", "true")]),
        basic(&[
            ("ENABLETAG", "true"),
            ("ENABLE_ORG", "true"),
            ("ENABLE_WORKSPACE", "true"),
            ("PROD_JOB_DEST", "staging"),
        ]),
        basic(&[("ENABLETAG", "true"), ("WORKSPACETAGS", "staging,prod")]),
        basic(&[("ENABLETAG", "true"), ("PRESERVEPROJECTS", "42")]),
        ClusterConfig::new(opts(&[("ENABLETAG", "true")]), Some(refined)),
    ]
}

fn label_sets() -> Vec<Vec<(&'static str, &'static str)>> {
    vec![
        vec![],
        vec![("DICE_ORG_NAME", "acme"), ("DICE_WORKSPACE", "prod")],
        vec![("DICE_ORG_NAME", "other"), ("DICE_WORKSPACE", "STAGING")],
        vec![("DICE_WORKSPACE", "dev"), ("SERVICE_TYPE", "STATELESS")],
        vec![("DICE_PROJECT", "42"), ("DICE_WORKSPACE", "test")],
        vec![("JOB_KIND", "bigdata"), ("DICE_ORG_NAME", "acme")],
        vec![("PLATFORM", "true"), ("SPECIFIC_HOSTS", "10.0.0.1,10.0.0.2")],
    ]
}

#[test]
fn no_dimension_is_both_pinned_and_excluded() {
    for cfg in configs() {
        for kind in ExecutorKind::ALL {
            for label in label_sets() {
                let info = eval(&cfg, kind, &label).info;
                for prefix in ["org-", "workspace-", "project-"] {
                    if info.un_like_prefixs.iter().any(|p| p == prefix) {
                        let pinned = info
                            .exclusive_likes
                            .iter()
                            .chain(&info.inclusive_likes)
                            .any(|t| t.starts_with(prefix));
                        assert!(!pinned, "{kind} {label:?}: {prefix} pinned and excluded");
                    }
                }
            }
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    for cfg in configs() {
        for kind in ExecutorKind::ALL {
            for label in label_sets() {
                let first = serde_json::to_string(&eval(&cfg, kind, &label)).unwrap();
                let second = serde_json::to_string(&eval(&cfg, kind, &label)).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn disabled_label_schedule_returns_fixed_default() {
    let cfg = basic(&[("ENABLE_ORG", "true"), ("ENABLE_WORKSPACE", "true")]);
    for kind in ExecutorKind::ALL {
        for label in label_sets() {
            let res = eval(&cfg, kind, &label);
            assert_eq!(res, ScheduleResult::unconstrained());
            assert!(res.info.is_un_locked);
            assert!(res.info2.is_un_locked);
        }
    }
}

#[test]
fn excluded_kinds_return_fixed_default() {
    let cfg = basic(&[("ENABLETAG", "true"), ("ENABLE_ORG", "true")]);
    for kind in [ExecutorKind::Chronos, ExecutorKind::Edas, ExecutorKind::Flink] {
        let res = eval(&cfg, kind, &[("DICE_ORG_NAME", "acme")]);
        assert_eq!(res.info, ScheduleInfo::default());
        assert_eq!(res.info2, ScheduleInfo2::default());
        assert_eq!(res.extra_config, None);
    }
}

#[test]
fn bigdata_or_project_never_sets_flag() {
    for cfg in configs() {
        for kind in ExecutorKind::ALL {
            for label in label_sets() {
                let res = eval(&cfg, kind, &label);
                if res.info2.big_data || res.info2.has_project {
                    assert!(!res.info.flag, "{kind} {label:?}");
                    assert!(!res.info2.prefer_job && !res.info2.prefer_stateless);
                }
            }
        }
    }
}

#[test]
fn project_pins_only_when_preserved() {
    let preserved = basic(&[("ENABLETAG", "true"), ("PRESERVEPROJECTS", "42")]);
    let res = eval(&preserved, ExecutorKind::Marathon, &[("DICE_PROJECT", "42")]);
    assert_eq!(res.info.exclusive_likes, strs(&["project-42"]));
    assert!(res.info2.has_project);
    assert_eq!(res.info2.project, "42");
    assert!(!res.info.flag);

    let plain = basic(&[("ENABLETAG", "true")]);
    let res = eval(&plain, ExecutorKind::Marathon, &[("DICE_PROJECT", "42")]);
    assert!(res.info.un_like_prefixs.contains(&"project-".to_string()));
    assert!(!res.info2.has_project);
    assert!(res.info.flag);
}

#[test]
fn enabling_refined_entry_wins_over_basic() {
    let plus = PlusConfigs {
        orgs: vec![OrgConfig {
            name: "acme".into(),
            options: opts(&[("ENABLE_ORG", "true")]),
            workspaces: vec![WorkspaceConfig {
                name: "dev".into(),
                options: opts(&[("ENABLE_WORKSPACE", "true")]),
            }],
        }],
    };
    let cfg = ClusterConfig::new(opts(&[("ENABLETAG", "true")]), Some(plus));

    let res = eval(
        &cfg,
        ExecutorKind::K8s,
        &[("DICE_ORG_NAME", "acme"), ("DICE_WORKSPACE", "DEV")],
    );
    assert_eq!(res.info.exclusive_likes, strs(&["org-acme", "workspace-dev"]));
    assert_eq!(res.info.un_like_prefixs, strs(&["project-"]));

    let extra = res.extra_config.expect("refined org matched");
    assert!(extra.flag("ENABLE_ORG"));
    assert!(extra.flag("ENABLE_WORKSPACE"));
}

#[test]
fn payload_must_match_kind() {
    let cfg = basic(&[("ENABLETAG", "true")]);
    let job = Workload::Job(Job::new("j", Labels::new()));
    let sg = Workload::ServiceGroup(ServiceGroup::new("sg", Labels::new()));

    let err = label_filter_chain(&cfg, &Name::new("K8SFORTEST"), "K8S", &job).unwrap_err();
    assert!(matches!(err, CoreError::NotRecognizedRuntimeType { .. }));

    let err = label_filter_chain(&cfg, &Name::new("K8SJOBFORTEST"), "K8SJOB", &sg).unwrap_err();
    assert!(matches!(err, CoreError::NotRecognizedJobType { .. }));

    let err = label_filter_chain(&cfg, &Name::new("X"), "NOMAD", &sg).unwrap_err();
    assert!(matches!(err, CoreError::KindNotRecognized(k) if k == "NOMAD"));
}

#[test]
fn selectors_override_labels_and_legacy_locations_apply() {
    let cfg = basic(&[("ENABLETAG", "true"), ("ENABLE_ORG", "true")]);
    let org: Selectors = [("org", Selector::new(["acme"]))].into_iter().collect();
    let own_location: Selectors = [("location", Selector::new(["ssd"]))].into_iter().collect();

    let sg = ServiceGroup::new(
        "sg-loc",
        labels(&[("DICE_ORG_NAME", "ignored"), ("LOCATION-GPU", "true")]),
    )
    .with_service(Service::new("api").with_selectors(org))
    .with_service(Service::new("db").with_selectors(own_location));

    let res = label_filter_chain(
        &cfg,
        &Name::new("K8SFORTEST"),
        "K8S",
        &Workload::ServiceGroup(sg),
    )
    .unwrap();

    assert_eq!(res.info.exclusive_likes, strs(&["org-acme"]));
    assert_eq!(res.info.location["api"], Selector::new(["gpu"]));
    assert_eq!(res.info.location["db"], Selector::new(["ssd"]));
    assert_eq!(res.info2.location, res.info.location);
}
