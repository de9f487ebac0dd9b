use std::collections::BTreeMap;

use sched_model::{
    ClusterConfig, ExecutorKind, Labels, Name, Selector, ServiceSelectors,
    constants::{
        LABEL_ORG, LABEL_WORKSPACE, SELECTOR_LOCATION, SELECTOR_ORG, SELECTOR_PLATFORM,
        SELECTOR_WORKSPACE,
    },
};

/// Everything the filters may read about one scheduling request.
///
/// Built once per request and never mutated while the pipeline runs.
#[derive(Debug, Clone)]
pub struct LabelInfo<'a> {
    /// Flat workload labels.
    pub label: Labels,
    pub executor_name: Name,
    pub executor_kind: ExecutorKind,
    /// Configuration model of the target executor.
    pub executor_config: &'a ClusterConfig,
    /// Workload identifier, diagnostics only.
    pub obj_name: String,
    /// Per-service selectors, iterated in service-name order.
    pub selectors: ServiceSelectors,
}

impl<'a> LabelInfo<'a> {
    pub fn new(executor_kind: ExecutorKind, executor_config: &'a ClusterConfig) -> Self {
        Self {
            label: Labels::new(),
            executor_name: Name::default(),
            executor_kind,
            executor_config,
            obj_name: String::new(),
            selectors: ServiceSelectors::new(),
        }
    }

    pub fn with_label(mut self, label: Labels) -> Self {
        self.label = label;
        self
    }

    pub fn with_executor_name(mut self, name: Name) -> Self {
        self.executor_name = name;
        self
    }

    pub fn with_obj_name(mut self, obj_name: impl Into<String>) -> Self {
        self.obj_name = obj_name.into();
        self
    }

    pub fn with_selectors(mut self, selectors: ServiceSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// First positive selector value for `dimension`, scanning services by name.
    pub fn selector_value(&self, dimension: &str) -> Option<&str> {
        self.selectors
            .values()
            .filter_map(|s| s.get(dimension))
            .find_map(Selector::positive_value)
    }

    /// Org name: a selector wins over the `DICE_ORG_NAME` label.
    pub fn org(&self) -> Option<&str> {
        self.selector_value(SELECTOR_ORG)
            .or_else(|| self.label.get_non_empty(LABEL_ORG))
    }

    /// Workspace name, lower-cased.
    pub fn workspace(&self) -> Option<String> {
        self.selector_value(SELECTOR_WORKSPACE)
            .or_else(|| self.label.get_non_empty(LABEL_WORKSPACE))
            .map(str::to_ascii_lowercase)
    }

    /// `true` when at least one service declares a platform selector and every declared one is truthy.
    pub fn platform_selected(&self) -> bool {
        let mut declared = self
            .selectors
            .values()
            .filter_map(|s| s.get(SELECTOR_PLATFORM))
            .peekable();
        declared.peek().is_some() && declared.all(Selector::is_truthy)
    }

    /// Location selectors keyed by service name.
    pub fn locations(&self) -> BTreeMap<String, Selector> {
        self.selectors
            .iter()
            .filter_map(|(svc, s)| s.get(SELECTOR_LOCATION).map(|sel| (svc.clone(), sel.clone())))
            .collect()
    }
}
