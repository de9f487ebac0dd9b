use serde::{Deserialize, Serialize};

use crate::{Labels, Selectors};

/// A set of services deployed and scheduled together.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGroup {
    #[serde(default)]
    pub cluster_name: String,
    /// Group identity, e.g. `staging-011`.
    pub id: String,
    /// Group-wide labels; these drive the label pipeline.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

/// One service inside a [`ServiceGroup`].
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique within the group.
    pub name: String,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    /// Declarative placement selectors, an alternative to group labels.
    #[serde(default, skip_serializing_if = "Selectors::is_empty")]
    pub selectors: Selectors,
}

impl ServiceGroup {
    pub fn new(id: impl Into<String>, labels: Labels) -> Self {
        Self {
            id: id.into(),
            labels,
            ..Default::default()
        }
    }

    /// Builder-style helper appending a service.
    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}
