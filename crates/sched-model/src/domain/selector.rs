use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declarative selector attached to a service for one dimension.
///
/// `not = true` negates the match; in that case `values` carries a single entry.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Selector {
    #[serde(default)]
    pub not: bool,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Selector {
    /// Positive selector over the given values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            not: false,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Negated selector for a single value.
    pub fn not(value: impl Into<String>) -> Self {
        Self {
            not: true,
            values: vec![value.into()],
        }
    }

    /// First value of a positive selector, if any.
    ///
    /// Negated selectors never name a value.
    pub fn positive_value(&self) -> Option<&str> {
        if self.not {
            return None;
        }
        self.values
            .first()
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Non-negated, non-empty and its first value is `"true"` (case-insensitive).
    pub fn is_truthy(&self) -> bool {
        self.positive_value()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Selectors of one service keyed by dimension (`org`, `workspace`, `platform`, `location`).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Selectors(pub BTreeMap<String, Selector>);

impl Selectors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, dimension: &str) -> Option<&Selector> {
        self.0.get(dimension)
    }

    pub fn contains(&self, dimension: &str) -> bool {
        self.0.contains_key(dimension)
    }

    pub fn insert(&mut self, dimension: impl Into<String>, selector: Selector) -> &mut Self {
        self.0.insert(dimension.into(), selector);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Selector)> for Selectors {
    fn from_iter<I: IntoIterator<Item = (K, Selector)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }
}

/// Per-service selectors keyed by service name.
///
/// A [`BTreeMap`] keeps iteration lexicographic so "first match wins" lookups are reproducible.
pub type ServiceSelectors = BTreeMap<String, Selectors>;
