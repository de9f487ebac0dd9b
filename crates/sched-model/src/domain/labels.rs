use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat workload labels (`DICE_ORG_NAME`, `SERVICE_TYPE`, ...) based on [`BTreeMap`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Get the value for a key, treating an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Returns `true` if the key is present, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over labels whose key starts with `prefix`, yielding the key remainder and the value.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter()
            .filter_map(move |(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v)))
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn empty_values_are_treated_as_absent() {
        let labels: Labels = [("DICE_ORG_NAME", ""), ("DICE_WORKSPACE", "test")]
            .into_iter()
            .collect();

        assert!(labels.contains("DICE_ORG_NAME"));
        assert_eq!(labels.get_non_empty("DICE_ORG_NAME"), None);
        assert_eq!(labels.get_non_empty("DICE_WORKSPACE"), Some("test"));
    }

    #[test]
    fn with_prefix_strips_the_prefix() {
        let labels: Labels = [
            ("LOCATION-CLUSTER-SERVICE", ""),
            ("DICE_ORG_NAME", "1"),
        ]
        .into_iter()
        .collect();

        let found: Vec<_> = labels.with_prefix("LOCATION-").collect();
        assert_eq!(found, vec![("CLUSTER-SERVICE", "")]);
    }

    #[test]
    fn serde_is_a_plain_object() {
        let mut labels = Labels::new();
        labels.insert("SERVICE_TYPE", "STATELESS");

        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"SERVICE_TYPE":"STATELESS"}"#);
    }
}
