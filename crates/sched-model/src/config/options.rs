use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    PROD_JOB_DEST, STAGING_JOB_DEST, WORKSPACE_PROD, WORKSPACE_STAGING,
};

/// Flat string options of an executor, an org or a workspace.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Options(pub BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Boolean flag: present and equal to `"true"` (case-insensitive).
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Comma separated list; entries are trimmed and empty ones dropped.
    ///
    /// `None` when the key is absent.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Job destination list for `staging` / `prod`, `None` for other workspaces or when unset.
    pub fn job_dest(&self, workspace: &str) -> Option<Vec<String>> {
        let key = match workspace {
            WORKSPACE_STAGING => STAGING_JOB_DEST,
            WORKSPACE_PROD => PROD_JOB_DEST,
            _ => return None,
        };
        self.list(key)
    }

    /// Copy of `self` with every entry of `other` laid on top.
    pub fn merged(&self, other: &Options) -> Options {
        let mut out = self.0.clone();
        out.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Options(out)
    }
}

impl<K, V> FromIterator<(K, V)> for Options
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
