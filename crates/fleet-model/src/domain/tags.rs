use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provider resource tags, applied to launched instances or used as a
/// tag-query filter by a resource group.
///
/// Keys are unique and kept sorted, so two definitions with the same tags
/// serialize identically.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// A one-tag set, the usual shape of a tag-query filter.
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut tags = Self::new();
        tags.insert(key, value);
        tags
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set a tag, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a resource carrying these tags is selected by `filter`.
    ///
    /// Every filter key must be present with exactly the filter's value; extra
    /// tags on the resource are ignored. An empty filter selects nothing.
    pub fn satisfies(&self, filter: &Tags) -> bool {
        !filter.is_empty() && filter.0.iter().all(|(k, v)| self.get(k) == Some(v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::Tags;

    #[test]
    fn insert_replaces_previous_value() {
        let mut tags = Tags::single("PVRE-Reporting", "NONE");
        tags.insert("PVRE-Reporting", "SSM");
        assert_eq!(tags.get("PVRE-Reporting"), Some("SSM"));
    }

    #[test]
    fn serializes_as_sorted_object() {
        let mut tags = Tags::new();
        tags.insert("RunnerGroup", "Beta-LinuxRunnerGroup")
            .insert("PVRE-Reporting", "SSM");

        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(
            json,
            r#"{"PVRE-Reporting":"SSM","RunnerGroup":"Beta-LinuxRunnerGroup"}"#
        );
    }

    #[test]
    fn instance_tags_satisfy_matching_group_filter() {
        let filter = Tags::single("RunnerGroup", "Prod-LinuxRunnerGroup");

        let mut instance = Tags::single("RunnerGroup", "Prod-LinuxRunnerGroup");
        instance.insert("PVRE-Reporting", "SSM");
        assert!(instance.satisfies(&filter));

        let other_stage = Tags::single("RunnerGroup", "Beta-LinuxRunnerGroup");
        assert!(!other_stage.satisfies(&filter));
        assert!(!Tags::single("PVRE-Reporting", "SSM").satisfies(&filter));
    }

    #[test]
    fn empty_filter_selects_nothing() {
        assert!(!Tags::single("a", "1").satisfies(&Tags::new()));
    }
}
