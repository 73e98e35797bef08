use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the provisioning engine should pick a machine image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MachineImageQuery {
    /// Name-pattern search narrowed by EC2 `describe-images` filters.
    ///
    /// Match cardinality is checked by the engine's lookup, not here.
    Lookup {
        name: String,
        filters: BTreeMap<String, Vec<String>>,
    },
    /// A single provider-managed image family (latest version at deploy time).
    Managed { image: String },
}

impl MachineImageQuery {
    /// Name pattern of a lookup query.
    pub fn name_pattern(&self) -> Option<&str> {
        match self {
            MachineImageQuery::Lookup { name, .. } => Some(name),
            MachineImageQuery::Managed { .. } => None,
        }
    }

    /// Values of a single lookup filter.
    pub fn filter(&self, key: &str) -> Option<&[String]> {
        match self {
            MachineImageQuery::Lookup { filters, .. } => filters.get(key).map(Vec::as_slice),
            MachineImageQuery::Managed { .. } => None,
        }
    }
}
