use serde::{Deserialize, Serialize};

use crate::Tags;

/// Resource group configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResourceGroupKind {
    /// Host resource group that allocates and releases dedicated hosts on demand.
    #[serde(rename_all = "camelCase")]
    HostManagement {
        auto_allocate_host: bool,
        auto_release_host: bool,
        any_host_based_license_configuration: bool,
        allowed_resource_types: Vec<String>,
        deletion_protection: String,
    },
    /// Plain tag-based group used for management of shared-tenancy instances.
    #[serde(rename_all = "camelCase")]
    TagQuery {
        resource_types: Vec<String>,
        tag_filters: Tags,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupSpec {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: ResourceGroupKind,
}

impl ResourceGroupSpec {
    pub fn is_host_management(&self) -> bool {
        matches!(self.kind, ResourceGroupKind::HostManagement { .. })
    }
}
