use serde::{Deserialize, Serialize};

use crate::{MachineImageQuery, Tags};

/// Machine configuration derived from a single runner type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLaunchConfig {
    pub instance_type: String,
    pub root_device_name: String,
    pub requires_dedicated_host: bool,
    pub machine_image_query: MachineImageQuery,
    pub user_data: String,
    pub resource_group_name: String,
}

/// EBS root volume attached at the platform's root device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootVolume {
    pub device_name: String,
    pub volume_size_gib: u32,
}

/// Tenancy directive of a launch template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// `host` for dedicated-host platforms, `default` otherwise.
    pub tenancy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_resource_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl Placement {
    pub fn shared() -> Self {
        Self {
            tenancy: "default".into(),
            host_resource_group: None,
            license_configuration_arn: None,
        }
    }

    pub fn dedicated_host(group: impl Into<String>, license_arn: impl Into<String>) -> Self {
        Self {
            tenancy: "host".into(),
            host_resource_group: Some(group.into()),
            license_configuration_arn: Some(license_arn.into()),
        }
    }

    pub fn is_dedicated(&self) -> bool {
        self.tenancy == "host"
    }
}

/// Instance role permissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IamPolicySpec {
    pub assumed_by: String,
    pub managed_policies: Vec<String>,
    pub secret_actions: Vec<String>,
    pub secret_resources: Vec<String>,
}

/// Launch template for one runner type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpec {
    pub name: String,
    #[serde(flatten)]
    pub resolved: ResolvedLaunchConfig,
    pub root_volume: RootVolume,
    pub require_imdsv2: bool,
    pub key_pair: String,
    pub placement: Placement,
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
    pub iam: IamPolicySpec,
}
