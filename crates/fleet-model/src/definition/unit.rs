use serde::{Deserialize, Serialize};

use crate::{
    AutoScalingSpec, CodeBuildFleetSpec, LaunchSpec, ResourceGroupSpec, RunnerType, Stage,
};

/// One deployable stack per runner type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetUnit {
    pub stack_name: String,
    pub termination_protection: bool,
    pub runner: RunnerType,
    pub launch: LaunchSpec,
    /// Host resource group; absent for shared-tenancy platforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupSpec>,
    pub auto_scaling: AutoScalingSpec,
}

/// A runner type that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFailure {
    /// Position of the entry in the stage's runner type list.
    pub index: usize,
    pub repo: String,
    pub platform: String,
    pub error: String,
}

/// Everything generated for one stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDefinition {
    pub stage: Stage,
    pub account: String,
    pub region: String,
    /// RFC3339 deploy timestamp the definition was generated for.
    pub deployed_at: String,
    pub units: Vec<FleetUnit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_resource_groups: Vec<ResourceGroupSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codebuild: Vec<CodeBuildFleetSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<UnitFailure>,
}

impl StageDefinition {
    /// `true` when every configured runner type produced a unit.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Look up a unit by stack name.
    pub fn unit(&self, stack_name: &str) -> Option<&FleetUnit> {
        self.units.iter().find(|u| u.stack_name == stack_name)
    }
}
