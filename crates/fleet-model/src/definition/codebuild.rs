use serde::{Deserialize, Serialize};

use crate::{BuildImageOs, EnvironmentType, MachineImageQuery};

/// Reserved-capacity CodeBuild project with its fleet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBuildFleetSpec {
    pub stack_name: String,
    pub termination_protection: bool,
    pub project_name: String,
    pub source_location: String,
    /// Actor account ids; each becomes one `WORKFLOW_JOB_QUEUED` webhook filter group.
    pub webhook_actor_ids: Vec<String>,
    pub environment_type: EnvironmentType,
    pub compute_type: String,
    pub fleet_base_capacity: u32,
    pub image: MachineImageQuery,
    /// Build-image class the image is wrapped in.
    pub build_image_os: BuildImageOs,
    pub kms_alias: String,
    pub secret_name: String,
}
