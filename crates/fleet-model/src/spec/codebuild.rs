use serde::{Deserialize, Serialize};

/// Operating system family of a CodeBuild image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildImageOs {
    Linux,
    Windows,
    Mac,
}

/// CodeBuild compute environment type backing a reserved fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentType {
    LinuxEc2,
    WindowsEc2,
    MacArm,
}

/// One reserved-capacity CodeBuild project to create per stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBuildTarget {
    /// Source repository built by this project (e.g. `finch`).
    pub project: String,
    /// Image architecture, e.g. `x86_64` or `arm64`.
    pub arch: String,
    pub operating_system: String,
    /// AMI name pattern; when absent `build_image` is used as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ami_search_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_image: Option<String>,
    pub build_image_os: BuildImageOs,
    pub environment_type: EnvironmentType,
}

fn default_source_owner() -> String {
    "runfinch".to_string()
}

/// CodeBuild section of the runner configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBuildConfig {
    /// GitHub organisation owning every project's source repository.
    #[serde(default = "default_source_owner")]
    pub source_owner: String,
    /// GitHub account ids allowed to trigger builds via `WORKFLOW_JOB_QUEUED`.
    #[serde(default)]
    pub allowlisted_account_ids: Vec<String>,
    #[serde(default)]
    pub targets: Vec<CodeBuildTarget>,
}

impl Default for CodeBuildConfig {
    fn default() -> Self {
        Self {
            source_owner: default_source_owner(),
            allowlisted_account_ids: Vec::new(),
            targets: Vec::new(),
        }
    }
}
