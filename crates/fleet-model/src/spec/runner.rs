use serde::{Deserialize, Serialize};

use crate::{
    Arch, Platform,
    error::{ModelError, ModelResult},
};

/// Runner type exactly as written in the static runner configuration.
///
/// Platform and architecture are kept as raw strings here so a single bad
/// entry can be reported on its own instead of failing the whole file.
/// Use [`RunnerType::try_from`] to validate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerTypeEntry {
    pub platform: String,
    pub version: String,
    pub arch: String,
    pub repo: String,
    pub desired_instances: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
}

/// Validated runner type descriptor.
///
/// Invariants: `version` and `repo` are non-empty; `platform` and `arch` are
/// members of their closed sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerType {
    pub platform: Platform,
    pub version: String,
    pub arch: Arch,
    pub repo: String,
    pub desired_instances: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
}

impl RunnerType {
    /// Convenience constructor; validates `version` and `repo`.
    pub fn new(
        platform: Platform,
        version: impl Into<String>,
        arch: Arch,
        repo: impl Into<String>,
        desired_instances: u32,
    ) -> ModelResult<Self> {
        let rt = Self {
            platform,
            version: version.into().trim().to_string(),
            arch,
            repo: repo.into().trim().to_string(),
            desired_instances,
            availability_zones: Vec::new(),
        };
        rt.validate()?;
        Ok(rt)
    }

    /// Attach availability zones.
    pub fn with_availability_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Major version: the part of `version` before the first `.`, or all of it.
    pub fn version_major(&self) -> &str {
        major_version(&self.version)
    }

    /// Tuple that must be unique among the runner types of one stage.
    pub fn group_key(&self) -> (&str, Platform, &str, Arch) {
        (&self.repo, self.platform, self.version_major(), self.arch)
    }

    fn validate(&self) -> ModelResult<()> {
        if self.version.is_empty() {
            return Err(ModelError::Invalid(format!(
                "runner type for repo '{}' has an empty version",
                self.repo
            )));
        }
        if self.version_major().is_empty() {
            return Err(ModelError::Invalid(format!(
                "version '{}' has no major component",
                self.version
            )));
        }
        if self.repo.is_empty() {
            return Err(ModelError::Invalid("runner type has an empty repo".into()));
        }
        Ok(())
    }
}

impl TryFrom<&RunnerTypeEntry> for RunnerType {
    type Error = ModelError;
    fn try_from(e: &RunnerTypeEntry) -> ModelResult<Self> {
        let rt = RunnerType {
            platform: e.platform.parse()?,
            version: e.version.trim().to_string(),
            arch: e.arch.parse()?,
            repo: e.repo.trim().to_string(),
            desired_instances: e.desired_instances,
            availability_zones: e.availability_zones.clone(),
        };
        rt.validate()?;
        Ok(rt)
    }
}

/// Per-stage runner configuration: license identifiers plus the runner types to provision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_license_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_license_arn: Option<String>,
    #[serde(default)]
    pub runner_types: Vec<RunnerTypeEntry>,
}

impl RunnerProps {
    /// License configuration for hosts of the given platform.
    ///
    /// Linux runs on shared tenancy and never carries a license.
    pub fn license_for(&self, platform: Platform) -> Option<&str> {
        let arn = match platform {
            Platform::Mac => self.mac_license_arn.as_deref(),
            Platform::Windows => self.windows_license_arn.as_deref(),
            Platform::Linux => None,
        };
        arn.map(str::trim).filter(|s| !s.is_empty())
    }
}

pub(crate) fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}
