//! Static deploy configuration.
//!
//! Two JSON documents, each with one section per stage:
//! - `env-config.json`: `envPipeline`, `envBeta`, `envProd`, `envRelease`
//! - `runner-config.json`: `runnerBeta`, `runnerProd`, `runnerRelease`, optional `codebuild`
//!
//! Every required section is checked before anything is resolved.
use std::{fs, path::Path};

use fleet_model::{CodeBuildConfig, Environment, RunnerProps, Stage};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

pub const ENV_CONFIG_FILE: &str = "env-config.json";
pub const RUNNER_CONFIG_FILE: &str = "runner-config.json";

/// Account/region per stage, plus the pipeline account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub pipeline: Environment,
    pub beta: Environment,
    pub prod: Environment,
    pub release: Environment,
}

impl EnvConfig {
    pub fn from_value(doc: &Value) -> CoreResult<Self> {
        Ok(Self {
            pipeline: section(doc, "envPipeline")?,
            beta: section(doc, "envBeta")?,
            prod: section(doc, "envProd")?,
            release: section(doc, "envRelease")?,
        })
    }

    pub fn for_stage(&self, stage: Stage) -> &Environment {
        match stage {
            Stage::Beta => &self.beta,
            Stage::Prod => &self.prod,
            Stage::Release => &self.release,
        }
    }
}

/// Runner types and licenses per stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub beta: RunnerProps,
    pub prod: RunnerProps,
    pub release: RunnerProps,
    pub codebuild: CodeBuildConfig,
}

impl RunnerConfig {
    pub fn from_value(doc: &Value) -> CoreResult<Self> {
        let codebuild = match doc.get("codebuild") {
            Some(v) if !v.is_null() => parse("codebuild", v)?,
            _ => CodeBuildConfig::default(),
        };
        Ok(Self {
            beta: section(doc, "runnerBeta")?,
            prod: section(doc, "runnerProd")?,
            release: section(doc, "runnerRelease")?,
            codebuild,
        })
    }

    pub fn for_stage(&self, stage: Stage) -> &RunnerProps {
        match stage {
            Stage::Beta => &self.beta,
            Stage::Prod => &self.prod,
            Stage::Release => &self.release,
        }
    }
}

/// Both configuration documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployConfig {
    pub env: EnvConfig,
    pub runners: RunnerConfig,
}

impl DeployConfig {
    /// Load [`ENV_CONFIG_FILE`] and [`RUNNER_CONFIG_FILE`] from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> CoreResult<Self> {
        let dir = dir.as_ref();
        let env = EnvConfig::from_value(&read_json(&dir.join(ENV_CONFIG_FILE))?)?;
        let runners = RunnerConfig::from_value(&read_json(&dir.join(RUNNER_CONFIG_FILE))?)?;
        debug!(dir = %dir.display(), "deploy configuration loaded");
        Ok(Self { env, runners })
    }
}

fn read_json(path: &Path) -> CoreResult<Value> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw).map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))
}

fn section<T: DeserializeOwned>(doc: &Value, name: &str) -> CoreResult<T> {
    match doc.get(name) {
        Some(v) if !v.is_null() => parse(name, v),
        _ => Err(CoreError::ConfigValidation(format!(
            "{name} must be specified"
        ))),
    }
}

fn parse<T: DeserializeOwned>(name: &str, v: &Value) -> CoreResult<T> {
    serde_json::from_value(v.clone()).map_err(|e| CoreError::Config(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn env_doc() -> Value {
        json!({
            "envPipeline": {"account": "111111111111", "region": "us-west-2"},
            "envBeta": {"account": "222222222222", "region": "us-west-2"},
            "envProd": {"account": "333333333333", "region": "us-east-1"},
            "envRelease": {"account": "444444444444", "region": "us-east-2"}
        })
    }

    #[test]
    fn env_config_selects_stage_section() {
        let cfg = EnvConfig::from_value(&env_doc()).unwrap();
        assert_eq!(cfg.for_stage(Stage::Prod).region(), Some("us-east-1"));
        assert_eq!(cfg.pipeline.account(), Some("111111111111"));
    }

    #[test]
    fn missing_section_is_named() {
        let mut doc = env_doc();
        doc.as_object_mut().unwrap().remove("envRelease");

        match EnvConfig::from_value(&doc) {
            Err(CoreError::ConfigValidation(msg)) => assert_eq!(msg, "envRelease must be specified"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn null_section_counts_as_missing() {
        let doc = json!({"runnerBeta": {}, "runnerProd": null, "runnerRelease": {}});
        match RunnerConfig::from_value(&doc) {
            Err(CoreError::ConfigValidation(msg)) => assert!(msg.contains("runnerProd")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn runner_config_parses_types_and_defaults_codebuild() {
        let doc = json!({
            "runnerBeta": {
                "macLicenseArn": "arn:aws:license-manager:us-west-2:1:license-configuration:lic-mac",
                "runnerTypes": [
                    {"platform": "mac", "version": "13.2", "arch": "arm", "repo": "finch", "desiredInstances": 2,
                     "availabilityZones": ["us-west-2a"]}
                ]
            },
            "runnerProd": {"runnerTypes": []},
            "runnerRelease": {"runnerTypes": []}
        });

        let cfg = RunnerConfig::from_value(&doc).unwrap();
        let beta = cfg.for_stage(Stage::Beta);
        assert_eq!(beta.runner_types.len(), 1);
        assert_eq!(beta.runner_types[0].desired_instances, 2);
        assert!(beta.mac_license_arn.is_some());
        assert!(cfg.codebuild.targets.is_empty());
    }

    #[test]
    fn malformed_section_reports_config_error() {
        let doc = json!({
            "runnerBeta": {"runnerTypes": [{"platform": "mac"}]},
            "runnerProd": {},
            "runnerRelease": {}
        });
        match RunnerConfig::from_value(&doc) {
            Err(CoreError::Config(msg)) => assert!(msg.starts_with("runnerBeta:")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ENV_CONFIG_FILE), env_doc().to_string()).unwrap();
        fs::write(
            dir.path().join(RUNNER_CONFIG_FILE),
            json!({"runnerBeta": {}, "runnerProd": {}, "runnerRelease": {}}).to_string(),
        )
        .unwrap();

        let cfg = DeployConfig::load(dir.path()).unwrap();
        assert_eq!(cfg.env.beta.account(), Some("222222222222"));
        assert!(cfg.runners.release.runner_types.is_empty());
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DeployConfig::load(dir.path()),
            Err(CoreError::Config(_))
        ));
    }
}
