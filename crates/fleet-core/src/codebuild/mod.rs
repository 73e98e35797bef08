//! Reserved-capacity CodeBuild fleets.
//!
//! One project per configured target, each with its own fleet, KMS key and
//! GitHub webhook restricted to the allow-listed actor accounts.
use std::collections::HashSet;

use fleet_model::{CodeBuildConfig, CodeBuildFleetSpec, CodeBuildTarget, MachineImageQuery};
use tracing::debug;

use crate::{
    context::DeployContext,
    error::{CoreError, CoreResult},
    map::{lookup_filters, to_stack_name},
};

const COMPUTE_TYPE: &str = "BUILD_GENERAL1_MEDIUM";
const FLEET_BASE_CAPACITY: u32 = 1;
const GITHUB_TOKEN_SECRET: &str = "codebuild-github-access-token";

/// Build the fleet spec of a single target.
pub fn to_codebuild_fleet(
    target: &CodeBuildTarget,
    cfg: &CodeBuildConfig,
    ctx: &DeployContext,
) -> CoreResult<CodeBuildFleetSpec> {
    let platform_id = format!("{}-{}", target.operating_system, to_stack_name(&target.arch));

    let image = match (&target.ami_search_string, &target.build_image) {
        (Some(pattern), _) => MachineImageQuery::Lookup {
            name: pattern.clone(),
            filters: lookup_filters(&target.arch),
        },
        (None, Some(image)) => MachineImageQuery::Managed {
            image: image.clone(),
        },
        (None, None) => {
            return Err(CoreError::ConfigValidation(format!(
                "codebuild target {}-{} needs amiSearchString or buildImage",
                target.project, platform_id
            )));
        }
    };

    Ok(CodeBuildFleetSpec {
        stack_name: format!("CodeBuildStack-{platform_id}"),
        termination_protection: true,
        project_name: format!("{}-{}-{}-instance", target.project, target.arch, ctx.stage()),
        source_location: format!(
            "https://github.com/{}/{}.git",
            cfg.source_owner, target.project
        ),
        webhook_actor_ids: cfg.allowlisted_account_ids.clone(),
        environment_type: target.environment_type,
        compute_type: COMPUTE_TYPE.to_string(),
        fleet_base_capacity: FLEET_BASE_CAPACITY,
        image,
        build_image_os: target.build_image_os,
        kms_alias: format!("finch-{platform_id}-kms-{}", ctx.region()),
        secret_name: GITHUB_TOKEN_SECRET.to_string(),
    })
}

/// Build every configured target, rejecting duplicate stack names.
pub fn to_codebuild_fleets(
    cfg: &CodeBuildConfig,
    ctx: &DeployContext,
) -> CoreResult<Vec<CodeBuildFleetSpec>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(cfg.targets.len());
    for target in &cfg.targets {
        let spec = to_codebuild_fleet(target, cfg, ctx)?;
        if !seen.insert(spec.stack_name.clone()) {
            return Err(CoreError::ConfigValidation(format!(
                "duplicate codebuild stack {}",
                spec.stack_name
            )));
        }
        debug!(project = %spec.project_name, "codebuild fleet built");
        out.push(spec);
    }
    Ok(out)
}
