//! Fleet stack assembler.
//!
//! Turns a stage's runner type list into one [`FleetUnit`] per entry. Entries
//! are resolved independently: a bad platform, a missing license or an unreadable
//! template only fails that entry, which is reported in
//! [`StageDefinition::failures`]. Duplicate resource group names are the one
//! stage-wide failure and are checked before anything is emitted.
mod guard;
mod launch;
mod scaling;

use fleet_model::{
    CodeBuildConfig, FleetUnit, Placement, ResolvedLaunchConfig, ResourceGroupKind,
    ResourceGroupSpec, RunnerProps, RunnerType, StageDefinition, Tags, UnitFailure,
};
use tracing::{debug, error, info, instrument};

use crate::{
    codebuild::to_codebuild_fleets,
    context::DeployContext,
    error::{CoreError, CoreResult},
    map::{
        asg_stack_name, linux_group_name, resource_group_name, to_image_query,
        to_platform_profile,
    },
    userdata::{self, TemplateSource, UserDataVars},
};

pub use guard::ensure_unique_groups;

/// Tag key linking shared-tenancy instances to their per-stage group.
pub const TAG_RUNNER_GROUP: &str = "RunnerGroup";

/// Builds deploy definitions for one stage.
pub struct FleetAssembler<'a, S: TemplateSource + ?Sized> {
    ctx: &'a DeployContext,
    templates: &'a S,
    codebuild: Option<&'a CodeBuildConfig>,
}

impl<'a, S: TemplateSource + ?Sized> FleetAssembler<'a, S> {
    pub fn new(ctx: &'a DeployContext, templates: &'a S) -> Self {
        Self {
            ctx,
            templates,
            codebuild: None,
        }
    }

    /// Also emit CodeBuild fleet projects for this stage.
    pub fn with_codebuild(mut self, cfg: &'a CodeBuildConfig) -> Self {
        self.codebuild = Some(cfg);
        self
    }

    /// Derive the launch configuration of a single runner type.
    pub fn resolve(&self, rt: &RunnerType) -> CoreResult<ResolvedLaunchConfig> {
        let profile = to_platform_profile(rt.platform, rt.arch);
        let vars = UserDataVars::new(self.ctx.stage(), &rt.repo, self.ctx.region());
        let user_data = userdata::compose(rt.platform, &vars, self.templates)?;

        Ok(ResolvedLaunchConfig {
            instance_type: profile.instance_type.to_string(),
            root_device_name: profile.root_device_name.to_string(),
            requires_dedicated_host: profile.requires_dedicated_host,
            machine_image_query: to_image_query(rt.platform, rt.arch, &rt.version),
            user_data,
            resource_group_name: resource_group_name(&rt.repo, rt.platform, &rt.version, rt.arch),
        })
    }

    /// Build the deployable unit of a single runner type.
    #[instrument(level = "debug", skip(self, rt, props), fields(repo = %rt.repo, platform = %rt.platform, arch = %rt.arch))]
    pub fn build_unit(&self, rt: RunnerType, props: &RunnerProps) -> CoreResult<FleetUnit> {
        let resolved = self.resolve(&rt)?;

        let (placement, resource_group, tags) = if resolved.requires_dedicated_host {
            let license = props
                .license_for(rt.platform)
                .ok_or(CoreError::MissingLicense {
                    platform: rt.platform,
                    stage: self.ctx.stage(),
                })?;
            (
                Placement::dedicated_host(&resolved.resource_group_name, license),
                Some(host_group(&resolved.resource_group_name)),
                Tags::new(),
            )
        } else {
            (
                Placement::shared(),
                None,
                Tags::single(TAG_RUNNER_GROUP, linux_group_name(self.ctx.stage())),
            )
        };

        let stack_name = asg_stack_name(&rt);
        let launch = launch::to_launch_spec(&rt, resolved, placement, tags, self.ctx);
        let auto_scaling = scaling::to_auto_scaling_spec(&rt, &launch.name, self.ctx)?;
        debug!(stack = %stack_name, instance_type = %launch.resolved.instance_type, "unit built");

        Ok(FleetUnit {
            stack_name,
            termination_protection: true,
            runner: rt,
            launch,
            resource_group,
            auto_scaling,
        })
    }

    /// Assemble the whole stage.
    ///
    /// Returns `Err` only for stage-wide problems (duplicate resource groups,
    /// invalid CodeBuild targets, time formatting). Per-entry problems are
    /// collected into [`StageDefinition::failures`] in input order.
    #[instrument(level = "info", skip(self, props), fields(stage = %self.ctx.stage(), entries = props.runner_types.len()))]
    pub fn assemble(&self, props: &RunnerProps) -> CoreResult<StageDefinition> {
        let parsed: Vec<(usize, CoreResult<RunnerType>)> = props
            .runner_types
            .iter()
            .enumerate()
            .map(|(i, e)| (i, RunnerType::try_from(e).map_err(CoreError::from)))
            .collect();

        ensure_unique_groups(
            parsed
                .iter()
                .filter_map(|(i, r)| r.as_ref().ok().map(|rt| (*i, rt))),
        )?;

        let mut units = Vec::new();
        let mut failures = Vec::new();
        for (index, result) in parsed {
            let entry = &props.runner_types[index];
            match result.and_then(|rt| self.build_unit(rt, props)) {
                Ok(unit) => units.push(unit),
                Err(e) => {
                    error!(index, repo = %entry.repo, platform = %entry.platform, error = %e, "runner type skipped");
                    failures.push(UnitFailure {
                        index,
                        repo: entry.repo.clone(),
                        platform: entry.platform.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let shared = shared_group(&linux_group_name(self.ctx.stage()));
        let mut shared_resource_groups = Vec::new();
        if let ResourceGroupKind::TagQuery { tag_filters, .. } = &shared.kind {
            if units.iter().any(|u| u.launch.tags.satisfies(tag_filters)) {
                shared_resource_groups.push(shared);
            }
        }

        let codebuild = match self.codebuild {
            Some(cfg) => to_codebuild_fleets(cfg, self.ctx)?,
            None => Vec::new(),
        };

        info!(
            units = units.len(),
            failures = failures.len(),
            codebuild = codebuild.len(),
            "stage assembled"
        );

        Ok(StageDefinition {
            stage: self.ctx.stage(),
            account: self.ctx.account().to_string(),
            region: self.ctx.region().to_string(),
            deployed_at: self.ctx.deployed_at_rfc3339()?,
            units,
            shared_resource_groups,
            codebuild,
            failures,
        })
    }
}

fn host_group(name: &str) -> ResourceGroupSpec {
    ResourceGroupSpec {
        name: name.to_string(),
        description: "Host resource group for finchs infrastructure".to_string(),
        kind: ResourceGroupKind::HostManagement {
            auto_allocate_host: true,
            auto_release_host: true,
            any_host_based_license_configuration: true,
            allowed_resource_types: vec!["AWS::EC2::Host".to_string()],
            deletion_protection: "UNLESS_EMPTY".to_string(),
        },
    }
}

fn shared_group(name: &str) -> ResourceGroupSpec {
    ResourceGroupSpec {
        name: name.to_string(),
        description: "Shared-tenancy runner instances".to_string(),
        kind: ResourceGroupKind::TagQuery {
            resource_types: vec!["AWS::EC2::Instance".to_string()],
            tag_filters: Tags::single(TAG_RUNNER_GROUP, name),
        },
    }
}
