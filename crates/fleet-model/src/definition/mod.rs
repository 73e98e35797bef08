//! Deploy-definition records handed to the provisioning engine.
//!
//! Everything here is derived fresh on every run and serialized as camelCase JSON.
mod image;
pub use image::MachineImageQuery;

mod launch;
pub use launch::{IamPolicySpec, LaunchSpec, Placement, ResolvedLaunchConfig, RootVolume};

mod scaling;
pub use scaling::{AutoScalingSpec, HealthCheck, RollingUpdate, ScalingProcess, ScheduledAction};

mod group;
pub use group::{ResourceGroupKind, ResourceGroupSpec};

mod codebuild;
pub use codebuild::CodeBuildFleetSpec;

mod unit;
pub use unit::{FleetUnit, StageDefinition, UnitFailure};
