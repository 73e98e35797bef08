mod domain;
pub use domain::{
    DEFAULT_KEY_PAIR, DEFAULT_ROOT_VOLUME_GIB, SCALE_DOWN_DELAY_SECS, TAG_PVRE_REPORTING,
    TAG_PVRE_REPORTING_VALUE,
};
pub use domain::{Environment, Tags};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{Arch, Platform, Stage};

mod spec;
pub use spec::{
    BuildImageOs, CodeBuildConfig, CodeBuildTarget, EnvironmentType, RunnerProps, RunnerType,
    RunnerTypeEntry,
};

mod definition;
pub use definition::{
    AutoScalingSpec, CodeBuildFleetSpec, FleetUnit, HealthCheck, IamPolicySpec, LaunchSpec,
    MachineImageQuery, Placement, ResolvedLaunchConfig, ResourceGroupKind, ResourceGroupSpec,
    RollingUpdate, RootVolume, ScalingProcess, ScheduledAction, StageDefinition, UnitFailure,
};
