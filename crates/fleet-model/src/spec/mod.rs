mod runner;
pub use runner::{RunnerProps, RunnerType, RunnerTypeEntry};

mod codebuild;
pub use codebuild::{BuildImageOs, CodeBuildConfig, CodeBuildTarget, EnvironmentType};
