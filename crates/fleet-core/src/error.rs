use std::path::PathBuf;

use fleet_model::{ModelError, Platform, Stage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config validation failed: {0}")]
    ConfigValidation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("environment for stage {stage} is undefined: missing {missing}")]
    AmbiguousEnvironment { stage: Stage, missing: &'static str },

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("invalid runner type: {0}")]
    InvalidRunnerType(String),

    #[error("user data template {path:?} cannot be read: {reason}")]
    MissingTemplateFile { path: PathBuf, reason: String },

    #[error("user data template '{template}' does not contain placeholder {token}")]
    MissingPlaceholder {
        template: String,
        token: &'static str,
    },

    #[error("duplicate resource group '{name}' (runner types #{first} and #{second})")]
    DuplicateResourceGroup {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("no {platform} license configured for stage {stage}")]
    MissingLicense { platform: Platform, stage: Stage },

    #[error("time error: {0}")]
    Time(String),
}

impl From<ModelError> for CoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UnknownPlatform(p) => CoreError::UnsupportedPlatform(p),
            other => CoreError::InvalidRunnerType(other.to_string()),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_maps_to_unsupported_platform() {
        let err: CoreError = ModelError::UnknownPlatform("bsd".into()).into();
        assert!(matches!(err, CoreError::UnsupportedPlatform(ref p) if p == "bsd"));
    }

    #[test]
    fn other_model_errors_map_to_invalid_runner_type() {
        let err: CoreError = ModelError::UnknownArch("riscv".into()).into();
        assert!(matches!(err, CoreError::InvalidRunnerType(_)));
        assert!(err.to_string().contains("riscv"));
    }
}
