use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown architecture: {0} (expected: arm|x86_64)")]
    UnknownArch(String),

    #[error("unknown stage: {0} (expected: beta|prod|release)")]
    UnknownStage(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
