use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Deployment environment a definition is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Beta,
    Prod,
    Release,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Beta, Stage::Prod, Stage::Release];

    /// Stage name as used in stack and project names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Beta => "Beta",
            Stage::Prod => "Prod",
            Stage::Release => "Release",
        }
    }

    /// Runner label injected into user data.
    ///
    /// Only release runners pick up release jobs; every other stage is `test`.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Release => "release",
            Stage::Beta | Stage::Prod => "test",
        }
    }

    /// Whether fleets in this stage spin down to zero a day after deploy.
    pub fn schedules_scale_down(&self) -> bool {
        matches!(self, Stage::Beta)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beta" => Ok(Stage::Beta),
            "prod" => Ok(Stage::Prod),
            "release" => Ok(Stage::Release),
            _ => Err(ModelError::UnknownStage(s.to_string())),
        }
    }
}
