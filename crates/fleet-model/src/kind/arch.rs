use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Platform,
    error::{ModelError, ModelResult},
};

/// CPU architecture of a runner fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Arch {
    #[serde(rename = "arm")]
    Arm,
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Arch {
    /// Name as written in runner configuration (`arm` or `x86_64`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm => "arm",
            Arch::X86_64 => "x86_64",
        }
    }

    /// Architecture value used by EC2 image filters, qualified by platform.
    ///
    /// e.g. `arm64_mac`, `x86_64_linux`.
    pub fn image_arch(&self, platform: Platform) -> String {
        match self {
            Arch::Arm => format!("arm64_{platform}"),
            Arch::X86_64 => format!("x86_64_{platform}"),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arm" => Ok(Arch::Arm),
            "x86_64" => Ok(Arch::X86_64),
            _ => Err(ModelError::UnknownArch(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_values_only() {
        assert_eq!("arm".parse::<Arch>().unwrap(), Arch::Arm);
        assert_eq!("X86_64".parse::<Arch>().unwrap(), Arch::X86_64);

        for bad in ["arm64", "amd64", "x86-64", ""] {
            assert!(bad.parse::<Arch>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn image_arch_is_platform_qualified() {
        assert_eq!(Arch::Arm.image_arch(Platform::Mac), "arm64_mac");
        assert_eq!(Arch::X86_64.image_arch(Platform::Mac), "x86_64_mac");
        assert_eq!(Arch::Arm.image_arch(Platform::Linux), "arm64_linux");
    }
}
