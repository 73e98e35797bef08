use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Operating system family a runner fleet is built for.
///
/// The set is closed: every resolver matches on it exhaustively, so adding a
/// variant forces each of them to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Mac, Platform::Windows, Platform::Linux];

    /// Canonical lowercase name, used verbatim in resource and stack names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Whether instances of this platform must be placed on dedicated hosts.
    pub fn requires_dedicated_host(&self) -> bool {
        match self {
            Platform::Mac | Platform::Windows => true,
            Platform::Linux => false,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mac" => Ok(Platform::Mac),
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            _ => Err(ModelError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("MAC".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!(" windows ".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Linux);
    }

    #[test]
    fn rejects_unknown_platform() {
        for input in ["", "freebsd", "win", "ubuntu", "macos"] {
            let err = input.parse::<Platform>().unwrap_err();
            assert!(matches!(err, ModelError::UnknownPlatform(_)), "{input:?}");
        }
    }

    #[test]
    fn dedicated_host_only_for_licensed_platforms() {
        assert!(Platform::Mac.requires_dedicated_host());
        assert!(Platform::Windows.requires_dedicated_host());
        assert!(!Platform::Linux.requires_dedicated_host());
    }

    #[test]
    fn display_matches_serde_name() {
        for p in Platform::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{p}\""));
        }
    }
}
