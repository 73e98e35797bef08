use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use time::UtcOffset;

use crate::logger::error::LoggerError;

/// Timezone for log timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone, detected once at logger init.
    Local,
}

impl LoggerTimeZone {
    /// Resolves the offset to stamp events with.
    ///
    /// Local detection only succeeds while the process is single-threaded;
    /// otherwise UTC is used.
    pub fn offset(self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}

impl Serialize for LoggerTimeZone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LoggerTimeZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
