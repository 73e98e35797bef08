use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` directive string.
///
/// The raw expression is kept so it can be echoed back in config dumps
/// (e.g. `"info"` or `"fleet_core=debug,warn"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use fleet_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("fleet_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "fleet_core=debug,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter. The directive was validated on construction,
    /// so the fallback to `info` is unreachable in practice.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        LoggerLevel("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_plain_and_per_crate_directives() {
        for lvl in ["info", "warn", "debug", "fleet_core=trace,fleet_synth=debug,warn"] {
            let parsed = lvl.parse::<LoggerLevel>();
            assert!(parsed.is_ok(), "expected {lvl} to parse, got {parsed:?}");
        }
    }

    #[test]
    fn rejects_unknown_level_names() {
        for lvl in ["fleet_core=chatty", "fleet_synth=verbose,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl} should be rejected");
        }
    }

    #[test]
    fn deserializes_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }
}
