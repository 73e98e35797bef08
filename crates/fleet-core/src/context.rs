use std::fmt;

use fleet_model::{Environment, SCALE_DOWN_DELAY_SECS, Stage};
use time::{Duration, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::error::{CoreError, CoreResult};

/// Deploy-time parameters shared by every runner type of a stage.
#[derive(Clone)]
pub struct DeployContext {
    stage: Stage,
    account: String,
    region: String,
    deployed_at: OffsetDateTime,
}

impl DeployContext {
    /// Create a context from explicit values.
    pub fn new(
        stage: Stage,
        account: impl Into<String>,
        region: impl Into<String>,
        deployed_at: OffsetDateTime,
    ) -> Self {
        Self {
            stage,
            account: account.into(),
            region: region.into(),
            deployed_at: deployed_at.to_offset(UtcOffset::UTC),
        }
    }

    /// Create a context from a stage's environment section.
    ///
    /// Fails with [`CoreError::AmbiguousEnvironment`] if account or region is undefined.
    pub fn from_environment(
        stage: Stage,
        env: &Environment,
        deployed_at: OffsetDateTime,
    ) -> CoreResult<Self> {
        let account = env.account().ok_or(CoreError::AmbiguousEnvironment {
            stage,
            missing: "account",
        })?;
        let region = env.region().ok_or(CoreError::AmbiguousEnvironment {
            stage,
            missing: "region",
        })?;
        Ok(Self::new(stage, account, region, deployed_at))
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Deploy timestamp as RFC3339 (UTC).
    pub fn deployed_at_rfc3339(&self) -> CoreResult<String> {
        format_rfc3339(self.deployed_at)
    }

    /// Start time of the Beta scale-to-zero action: deploy time plus 24 hours.
    ///
    /// Fails with [`CoreError::Time`] if that falls past the representable range.
    pub fn scale_down_at(&self) -> CoreResult<OffsetDateTime> {
        self.deployed_at
            .checked_add(Duration::seconds(SCALE_DOWN_DELAY_SECS))
            .ok_or_else(|| {
                CoreError::Time(format!(
                    "scale-down time {}s after {} is out of range",
                    SCALE_DOWN_DELAY_SECS,
                    self.deployed_at.unix_timestamp()
                ))
            })
    }
}

pub(crate) fn format_rfc3339(ts: OffsetDateTime) -> CoreResult<String> {
    ts.format(&Rfc3339).map_err(|e| CoreError::Time(e.to_string()))
}

impl fmt::Debug for DeployContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployContext")
            .field("stage", &self.stage)
            .field("account", &self.account)
            .field("region", &self.region)
            .field("deployed_at", &self.deployed_at.unix_timestamp())
            .finish()
    }
}

impl fmt::Display for DeployContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}/{})", self.stage, self.account, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(unix: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(unix).unwrap()
    }

    #[test]
    fn scale_down_is_exactly_one_day_later() {
        let ctx = DeployContext::new(Stage::Beta, "123456789012", "us-west-2", ts(1_700_000_000));
        assert_eq!(ctx.scale_down_at().unwrap().unix_timestamp(), 1_700_000_000 + 86_400);
    }

    #[test]
    fn scale_down_past_year_9999_is_an_error() {
        let at = OffsetDateTime::parse("9999-12-31T12:00:00Z", &Rfc3339).unwrap();
        let ctx = DeployContext::new(Stage::Beta, "123456789012", "us-west-2", at);
        assert!(matches!(ctx.scale_down_at(), Err(CoreError::Time(_))));
    }

    #[test]
    fn missing_account_is_ambiguous() {
        let env = Environment {
            account: None,
            region: Some("us-west-2".into()),
        };
        let err = DeployContext::from_environment(Stage::Prod, &env, ts(0)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AmbiguousEnvironment {
                stage: Stage::Prod,
                missing: "account"
            }
        ));
    }

    #[test]
    fn missing_region_is_ambiguous() {
        let env = Environment {
            account: Some("123456789012".into()),
            region: Some("".into()),
        };
        let err = DeployContext::from_environment(Stage::Beta, &env, ts(0)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AmbiguousEnvironment {
                missing: "region",
                ..
            }
        ));
    }

    #[test]
    fn timestamps_render_in_utc() {
        let offset = UtcOffset::from_hms(3, 0, 0).unwrap();
        let local = ts(0).to_offset(offset);
        let ctx = DeployContext::new(Stage::Beta, "1", "r", local);
        assert_eq!(ctx.deployed_at_rfc3339().unwrap(), "1970-01-01T00:00:00Z");
    }
}
