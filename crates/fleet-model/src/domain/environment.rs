use serde::{Deserialize, Serialize};

/// Target account and region of a deploy stage.
///
/// Both fields are optional at the configuration layer; the assembler refuses
/// to resolve anything for an environment that leaves either one undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Environment {
    /// Account identifier, if set and non-blank.
    pub fn account(&self) -> Option<&str> {
        non_blank(self.account.as_deref())
    }

    /// Region identifier, if set and non-blank.
    pub fn region(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
