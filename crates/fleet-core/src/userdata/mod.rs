//! User-data composition.
//!
//! Startup scripts are plain-text templates carrying a fixed set of placeholder
//! tokens. Composition is literal replacement of every occurrence of each token;
//! there is no templating language. A template that lacks any of the tokens is
//! rejected so a renamed or truncated script cannot ship with missing values.
mod source;
pub use source::{DirTemplateSource, MemoryTemplateSource, TemplateSource};

use fleet_model::{Platform, Stage};
use tracing::{debug, instrument};

use crate::error::{CoreError, CoreResult};

/// Replaced with the stage label (`release` or `test`).
pub const PLACEHOLDER_STAGE: &str = "<STAGE>";
/// Replaced with the runner type's repository.
pub const PLACEHOLDER_REPO: &str = "<REPO>";
/// Replaced with the deploy region.
pub const PLACEHOLDER_REGION: &str = "<REGION>";

/// Every token a template must contain.
pub const PLACEHOLDERS: [&str; 3] = [PLACEHOLDER_STAGE, PLACEHOLDER_REPO, PLACEHOLDER_REGION];

/// Template file name for a platform.
pub fn template_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Mac => "macos-runner-user-data.sh",
        Platform::Windows => "windows-runner-user-data.yaml",
        Platform::Linux => "linux-runner-user-data.sh",
    }
}

/// Values substituted into a template.
#[derive(Clone, Copy, Debug)]
pub struct UserDataVars<'a> {
    pub stage_label: &'a str,
    pub repo: &'a str,
    pub region: &'a str,
}

impl<'a> UserDataVars<'a> {
    pub fn new(stage: Stage, repo: &'a str, region: &'a str) -> Self {
        Self {
            stage_label: stage.label(),
            repo,
            region,
        }
    }

    fn value_of(&self, token: &str) -> Option<&'a str> {
        match token {
            PLACEHOLDER_STAGE => Some(self.stage_label),
            PLACEHOLDER_REPO => Some(self.repo),
            PLACEHOLDER_REGION => Some(self.region),
            _ => None,
        }
    }
}

/// Substitute all placeholders in `template`.
///
/// Replacement is a single left-to-right pass, so substituted values are never
/// scanned again for tokens.
pub fn substitute(name: &str, template: &str, vars: &UserDataVars<'_>) -> CoreResult<String> {
    for token in PLACEHOLDERS {
        if !template.contains(token) {
            return Err(CoreError::MissingPlaceholder {
                template: name.to_string(),
                token,
            });
        }
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let hit = PLACEHOLDERS
            .iter()
            .find(|t| tail.starts_with(**t))
            .and_then(|t| vars.value_of(t).map(|v| (t.len(), v)));
        match hit {
            Some((len, value)) => {
                out.push_str(value);
                rest = &tail[len..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Read the platform's template from `source` and substitute it.
#[instrument(level = "debug", skip(source, vars), fields(template = template_name(platform)))]
pub fn compose<S>(platform: Platform, vars: &UserDataVars<'_>, source: &S) -> CoreResult<String>
where
    S: TemplateSource + ?Sized,
{
    let name = template_name(platform);
    let template = source.read(name)?;
    let script = substitute(name, &template, vars)?;
    debug!(bytes = script.len(), "user data composed");
    Ok(script)
}
