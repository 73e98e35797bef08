use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};
use clap::Parser;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{info, warn};

use fleet_core::prelude::*;
use fleet_model::{Stage, StageDefinition};
use fleet_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_logger};

/// Generate the runner-fleet deploy definition for one stage.
#[derive(Debug, Parser)]
#[command(name = "fleet-synth", version)]
struct Cli {
    /// Directory holding env-config.json and runner-config.json.
    #[arg(long, env = "FLEET_CONFIG_DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Directory holding the per-platform user-data templates.
    #[arg(long, env = "FLEET_TEMPLATES_DIR", default_value = "scripts")]
    templates_dir: PathBuf,

    /// Stage to generate: beta, prod or release.
    #[arg(long)]
    stage: Stage,

    /// Deploy timestamp (RFC3339). Defaults to now.
    #[arg(long, value_parser = parse_deploy_time)]
    deploy_time: Option<OffsetDateTime>,

    /// Write the definition here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, env = "FLEET_LOG", default_value = "info")]
    log_level: LoggerLevel,

    #[arg(long, default_value = "text")]
    log_format: LoggerFormat,
}

fn parse_deploy_time(s: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(s, &Rfc3339).map_err(|e| format!("{s}: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) logger
    let cfg = LoggerConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
        ..Default::default()
    };
    init_logger(&cfg)?;

    // 2) generate
    let definition = synthesize(&cli)?;

    // 3) emit
    let json = serde_json::to_string_pretty(&definition)?;
    match &cli.out {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("writing {}", path.display()))?,
        None => writeln!(io::stdout().lock(), "{json}")?,
    }

    if !definition.is_complete() {
        for f in &definition.failures {
            warn!(index = f.index, repo = %f.repo, platform = %f.platform, "{}", f.error);
        }
        bail!(
            "{} of {} runner types failed for stage {}",
            definition.failures.len(),
            definition.failures.len() + definition.units.len(),
            cli.stage
        );
    }
    Ok(())
}

fn synthesize(cli: &Cli) -> anyhow::Result<StageDefinition> {
    let config = DeployConfig::load(&cli.config_dir)
        .with_context(|| format!("loading configuration from {}", cli.config_dir.display()))?;

    let deployed_at = cli.deploy_time.unwrap_or_else(OffsetDateTime::now_utc);
    let ctx = DeployContext::from_environment(cli.stage, config.env.for_stage(cli.stage), deployed_at)?;
    info!(context = %ctx, "deploy context resolved");

    let templates = DirTemplateSource::new(&cli.templates_dir);
    let definition = FleetAssembler::new(&ctx, &templates)
        .with_codebuild(&config.runners.codebuild)
        .assemble(config.runners.for_stage(cli.stage))?;
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const ENV_CONFIG: &str = r#"{
        "envPipeline": { "account": "111111111111", "region": "us-west-2" },
        "envBeta":     { "account": "222222222222", "region": "us-west-2" },
        "envProd":     { "account": "333333333333", "region": "us-east-2" },
        "envRelease":  { "account": "444444444444" }
    }"#;

    const RUNNER_CONFIG: &str = r#"{
        "runnerBeta": {
            "macLicenseArn": "arn:aws:license-manager:us-west-2:222222222222:license-configuration:lic-mac",
            "windowsLicenseArn": "arn:aws:license-manager:us-west-2:222222222222:license-configuration:lic-win",
            "runnerTypes": [
                { "platform": "mac", "version": "13.2", "arch": "arm", "repo": "finch", "desiredInstances": 2 },
                { "platform": "linux", "version": "2023", "arch": "x86_64", "repo": "finch-daemon", "desiredInstances": 1 }
            ]
        },
        "runnerProd":    { "runnerTypes": [] },
        "runnerRelease": { "runnerTypes": [] }
    }"#;

    fn write_fixture(dir: &Path) {
        let config = dir.join("config");
        let scripts = dir.join("scripts");
        fs::create_dir_all(&config).unwrap();
        fs::create_dir_all(&scripts).unwrap();
        fs::write(config.join("env-config.json"), ENV_CONFIG).unwrap();
        fs::write(config.join("runner-config.json"), RUNNER_CONFIG).unwrap();
        for name in ["macos-runner-user-data.sh", "linux-runner-user-data.sh"] {
            fs::write(
                scripts.join(name),
                "LABEL_STAGE=<STAGE>\nREPO=<REPO>\nREGION=<REGION>\n",
            )
            .unwrap();
        }
    }

    fn cli_for(dir: &Path, stage: &str) -> Cli {
        Cli::try_parse_from([
            "fleet-synth",
            "--config-dir",
            dir.join("config").to_str().unwrap(),
            "--templates-dir",
            dir.join("scripts").to_str().unwrap(),
            "--stage",
            stage,
            "--deploy-time",
            "2023-11-14T22:13:20Z",
        ])
        .unwrap()
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "fleet-synth",
            "--stage",
            "release",
            "--log-format",
            "json",
            "--log-level",
            "fleet_core=debug,info",
        ])
        .unwrap();

        assert_eq!(cli.stage, Stage::Release);
        assert_eq!(cli.log_format, LoggerFormat::Json);
        assert_eq!(cli.config_dir, PathBuf::from("config"));
        assert!(cli.deploy_time.is_none());
    }

    #[test]
    fn rejects_unknown_stage_and_bad_time() {
        assert!(Cli::try_parse_from(["fleet-synth", "--stage", "gamma"]).is_err());
        assert!(
            Cli::try_parse_from(["fleet-synth", "--stage", "beta", "--deploy-time", "yesterday"])
                .is_err()
        );
    }

    #[test]
    fn synthesizes_beta_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let def = synthesize(&cli_for(dir.path(), "beta")).unwrap();

        assert!(def.is_complete());
        assert_eq!(def.units.len(), 2);
        assert_eq!(def.account, "222222222222");
        assert!(def.units[0].launch.resolved.user_data.contains("LABEL_STAGE=test"));
        assert_eq!(def.units[0].auto_scaling.scheduled_actions.len(), 1);
    }

    #[test]
    fn missing_region_fails_before_assembly() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let err = synthesize(&cli_for(dir.path(), "release")).unwrap_err();
        assert!(err.to_string().contains("region"), "unexpected error: {err}");
    }
}
