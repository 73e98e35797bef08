use fleet_model::{Arch, Platform, RunnerType, Stage};

/// Host resource group name. Resource group names cannot repeat within an account.
pub fn resource_group_name(repo: &str, platform: Platform, version: &str, arch: Arch) -> String {
    let major = version.split('.').next().unwrap_or(version);
    format!("{repo}-{platform}-{major}-{arch}HostGroup")
}

/// Stack holding the auto scaling group of one runner type.
pub fn asg_stack_name(rt: &RunnerType) -> String {
    format!(
        "ASG-{}-{}-{}-{}Stack",
        rt.platform,
        rt.repo,
        rt.version_major(),
        rt.arch
    )
}

pub fn asg_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Mac => "MacASG",
        Platform::Windows => "WindowsASG",
        Platform::Linux => "LinuxASG",
    }
}

pub fn launch_template_name(platform: Platform) -> String {
    format!("{}LaunchTemplate", asg_name(platform))
}

/// Per-stage group shared by all shared-tenancy runners.
pub fn linux_group_name(stage: Stage) -> String {
    format!("{stage}-LinuxRunnerGroup")
}

/// Stack names don't allow `_`; replace each with `-`.
pub fn to_stack_name(name: &str) -> String {
    name.replace('_', "-")
}
