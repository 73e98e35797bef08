use fleet_model::{
    DEFAULT_KEY_PAIR, DEFAULT_ROOT_VOLUME_GIB, IamPolicySpec, LaunchSpec, Placement,
    ResolvedLaunchConfig, RootVolume, RunnerType, TAG_PVRE_REPORTING, TAG_PVRE_REPORTING_VALUE,
    Tags,
};

use crate::{context::DeployContext, map::launch_template_name};

const MANAGED_POLICIES: [&str; 3] = [
    "AmazonSSMManagedInstanceCore",
    "AutoScalingFullAccess",
    "ResourceGroupsandTagEditorFullAccess",
];

const SECRET_ACTIONS: [&str; 4] = [
    "secretsmanager:GetResourcePolicy",
    "secretsmanager:GetSecretValue",
    "secretsmanager:DescribeSecret",
    "secretsmanager:ListSecretVersionIds",
];

pub(super) fn to_launch_spec(
    rt: &RunnerType,
    resolved: ResolvedLaunchConfig,
    placement: Placement,
    mut tags: Tags,
    ctx: &DeployContext,
) -> LaunchSpec {
    tags.insert(TAG_PVRE_REPORTING, TAG_PVRE_REPORTING_VALUE);

    let root_volume = RootVolume {
        device_name: resolved.root_device_name.clone(),
        volume_size_gib: DEFAULT_ROOT_VOLUME_GIB,
    };

    LaunchSpec {
        name: launch_template_name(rt.platform),
        resolved,
        root_volume,
        require_imdsv2: true,
        key_pair: DEFAULT_KEY_PAIR.to_string(),
        placement,
        tags,
        iam: runner_role(rt, ctx),
    }
}

/// Instance role; runners read their GitHub registration key from Secrets Manager.
fn runner_role(rt: &RunnerType, ctx: &DeployContext) -> IamPolicySpec {
    IamPolicySpec {
        assumed_by: "ec2.amazonaws.com".to_string(),
        managed_policies: MANAGED_POLICIES.iter().map(|s| s.to_string()).collect(),
        secret_actions: SECRET_ACTIONS.iter().map(|s| s.to_string()).collect(),
        secret_resources: vec![format!(
            "arn:aws:secretsmanager:{}:{}:secret:{}-runner-reg-key*",
            ctx.region(),
            ctx.account(),
            rt.repo
        )],
    }
}
