use fleet_model::{
    AutoScalingSpec, HealthCheck, RollingUpdate, RunnerType, ScalingProcess, ScheduledAction,
};
use tracing::debug;

use crate::{
    context::{DeployContext, format_rfc3339},
    error::CoreResult,
    map::asg_name,
};

const HEALTH_CHECK_GRACE_SECS: u64 = 3_600;

/// Name of the Beta-only scale-to-zero action.
pub const SCALE_DOWN_ACTION: &str = "SpinDownBetaInstances";

pub(super) fn to_auto_scaling_spec(
    rt: &RunnerType,
    launch_template: &str,
    ctx: &DeployContext,
) -> CoreResult<AutoScalingSpec> {
    let mut scheduled_actions = Vec::new();
    if ctx.stage().schedules_scale_down() {
        let start_time = format_rfc3339(ctx.scale_down_at()?)?;
        debug!(%start_time, "scheduling scale-down");
        scheduled_actions.push(ScheduledAction {
            name: SCALE_DOWN_ACTION.to_string(),
            start_time,
            desired_capacity: 0,
        });
    }

    Ok(AutoScalingSpec {
        name: asg_name(rt.platform).to_string(),
        launch_template: launch_template.to_string(),
        desired_capacity: rt.desired_instances,
        min_capacity: 0,
        max_capacity: rt.desired_instances,
        availability_zones: rt.availability_zones.clone(),
        health_check: HealthCheck {
            kind: "EC2".to_string(),
            grace_secs: HEALTH_CHECK_GRACE_SECS,
        },
        rolling_update: RollingUpdate {
            max_batch_size: 1,
            min_instances_in_service: 0,
            suspend_processes: vec![
                ScalingProcess::HealthCheck,
                ScalingProcess::ReplaceUnhealthy,
                ScalingProcess::AzRebalance,
                ScalingProcess::AlarmNotification,
                ScalingProcess::ScheduledActions,
            ],
            wait_on_resource_signals: false,
        },
        scheduled_actions,
    })
}
