use serde::{Deserialize, Serialize};

/// Auto Scaling processes that can be suspended during a rolling update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingProcess {
    HealthCheck,
    ReplaceUnhealthy,
    #[serde(rename = "AZRebalance")]
    AzRebalance,
    AlarmNotification,
    ScheduledActions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub kind: String,
    pub grace_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingUpdate {
    pub max_batch_size: u32,
    pub min_instances_in_service: u32,
    pub suspend_processes: Vec<ScalingProcess>,
    pub wait_on_resource_signals: bool,
}

/// Fire-once capacity change at a fixed point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAction {
    pub name: String,
    /// RFC3339 UTC timestamp.
    pub start_time: String,
    pub desired_capacity: u32,
}

/// Auto Scaling group backing one runner type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingSpec {
    pub name: String,
    pub launch_template: String,
    pub desired_capacity: u32,
    pub min_capacity: u32,
    pub max_capacity: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
    pub health_check: HealthCheck,
    pub rolling_update: RollingUpdate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduled_actions: Vec<ScheduledAction>,
}
