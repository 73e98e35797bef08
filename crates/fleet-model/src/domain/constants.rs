//! Common model-level constants.
//!
//! Well-known values shared by every runner fleet launch specification.

/// Tag key picked up by the SSM inventory collection for PVRE reporting.
pub const TAG_PVRE_REPORTING: &str = "PVRE-Reporting";

/// Value paired with [`TAG_PVRE_REPORTING`] on every runner instance.
pub const TAG_PVRE_REPORTING_VALUE: &str = "SSM";

/// Name of the pre-existing EC2 key pair attached to runner instances.
pub const DEFAULT_KEY_PAIR: &str = "runner-key";

/// Size of the EBS root volume attached to every runner instance.
pub const DEFAULT_ROOT_VOLUME_GIB: u32 = 100;

/// Delay between deploy time and the Beta scale-to-zero action (24 hours).
pub const SCALE_DOWN_DELAY_SECS: i64 = 86_400;
