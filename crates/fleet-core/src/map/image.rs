use std::collections::BTreeMap;

use fleet_model::{Arch, MachineImageQuery, Platform};

/// Managed image family used for every Windows runner.
pub const WINDOWS_MANAGED_IMAGE: &str = "WINDOWS_SERVER_2022_ENGLISH_FULL_BASE";

/// Standard `describe-images` filters for Amazon-owned HVM/EBS images of one architecture.
pub fn lookup_filters(architecture: impl Into<String>) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        ("virtualization-type".to_string(), vec!["hvm".to_string()]),
        ("root-device-type".to_string(), vec!["ebs".to_string()]),
        ("architecture".to_string(), vec![architecture.into()]),
        ("owner-alias".to_string(), vec!["amazon".to_string()]),
    ])
}

pub fn to_image_query(platform: Platform, arch: Arch, version: &str) -> MachineImageQuery {
    match platform {
        Platform::Mac => MachineImageQuery::Lookup {
            name: format!("amzn-ec2-macos-{version}*"),
            filters: lookup_filters(arch.image_arch(platform)),
        },
        Platform::Linux => MachineImageQuery::Lookup {
            name: format!("al{version}-ami-{version}*"),
            filters: lookup_filters(arch.image_arch(platform)),
        },
        Platform::Windows => MachineImageQuery::Managed {
            image: WINDOWS_MANAGED_IMAGE.to_string(),
        },
    }
}
