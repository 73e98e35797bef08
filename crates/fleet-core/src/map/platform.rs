use fleet_model::{Arch, Platform};

/// Hardware-level choices for a `(platform, arch)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    pub instance_type: &'static str,
    pub root_device_name: &'static str,
    pub requires_dedicated_host: bool,
}

pub fn to_platform_profile(platform: Platform, arch: Arch) -> PlatformProfile {
    match platform {
        Platform::Mac => PlatformProfile {
            instance_type: match arch {
                Arch::Arm => "mac2.metal",
                Arch::X86_64 => "mac1.metal",
            },
            root_device_name: "/dev/sda1",
            requires_dedicated_host: true,
        },
        Platform::Windows => PlatformProfile {
            instance_type: "m5zn.metal",
            root_device_name: "/dev/sda1",
            requires_dedicated_host: true,
        },
        Platform::Linux => PlatformProfile {
            instance_type: match arch {
                Arch::Arm => "c7g.large",
                Arch::X86_64 => "c7a.large",
            },
            root_device_name: "/dev/xvda",
            requires_dedicated_host: false,
        },
    }
}
