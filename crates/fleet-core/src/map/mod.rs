//! Pure mappings from a runner type to the pieces of its launch configuration.
mod image;
mod naming;
mod platform;

pub use image::{WINDOWS_MANAGED_IMAGE, lookup_filters, to_image_query};
pub use naming::{
    asg_name, asg_stack_name, launch_template_name, linux_group_name, resource_group_name,
    to_stack_name,
};
pub use platform::{PlatformProfile, to_platform_profile};
