use std::collections::HashMap;

use fleet_model::RunnerType;

use crate::{
    error::{CoreError, CoreResult},
    map::resource_group_name,
};

/// Reject a stage whose runner types share `(repo, platform, major version, arch)`.
///
/// Such entries would produce the same resource group and stack names, which the
/// provider refuses.
pub fn ensure_unique_groups<'r, I>(runner_types: I) -> CoreResult<()>
where
    I: IntoIterator<Item = (usize, &'r RunnerType)>,
{
    let mut seen = HashMap::new();
    for (index, rt) in runner_types {
        let (repo, platform, major, arch) = rt.group_key();
        let key = (repo.to_string(), platform, major.to_string(), arch);
        if let Some(first) = seen.insert(key, index) {
            return Err(CoreError::DuplicateResourceGroup {
                name: resource_group_name(&rt.repo, rt.platform, &rt.version, rt.arch),
                first,
                second: index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fleet_model::{Arch, Platform};

    use super::*;

    fn rt(platform: Platform, version: &str, arch: Arch, repo: &str) -> RunnerType {
        RunnerType::new(platform, version, arch, repo, 1).unwrap()
    }

    #[test]
    fn same_major_version_collides() {
        let a = rt(Platform::Mac, "13.2", Arch::Arm, "finch");
        let b = rt(Platform::Mac, "13.5", Arch::Arm, "finch");

        let err = ensure_unique_groups([(0, &a), (1, &b)]).unwrap_err();
        match err {
            CoreError::DuplicateResourceGroup {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "finch-mac-13-armHostGroup");
                assert_eq!((first, second), (0, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn differing_component_is_accepted() {
        let types = [
            rt(Platform::Mac, "13.2", Arch::Arm, "finch"),
            rt(Platform::Mac, "13.2", Arch::X86_64, "finch"),
            rt(Platform::Mac, "14.0", Arch::Arm, "finch"),
            rt(Platform::Mac, "13.2", Arch::Arm, "finch-daemon"),
            rt(Platform::Windows, "13.2", Arch::Arm, "finch"),
        ];
        ensure_unique_groups(types.iter().enumerate()).unwrap();
    }
}
