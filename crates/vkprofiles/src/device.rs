//! Profile-driven device creation.

use crate::chain::ChainNode;
use crate::defaults::{feature_nodes, fill_features};
use crate::driver::{DeviceCreateRequest, VulkanDriver};
use crate::error::{ProfileError, Result};
use crate::profile::{find_profile, ProfileDesc, ProfileProperties};
use crate::structures::{FeatureChain, FeatureStruct};
use ash::vk;
use bitflags::bitflags;
use std::ffi::CString;

bitflags! {
    /// Overrides applied on top of profile defaults.
    ///
    /// They only reach structures the profile synthesized; a structure the
    /// caller supplied keeps its values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProfileCreateFlags: u32 {
        /// Clear `robustBufferAccess`.
        const DISABLE_ROBUST_BUFFER_ACCESS = 0b0000_0001;
        /// Clear `robustImageAccess`.
        const DISABLE_ROBUST_IMAGE_ACCESS  = 0b0000_0010;
    }
}

/// Device creation parameters bound to a profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDeviceCreateInfo<'a> {
    pub create_info: &'a DeviceCreateRequest,
    pub profile: Option<ProfileProperties<'a>>,
    pub flags: ProfileCreateFlags,
}

impl<'a> ProfileDeviceCreateInfo<'a> {
    /// Wrap a plain creation request. Without a profile, creation passes the
    /// request through unchanged.
    pub fn new(create_info: &'a DeviceCreateRequest) -> Self {
        Self {
            create_info,
            profile: None,
            flags: ProfileCreateFlags::empty(),
        }
    }

    /// Bind a profile.
    #[must_use]
    pub fn profile(mut self, profile: ProfileProperties<'a>) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set override flags.
    #[must_use]
    pub fn flags(mut self, flags: ProfileCreateFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Build the request that device creation would hand to the driver.
///
/// Returns `Ok(None)` when the call is a pass-through: no profile, or a
/// profile with an empty name. A non-empty name that matches no compiled-in
/// profile is [`ProfileError::UnknownProfile`].
///
/// Otherwise the request carries:
/// - a `VkPhysicalDeviceFeatures2` node first: the caller's, or one seeded
///   from the legacy `enabled_features` and then from profile defaults;
/// - every node the caller supplied, unchanged;
/// - one node per remaining profile structure, filled with the profile's
///   defaults and then with `flags`. A profile structure is left out when
///   the caller supplied the versioned core structure it was promoted into,
///   or an extension structure promoted into it;
/// - the profile's extensions followed by the caller's, without duplicates.
pub fn build_device_create_request(
    info: &ProfileDeviceCreateInfo<'_>,
) -> Result<Option<DeviceCreateRequest>> {
    let Some(profile) = info.profile.filter(|profile| !profile.name.is_empty()) else {
        return Ok(None);
    };
    let desc = find_profile(profile.name)
        .ok_or_else(|| ProfileError::UnknownProfile(profile.name.to_string()))?;

    let request = info.create_info;
    let mut merged = request.clone();
    merged.enabled_features = None;
    merged.features = merge_features(desc, request, info.flags);
    merged.enabled_extensions = merge_extensions(desc, &request.enabled_extensions);
    Ok(Some(merged))
}

fn merge_features(
    desc: &ProfileDesc,
    request: &DeviceCreateRequest,
    flags: ProfileCreateFlags,
) -> FeatureChain {
    let caller = &request.features;

    let mut synthesized: FeatureChain = feature_nodes(desc)
        .iter()
        .copied()
        .filter(|node| !conflicts_with(caller, node))
        .map(|node| match (node, request.enabled_features) {
            (FeatureStruct::PhysicalDeviceFeatures2(_), Some(legacy)) => {
                FeatureStruct::features2(legacy)
            }
            _ => node,
        })
        .collect();
    fill_features(desc, &mut synthesized);
    synthesized.for_each_mut(|node| apply_overrides(node, flags));

    let mut merged = FeatureChain::new();
    let (base, rest): (Vec<_>, Vec<_>) = caller
        .iter()
        .chain(synthesized.iter())
        .copied()
        .partition(ChainNode::is_base);
    for node in base.into_iter().chain(rest) {
        merged.push(node);
    }
    merged
}

/// Whether `node` would clash with a structure the caller supplied: the
/// same type, or a versioned core structure and an extension structure
/// promoted into it.
fn conflicts_with(caller: &FeatureChain, node: &FeatureStruct) -> bool {
    caller.contains(node.s_type())
        || node.promoted_into().is_some_and(|core| caller.contains(core))
        || caller
            .iter()
            .any(|supplied| supplied.promoted_into() == Some(node.s_type()))
}

fn apply_overrides(node: &mut FeatureStruct, flags: ProfileCreateFlags) {
    if flags.contains(ProfileCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS) {
        if let FeatureStruct::PhysicalDeviceFeatures2(s) = node {
            s.features.robust_buffer_access = vk::FALSE;
        }
    }
    if flags.contains(ProfileCreateFlags::DISABLE_ROBUST_IMAGE_ACCESS) {
        match node {
            FeatureStruct::Vulkan13(s) => s.robust_image_access = vk::FALSE,
            FeatureStruct::ImageRobustness(s) => s.robust_image_access = vk::FALSE,
            _ => {}
        }
    }
}

fn merge_extensions(desc: &ProfileDesc, requested: &[CString]) -> Vec<CString> {
    let mut merged: Vec<CString> = Vec::with_capacity(desc.extensions.len() + requested.len());
    let profile = desc.extensions.iter().map(|ext| ext.name.to_owned());
    for name in profile.chain(requested.iter().cloned()) {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}

/// Create a device with the profile's requirements merged into the request.
///
/// Pass-through calls (see [`build_device_create_request`]) forward the
/// caller's request to the driver untouched. Driver errors are returned
/// as they are.
pub fn create_device<D: VulkanDriver>(
    driver: &D,
    physical_device: vk::PhysicalDevice,
    info: &ProfileDeviceCreateInfo<'_>,
) -> Result<D::Device> {
    if physical_device == vk::PhysicalDevice::null() {
        tracing::debug!("No physical device, creating device without profile");
        return Ok(driver.create_device(physical_device, info.create_info)?);
    }

    let Some(request) = build_device_create_request(info)? else {
        tracing::debug!("No profile, creating device without profile");
        return Ok(driver.create_device(physical_device, info.create_info)?);
    };

    let device = driver.create_device(physical_device, &request)?;
    if let Some(profile) = info.profile {
        tracing::info!(
            "Created device for {} v{} ({} extensions, {} feature structures)",
            profile.name,
            profile.spec_version,
            request.enabled_extensions.len(),
            request.features.len()
        );
    }
    Ok(device)
}
