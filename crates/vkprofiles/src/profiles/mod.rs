//! Compiled-in profiles.

pub mod android_baseline_2021;
pub mod desktop_portability_2021;
pub mod desktop_portability_2021_subset;
pub mod roadmap_2022;

use crate::field::flags;
use crate::profile::{ExtensionProperties, FormatRequirement, ProfileDesc, QueueFamilyRequirement};
use ash::vk;

/// Every compiled-in profile, in enumeration order.
pub(crate) static REGISTRY: [&ProfileDesc; 4] = [
    &roadmap_2022::PROFILE,
    &desktop_portability_2021::PROFILE,
    &desktop_portability_2021_subset::PROFILE,
    &android_baseline_2021::PROFILE,
];

const NONE: vk::FormatFeatureFlags = vk::FormatFeatureFlags::empty();

const TEXEL_BUFFER: vk::FormatFeatureFlags =
    flags!(vk::FormatFeatureFlags: UNIFORM_TEXEL_BUFFER | VERTEX_BUFFER);

const STORAGE_BUFFER: vk::FormatFeatureFlags = flags!(vk::FormatFeatureFlags:
    UNIFORM_TEXEL_BUFFER | STORAGE_TEXEL_BUFFER | STORAGE_TEXEL_BUFFER_ATOMIC | VERTEX_BUFFER);

const SAMPLED: vk::FormatFeatureFlags = flags!(vk::FormatFeatureFlags:
    SAMPLED_IMAGE | SAMPLED_IMAGE_FILTER_LINEAR | BLIT_SRC | TRANSFER_SRC | TRANSFER_DST);

const RENDERABLE: vk::FormatFeatureFlags = flags!(vk::FormatFeatureFlags:
    SAMPLED_IMAGE | SAMPLED_IMAGE_FILTER_LINEAR | COLOR_ATTACHMENT | COLOR_ATTACHMENT_BLEND
    | BLIT_SRC | BLIT_DST | TRANSFER_SRC | TRANSFER_DST);

const STORAGE_IMAGE: vk::FormatFeatureFlags = flags!(vk::FormatFeatureFlags:
    SAMPLED_IMAGE | STORAGE_IMAGE | STORAGE_IMAGE_ATOMIC | COLOR_ATTACHMENT
    | BLIT_SRC | BLIT_DST | TRANSFER_SRC | TRANSFER_DST);

const DEPTH: vk::FormatFeatureFlags = flags!(vk::FormatFeatureFlags:
    SAMPLED_IMAGE | DEPTH_STENCIL_ATTACHMENT | BLIT_SRC | TRANSFER_SRC | TRANSFER_DST);

const fn format(
    format: vk::Format,
    buffer_features: vk::FormatFeatureFlags,
    linear_tiling_features: vk::FormatFeatureFlags,
    optimal_tiling_features: vk::FormatFeatureFlags,
) -> FormatRequirement {
    FormatRequirement {
        format,
        buffer_features,
        linear_tiling_features,
        optimal_tiling_features,
    }
}

/// `base` followed by `extra`. `L` must be the combined length.
const fn concat<const N: usize, const M: usize, const L: usize>(
    base: [ExtensionProperties; N],
    extra: [ExtensionProperties; M],
) -> [ExtensionProperties; L] {
    assert!(N + M == L, "extension list length mismatch");
    let mut out = [ExtensionProperties::new(c"", 0); L];
    let mut i = 0;
    while i < N {
        out[i] = base[i];
        i += 1;
    }
    while i < L {
        out[i] = extra[i - N];
        i += 1;
    }
    out
}

const DEVICE_LOCAL: vk::MemoryPropertyFlags = vk::MemoryPropertyFlags::DEVICE_LOCAL;

const HOST_COHERENT: vk::MemoryPropertyFlags =
    flags!(vk::MemoryPropertyFlags: HOST_VISIBLE | HOST_COHERENT);

const HOST_CACHED: vk::MemoryPropertyFlags =
    flags!(vk::MemoryPropertyFlags: HOST_VISIBLE | HOST_CACHED);

const fn queue_family(queue_flags: vk::QueueFlags, queue_count: u32) -> QueueFamilyRequirement {
    QueueFamilyRequirement {
        queue_flags,
        queue_count,
    }
}
