//! Profile identities, requirement tables and their accessors.
//!
//! Every accessor comes in two forms: a slice/`Vec` form for Rust callers and
//! an `enumerate_*` form following the count-then-fill convention. An
//! unknown profile name always yields an empty table.

use crate::field::Field;
use crate::profiles::REGISTRY;
use crate::structures::{FeatureStruct, PropertyStruct};
use ash::vk;
use std::ffi::CStr;

/// Identity of a profile: exact name plus specification version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProfileProperties<'a> {
    pub name: &'a str,
    pub spec_version: u32,
}

impl<'a> ProfileProperties<'a> {
    /// Create a profile identity.
    pub const fn new(name: &'a str, spec_version: u32) -> Self {
        Self { name, spec_version }
    }
}

/// An extension a profile requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtensionProperties {
    pub name: &'static CStr,
    pub spec_version: u32,
}

impl ExtensionProperties {
    pub const fn new(name: &'static CStr, spec_version: u32) -> Self {
        Self { name, spec_version }
    }
}

/// Feature flags a format must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatRequirement {
    pub format: vk::Format,
    pub buffer_features: vk::FormatFeatureFlags,
    pub linear_tiling_features: vk::FormatFeatureFlags,
    pub optimal_tiling_features: vk::FormatFeatureFlags,
}

impl FormatRequirement {
    /// Whether the reported properties cover every required flag.
    pub fn is_satisfied_by(&self, properties: &vk::FormatProperties) -> bool {
        properties.buffer_features.contains(self.buffer_features)
            && properties
                .linear_tiling_features
                .contains(self.linear_tiling_features)
            && properties
                .optimal_tiling_features
                .contains(self.optimal_tiling_features)
    }
}

/// A queue family a device must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueFamilyRequirement {
    pub queue_flags: vk::QueueFlags,
    pub queue_count: u32,
}

impl QueueFamilyRequirement {
    /// Whether a reported queue family has every required flag and enough queues.
    pub fn is_satisfied_by(&self, family: &vk::QueueFamilyProperties) -> bool {
        family.queue_flags.contains(self.queue_flags) && family.queue_count >= self.queue_count
    }
}

/// Which structure family a [`StructureProperties`] entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StructureKind {
    #[default]
    Feature,
    Property,
}

/// A structure type a profile declares defaults for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StructureProperties {
    pub s_type: vk::StructureType,
    pub kind: StructureKind,
}

/// Requirement tables of one compiled-in profile.
#[derive(Debug)]
pub struct ProfileDesc {
    pub properties: ProfileProperties<'static>,
    pub min_api_version: u32,
    pub extensions: &'static [ExtensionProperties],
    pub fallbacks: &'static [ProfileProperties<'static>],
    /// Feature fields, grouped in blocks that profiles can share.
    pub features: &'static [&'static [Field<FeatureStruct>]],
    /// Property and limit fields, grouped like `features`.
    pub limits: &'static [&'static [Field<PropertyStruct>]],
    pub formats: &'static [FormatRequirement],
    pub memory_types: &'static [vk::MemoryPropertyFlags],
    pub queue_families: &'static [QueueFamilyRequirement],
}

impl ProfileDesc {
    /// Every declared feature field in declaration order.
    pub fn feature_fields(&self) -> impl Iterator<Item = &'static Field<FeatureStruct>> {
        self.features.iter().flat_map(|block| block.iter())
    }

    /// Every declared property field in declaration order.
    pub fn property_fields(&self) -> impl Iterator<Item = &'static Field<PropertyStruct>> {
        self.limits.iter().flat_map(|block| block.iter())
    }

    /// Feature structure types, unique, in declaration order.
    pub fn feature_types(&self) -> Vec<vk::StructureType> {
        unique_types(self.feature_fields().map(Field::s_type))
    }

    /// Property structure types, unique, in declaration order.
    pub fn property_types(&self) -> Vec<vk::StructureType> {
        unique_types(self.property_fields().map(Field::s_type))
    }

    /// Structure types with declared defaults: features first, then properties.
    pub fn structures(&self) -> Vec<StructureProperties> {
        let features = self.feature_types().into_iter().map(|s_type| StructureProperties {
            s_type,
            kind: StructureKind::Feature,
        });
        let properties = self.property_types().into_iter().map(|s_type| StructureProperties {
            s_type,
            kind: StructureKind::Property,
        });
        features.chain(properties).collect()
    }

    /// Write every declared feature value into a node of the matching type.
    pub fn fill_feature(&self, node: &mut FeatureStruct) {
        for field in self.feature_fields() {
            field.apply(node);
        }
    }

    /// Write every declared property value into a node of the matching type.
    pub fn fill_property(&self, node: &mut PropertyStruct) {
        for field in self.property_fields() {
            field.apply(node);
        }
    }
}

fn unique_types(types: impl Iterator<Item = vk::StructureType>) -> Vec<vk::StructureType> {
    let mut unique = Vec::new();
    for s_type in types {
        if !unique.contains(&s_type) {
            unique.push(s_type);
        }
    }
    unique
}

/// Look up a compiled-in profile by exact, case-sensitive name.
pub fn find_profile(name: &str) -> Option<&'static ProfileDesc> {
    REGISTRY
        .iter()
        .copied()
        .find(|desc| desc.properties.name == name)
}

/// Copy `table` into `out` following the count-then-fill convention.
///
/// Without a buffer, returns the number of available entries. With one,
/// writes the first `min(out.len(), table.len())` entries in table order and
/// returns how many were written. Never writes past `out`.
pub fn enumerate_into<T: Clone>(table: &[T], out: Option<&mut [T]>) -> usize {
    match out {
        None => table.len(),
        Some(out) => {
            let written = out.len().min(table.len());
            out[..written].clone_from_slice(&table[..written]);
            written
        }
    }
}

/// Every compiled-in profile.
pub fn profiles() -> Vec<ProfileProperties<'static>> {
    REGISTRY.iter().map(|desc| desc.properties).collect()
}

/// Profiles the named profile falls back to.
pub fn profile_fallbacks(name: &str) -> &'static [ProfileProperties<'static>] {
    find_profile(name).map(|desc| desc.fallbacks).unwrap_or_default()
}

/// Extensions the named profile requires.
pub fn profile_extensions(name: &str) -> &'static [ExtensionProperties] {
    find_profile(name).map(|desc| desc.extensions).unwrap_or_default()
}

/// Structure types the named profile declares defaults for.
pub fn profile_structures(name: &str) -> Vec<StructureProperties> {
    find_profile(name).map_or_else(Vec::new, ProfileDesc::structures)
}

/// Formats the named profile requires.
pub fn profile_formats(name: &str) -> &'static [FormatRequirement] {
    find_profile(name).map(|desc| desc.formats).unwrap_or_default()
}

/// Memory property combinations the named profile requires.
pub fn profile_memory_types(name: &str) -> &'static [vk::MemoryPropertyFlags] {
    find_profile(name).map(|desc| desc.memory_types).unwrap_or_default()
}

/// Queue families the named profile requires.
pub fn profile_queue_families(name: &str) -> &'static [QueueFamilyRequirement] {
    find_profile(name).map(|desc| desc.queue_families).unwrap_or_default()
}

/// Count-then-fill form of [`profiles`]. See [`enumerate_into`].
pub fn enumerate_profiles(out: Option<&mut [ProfileProperties<'static>]>) -> usize {
    enumerate_into(&profiles(), out)
}

/// Count-then-fill form of [`profile_fallbacks`].
pub fn enumerate_profile_fallbacks(
    name: &str,
    out: Option<&mut [ProfileProperties<'static>]>,
) -> usize {
    enumerate_into(profile_fallbacks(name), out)
}

/// Count-then-fill form of [`profile_extensions`].
pub fn enumerate_profile_extensions(name: &str, out: Option<&mut [ExtensionProperties]>) -> usize {
    enumerate_into(profile_extensions(name), out)
}

/// Count-then-fill form of [`profile_structures`].
pub fn enumerate_profile_structures(name: &str, out: Option<&mut [StructureProperties]>) -> usize {
    enumerate_into(&profile_structures(name), out)
}

/// Count-then-fill form of [`profile_formats`].
pub fn enumerate_profile_formats(name: &str, out: Option<&mut [FormatRequirement]>) -> usize {
    enumerate_into(profile_formats(name), out)
}

/// Count-then-fill form of [`profile_memory_types`].
pub fn enumerate_profile_memory_types(
    name: &str,
    out: Option<&mut [vk::MemoryPropertyFlags]>,
) -> usize {
    enumerate_into(profile_memory_types(name), out)
}

/// Count-then-fill form of [`profile_queue_families`].
pub fn enumerate_profile_queue_families(
    name: &str,
    out: Option<&mut [QueueFamilyRequirement]>,
) -> usize {
    enumerate_into(profile_queue_families(name), out)
}
