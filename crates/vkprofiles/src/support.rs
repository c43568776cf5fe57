//! Support checks: does a device satisfy a profile?
//!
//! The check runs a fixed sequence of gates and stops at the first one that
//! fails. An unsupported device is an ordinary outcome reported through
//! [`Support`]; only failing driver queries are errors.

use crate::defaults::{feature_nodes, property_nodes};
use crate::driver::VulkanDriver;
use crate::error::Result;
use crate::field::Value;
use crate::profile::{find_profile, ProfileDesc, ProfileProperties};
use ash::vk;
use std::ffi::{CStr, CString};
use std::fmt;

/// Why a device does not satisfy a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// No compiled-in profile has the requested name.
    UnknownProfile,
    /// The caller asked for a newer profile version than is compiled in.
    SpecVersion { requested: u32, supported: u32 },
    /// The device reports an older API version than the profile needs.
    ApiVersion { required: u32, device: u32 },
    /// Neither the instance nor the device exposes this extension.
    MissingExtension(CString),
    /// A format lacks some required feature flags.
    Format(vk::Format),
    /// No memory type carries this flag combination.
    MemoryType(vk::MemoryPropertyFlags),
    /// No queue family carries these flags with enough queues.
    QueueFamily(vk::QueueFlags),
    /// A required feature is not supported.
    Feature { field: &'static str },
    /// A property or limit does not meet the profile value.
    Property {
        field: &'static str,
        required: Value,
        device: Option<Value>,
    },
}

fn version(v: u32) -> String {
    format!(
        "{}.{}.{}",
        vk::api_version_major(v),
        vk::api_version_minor(v),
        vk::api_version_patch(v)
    )
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProfile => write!(f, "unknown profile"),
            Self::SpecVersion {
                requested,
                supported,
            } => write!(
                f,
                "requested profile version {requested}, implemented {supported}"
            ),
            Self::ApiVersion { required, device } => write!(
                f,
                "API version {} below required {}",
                version(*device),
                version(*required)
            ),
            Self::MissingExtension(name) => {
                write!(f, "missing extension {}", name.to_string_lossy())
            }
            Self::Format(format) => write!(f, "format {format:?} lacks required features"),
            Self::MemoryType(flags) => write!(f, "no memory type with {flags:?}"),
            Self::QueueFamily(flags) => write!(f, "no queue family with {flags:?}"),
            Self::Feature { field } => write!(f, "feature {field} not supported"),
            Self::Property {
                field,
                required,
                device: Some(device),
            } => write!(f, "{field} is {device}, profile requires {required}"),
            Self::Property {
                field,
                required,
                device: None,
            } => write!(f, "{field} not reported, profile requires {required}"),
        }
    }
}

/// Outcome of a support check.
#[derive(Debug, Clone, PartialEq)]
pub enum Support {
    Supported,
    Unsupported(Mismatch),
}

impl Support {
    /// Whether the device satisfies the profile.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// Check `physical_device` against `profile`, gate by gate.
///
/// Gates, in order: profile version, API version, extensions, formats,
/// memory types, queue families, features, properties. The first failing
/// gate decides the result; later gates never query the device.
pub fn check_support<D: VulkanDriver>(
    driver: &D,
    physical_device: vk::PhysicalDevice,
    profile: &ProfileProperties<'_>,
) -> Result<Support> {
    let mismatch = match find_profile(profile.name) {
        Some(desc) => first_mismatch(driver, physical_device, desc, profile)?,
        None => Some(Mismatch::UnknownProfile),
    };

    Ok(match mismatch {
        Some(mismatch) => {
            tracing::debug!("{} not supported: {}", profile.name, mismatch);
            Support::Unsupported(mismatch)
        }
        None => Support::Supported,
    })
}

/// Boolean form of [`check_support`].
pub fn get_profile_support<D: VulkanDriver>(
    driver: &D,
    physical_device: vk::PhysicalDevice,
    profile: &ProfileProperties<'_>,
) -> Result<bool> {
    check_support(driver, physical_device, profile).map(|support| support.is_supported())
}

fn first_mismatch<D: VulkanDriver>(
    driver: &D,
    physical_device: vk::PhysicalDevice,
    desc: &ProfileDesc,
    profile: &ProfileProperties<'_>,
) -> Result<Option<Mismatch>> {
    if desc.properties.spec_version < profile.spec_version {
        return Ok(Some(Mismatch::SpecVersion {
            requested: profile.spec_version,
            supported: desc.properties.spec_version,
        }));
    }

    let device_version = driver.device_api_version(physical_device);
    if version_triple(device_version) < version_triple(desc.min_api_version) {
        return Ok(Some(Mismatch::ApiVersion {
            required: desc.min_api_version,
            device: device_version,
        }));
    }

    if !desc.extensions.is_empty() {
        let mut available = driver.instance_extensions()?;
        available.extend(driver.device_extensions(physical_device)?);
        if let Some(missing) = desc
            .extensions
            .iter()
            .find(|ext| !contains_name(&available, ext.name))
        {
            return Ok(Some(Mismatch::MissingExtension(missing.name.to_owned())));
        }
    }

    for requirement in desc.formats {
        let properties = driver.format_properties(physical_device, requirement.format);
        if !requirement.is_satisfied_by(&properties) {
            return Ok(Some(Mismatch::Format(requirement.format)));
        }
    }

    if !desc.memory_types.is_empty() {
        let types = driver.memory_type_flags(physical_device);
        if let Some(missing) = desc
            .memory_types
            .iter()
            .find(|required| !types.iter().any(|ty| ty.contains(**required)))
        {
            return Ok(Some(Mismatch::MemoryType(*missing)));
        }
    }

    if !desc.queue_families.is_empty() {
        let families = driver.queue_families(physical_device);
        if let Some(missing) = desc
            .queue_families
            .iter()
            .find(|required| !families.iter().any(|family| required.is_satisfied_by(family)))
        {
            return Ok(Some(Mismatch::QueueFamily(missing.queue_flags)));
        }
    }

    let mut features = feature_nodes(desc);
    driver.device_features(physical_device, &mut features);
    for field in desc.feature_fields() {
        let satisfied = features
            .find(field.s_type())
            .is_some_and(|node| field.is_satisfied_by(node));
        if !satisfied {
            return Ok(Some(Mismatch::Feature { field: field.name }));
        }
    }

    let mut properties = property_nodes(desc);
    driver.device_properties(physical_device, &mut properties);
    for field in desc.property_fields() {
        let device = properties.find(field.s_type()).and_then(|node| field.read(node));
        if !device.is_some_and(|device| field.comparator.accepts(device, field.value)) {
            return Ok(Some(Mismatch::Property {
                field: field.name,
                required: field.value,
                device,
            }));
        }
    }

    Ok(None)
}

/// `(major, minor, patch)`; the variant is not compared.
fn version_triple(version: u32) -> (u32, u32, u32) {
    (
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version),
    )
}

fn contains_name(available: &[CString], name: &CStr) -> bool {
    available.iter().any(|ext| ext.as_c_str() == name)
}
