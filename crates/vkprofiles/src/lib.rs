//! Vulkan capability profiles.
//!
//! This crate provides:
//! - A registry of compiled-in profiles and count-then-fill table accessors
//! - Support checks of a physical device against a profile
//! - Device creation with a profile's features and extensions merged in
//! - Injection of profile defaults into caller feature/property chains

pub mod ash_driver;
pub mod chain;
pub mod defaults;
pub mod device;
pub mod driver;
pub mod error;
pub mod field;
pub mod profile;
pub mod profiles;
pub mod structures;
pub mod support;

pub use ash_driver::AshDriver;
pub use chain::{ChainNode, StructureChain};
pub use defaults::{
    get_profile_features, get_profile_properties, profile_feature_chain, profile_property_chain,
};
pub use device::{
    build_device_create_request, create_device, ProfileCreateFlags, ProfileDeviceCreateInfo,
};
pub use driver::{DeviceCreateRequest, QueueCreateRequest, VulkanDriver};
pub use error::{ProfileError, Result};
pub use field::{Comparator, Field, Value};
pub use profile::{
    enumerate_into, enumerate_profile_extensions, enumerate_profile_fallbacks,
    enumerate_profile_formats, enumerate_profile_memory_types, enumerate_profile_queue_families,
    enumerate_profile_structures, enumerate_profiles, find_profile, profile_extensions,
    profile_fallbacks, profile_formats, profile_memory_types, profile_queue_families,
    profile_structures, profiles, ExtensionProperties, FormatRequirement, ProfileDesc,
    ProfileProperties, QueueFamilyRequirement, StructureKind, StructureProperties,
};
pub use structures::{FeatureChain, FeatureStruct, PropertyChain, PropertyStruct};
pub use support::{check_support, get_profile_support, Mismatch, Support};
