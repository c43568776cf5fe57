//! The device API this crate consumes.
//!
//! Support checks and device creation only talk to Vulkan through
//! [`VulkanDriver`], so they can run against a real instance
//! ([`crate::AshDriver`]) or a scripted one in tests.

use crate::structures::{FeatureChain, PropertyChain};
use ash::prelude::VkResult;
use ash::vk;
use std::ffi::CString;

/// Queries and device creation on one instance.
///
/// Every method forwards failures from the underlying API unchanged.
pub trait VulkanDriver {
    /// Handle returned by [`create_device`](Self::create_device).
    type Device;

    /// Names of the extensions the instance exposes.
    fn instance_extensions(&self) -> VkResult<Vec<CString>>;

    /// Names of the extensions `physical_device` exposes.
    fn device_extensions(&self, physical_device: vk::PhysicalDevice) -> VkResult<Vec<CString>>;

    /// The API version `physical_device` reports.
    fn device_api_version(&self, physical_device: vk::PhysicalDevice) -> u32;

    /// Fill every node of `chain` with the device's feature values.
    ///
    /// The chain always starts with a `VkPhysicalDeviceFeatures2` node.
    fn device_features(&self, physical_device: vk::PhysicalDevice, chain: &mut FeatureChain);

    /// Fill every node of `chain` with the device's property values.
    ///
    /// The chain always starts with a `VkPhysicalDeviceProperties2` node.
    fn device_properties(&self, physical_device: vk::PhysicalDevice, chain: &mut PropertyChain);

    /// Format capabilities of `format` on `physical_device`.
    fn format_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
    ) -> vk::FormatProperties;

    /// Property flags of every memory type, in memory type order.
    fn memory_type_flags(&self, physical_device: vk::PhysicalDevice)
        -> Vec<vk::MemoryPropertyFlags>;

    /// Properties of every queue family, in family index order.
    fn queue_families(&self, physical_device: vk::PhysicalDevice)
        -> Vec<vk::QueueFamilyProperties>;

    /// Create a logical device from `request`.
    fn create_device(
        &self,
        physical_device: vk::PhysicalDevice,
        request: &DeviceCreateRequest,
    ) -> VkResult<Self::Device>;
}

/// One `VkDeviceQueueCreateInfo`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueueCreateRequest {
    pub flags: vk::DeviceQueueCreateFlags,
    pub family_index: u32,
    /// One priority per queue.
    pub priorities: Vec<f32>,
}

impl QueueCreateRequest {
    /// Request `priorities.len()` queues from `family_index`.
    pub fn new(family_index: u32, priorities: impl Into<Vec<f32>>) -> Self {
        Self {
            flags: vk::DeviceQueueCreateFlags::empty(),
            family_index,
            priorities: priorities.into(),
        }
    }
}

/// Owned counterpart of `VkDeviceCreateInfo`.
///
/// The feature chain replaces the `pNext` chain; it is linked only while
/// the request is handed to the driver.
#[derive(Debug, Clone, Default)]
pub struct DeviceCreateRequest {
    pub flags: vk::DeviceCreateFlags,
    pub queue_create_infos: Vec<QueueCreateRequest>,
    pub enabled_extensions: Vec<CString>,
    /// Legacy `pEnabledFeatures`. Must be `None` when `features` holds a
    /// `VkPhysicalDeviceFeatures2` node.
    pub enabled_features: Option<vk::PhysicalDeviceFeatures>,
    pub features: FeatureChain,
}

impl DeviceCreateRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a queue request.
    #[must_use]
    pub fn queue(mut self, queue: QueueCreateRequest) -> Self {
        self.queue_create_infos.push(queue);
        self
    }

    /// Enable an extension.
    #[must_use]
    pub fn extension(mut self, name: impl Into<CString>) -> Self {
        self.enabled_extensions.push(name.into());
        self
    }

    /// Set the legacy feature struct.
    #[must_use]
    pub fn enabled_features(mut self, features: vk::PhysicalDeviceFeatures) -> Self {
        self.enabled_features = Some(features);
        self
    }

    /// Replace the feature chain.
    #[must_use]
    pub fn features(mut self, features: FeatureChain) -> Self {
        self.features = features;
        self
    }

    /// Whether `name` is among the enabled extensions.
    pub fn has_extension(&self, name: &std::ffi::CStr) -> bool {
        self.enabled_extensions
            .iter()
            .any(|enabled| enabled.as_c_str() == name)
    }
}
