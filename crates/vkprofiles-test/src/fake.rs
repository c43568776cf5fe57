//! In-memory driver.

use ash::prelude::VkResult;
use ash::vk;
use ash::vk::Handle;
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::hash::{Hash, Hasher};
use vkprofiles::{
    find_profile, get_profile_features, get_profile_properties, profile_feature_chain,
    profile_property_chain, ChainNode, DeviceCreateRequest, FeatureChain, FeatureStruct,
    ProfileProperties, PropertyChain, PropertyStruct, VulkanDriver,
};

/// Device handle returned by [`FakeDriver`].
///
/// The handle is derived from the request contents, so two identical
/// requests produce identical devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeDevice {
    pub handle: vk::Device,
}

/// A scripted physical device.
///
/// Every reported value lives in a public field; tests adjust them directly
/// or through the helpers below.
#[derive(Debug, Clone, Default)]
pub struct FakeDriver {
    pub api_version: u32,
    pub instance_extensions: Vec<CString>,
    pub device_extensions: Vec<CString>,
    pub features: FeatureChain,
    pub properties: PropertyChain,
    pub formats: HashMap<vk::Format, vk::FormatProperties>,
    pub memory_types: Vec<vk::MemoryPropertyFlags>,
    pub queue_families: Vec<vk::QueueFamilyProperties>,
    /// Returned by both extension queries when set.
    pub extension_error: Option<vk::Result>,
    /// Returned by device creation when set.
    pub create_error: Option<vk::Result>,
    calls: RefCell<Vec<&'static str>>,
    created: RefCell<Vec<DeviceCreateRequest>>,
}

impl FakeDriver {
    /// A device reporting nothing: API 1.0, no extensions, zeroed
    /// capabilities.
    pub fn new() -> Self {
        Self {
            api_version: vk::API_VERSION_1_0,
            features: FeatureChain::with_base(),
            properties: PropertyChain::with_base(),
            ..Self::default()
        }
    }

    /// A device that reports exactly what `profile` requires.
    ///
    /// Unknown profiles give the same device as [`FakeDriver::new`].
    pub fn satisfying(profile: &ProfileProperties<'_>) -> Self {
        let mut driver = Self::new();
        let Some(desc) = find_profile(profile.name) else {
            return driver;
        };

        driver.api_version = desc.min_api_version;
        driver.device_extensions = desc.extensions.iter().map(|ext| ext.name.to_owned()).collect();

        driver.features = profile_feature_chain(profile.name);
        get_profile_features(profile, &mut driver.features);
        driver.properties = profile_property_chain(profile.name);
        get_profile_properties(profile, &mut driver.properties);

        driver.formats = desc
            .formats
            .iter()
            .map(|req| {
                let properties = vk::FormatProperties {
                    linear_tiling_features: req.linear_tiling_features,
                    optimal_tiling_features: req.optimal_tiling_features,
                    buffer_features: req.buffer_features,
                };
                (req.format, properties)
            })
            .collect();
        driver.memory_types = desc.memory_types.to_vec();
        driver.queue_families = desc
            .queue_families
            .iter()
            .map(|req| vk::QueueFamilyProperties {
                queue_flags: req.queue_flags,
                queue_count: req.queue_count,
                ..Default::default()
            })
            .collect();
        driver
    }

    /// Core limits of the base property node.
    pub fn limits_mut(&mut self) -> &mut vk::PhysicalDeviceLimits {
        self.properties.ensure_base();
        match self
            .properties
            .find_mut(vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2)
        {
            Some(PropertyStruct::PhysicalDeviceProperties2(s)) => &mut s.properties.limits,
            _ => unreachable!("ensure_base inserts a properties node"),
        }
    }

    /// Core features of the base feature node.
    pub fn core_features_mut(&mut self) -> &mut vk::PhysicalDeviceFeatures {
        self.features.ensure_base();
        match self
            .features
            .find_mut(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
        {
            Some(FeatureStruct::PhysicalDeviceFeatures2(s)) => &mut s.features,
            _ => unreachable!("ensure_base inserts a features node"),
        }
    }

    /// Stop reporting a device extension.
    pub fn remove_device_extension(&mut self, name: &CStr) {
        self.device_extensions.retain(|ext| ext.as_c_str() != name);
    }

    /// Names of the driver entry points called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Requests handed to [`VulkanDriver::create_device`] so far.
    pub fn created_requests(&self) -> Vec<DeviceCreateRequest> {
        self.created.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    fn extension_result(&self, names: &[CString]) -> VkResult<Vec<CString>> {
        match self.extension_error {
            Some(err) => Err(err),
            None => Ok(names.to_vec()),
        }
    }
}

impl VulkanDriver for FakeDriver {
    type Device = FakeDevice;

    fn instance_extensions(&self) -> VkResult<Vec<CString>> {
        self.record("instance_extensions");
        self.extension_result(&self.instance_extensions)
    }

    fn device_extensions(&self, _physical_device: vk::PhysicalDevice) -> VkResult<Vec<CString>> {
        self.record("device_extensions");
        self.extension_result(&self.device_extensions)
    }

    fn device_api_version(&self, _physical_device: vk::PhysicalDevice) -> u32 {
        self.record("device_api_version");
        self.api_version
    }

    fn device_features(&self, _physical_device: vk::PhysicalDevice, chain: &mut FeatureChain) {
        self.record("device_features");
        chain.for_each_mut(|node| {
            if let Some(reported) = self.features.find(node.s_type()) {
                *node = *reported;
            }
        });
    }

    fn device_properties(&self, _physical_device: vk::PhysicalDevice, chain: &mut PropertyChain) {
        self.record("device_properties");
        chain.for_each_mut(|node| {
            if let Some(reported) = self.properties.find(node.s_type()) {
                *node = *reported;
            }
        });
    }

    fn format_properties(
        &self,
        _physical_device: vk::PhysicalDevice,
        format: vk::Format,
    ) -> vk::FormatProperties {
        self.record("format_properties");
        self.formats.get(&format).copied().unwrap_or_default()
    }

    fn memory_type_flags(
        &self,
        _physical_device: vk::PhysicalDevice,
    ) -> Vec<vk::MemoryPropertyFlags> {
        self.record("memory_type_flags");
        self.memory_types.clone()
    }

    fn queue_families(
        &self,
        _physical_device: vk::PhysicalDevice,
    ) -> Vec<vk::QueueFamilyProperties> {
        self.record("queue_families");
        self.queue_families.clone()
    }

    fn create_device(
        &self,
        _physical_device: vk::PhysicalDevice,
        request: &DeviceCreateRequest,
    ) -> VkResult<FakeDevice> {
        self.record("create_device");
        if let Some(err) = self.create_error {
            return Err(err);
        }

        let mut hasher = DefaultHasher::new();
        format!("{request:?}").hash(&mut hasher);
        self.created.borrow_mut().push(request.clone());
        Ok(FakeDevice {
            handle: vk::Device::from_raw(hasher.finish()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkprofiles::profiles::roadmap_2022;

    #[test]
    fn satisfying_device_reports_profile_values() {
        let mut driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
        assert_eq!(driver.api_version, roadmap_2022::MIN_API_VERSION);
        assert!(driver
            .features
            .contains(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES));
        assert_eq!(driver.limits_mut().max_image_dimension2_d, 8192);
    }

    #[test]
    fn queries_copy_matching_nodes_only() {
        let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
        let mut chain = FeatureChain::new().with(FeatureStruct::PortabilitySubset(
            vk::PhysicalDevicePortabilitySubsetFeaturesKHR::default(),
        ));
        driver.device_features(vk::PhysicalDevice::null(), &mut chain);
        assert_eq!(chain.len(), 1);
        assert_eq!(driver.calls(), vec!["device_features"]);
    }

    #[test]
    fn identical_requests_give_identical_devices() {
        let driver = FakeDriver::new();
        let request = DeviceCreateRequest::new().extension(c"VK_KHR_swapchain");
        let a = driver.create_device(vk::PhysicalDevice::null(), &request).unwrap();
        let b = driver.create_device(vk::PhysicalDevice::null(), &request).unwrap();
        assert_eq!(a, b);
        assert_eq!(driver.created_requests().len(), 2);
    }
}
