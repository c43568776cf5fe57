//! [`VulkanDriver`] over an `ash` instance.

use crate::chain::ChainNode;
use crate::driver::{DeviceCreateRequest, VulkanDriver};
use crate::structures::{FeatureChain, FeatureStruct, PropertyChain, PropertyStruct};
use ash::prelude::VkResult;
use ash::vk;
use std::ffi::{c_char, CStr, CString};

/// Driver backed by a live Vulkan instance.
///
/// Borrows the entry and instance; destroying them stays with the caller.
pub struct AshDriver<'a> {
    entry: &'a ash::Entry,
    instance: &'a ash::Instance,
}

impl<'a> AshDriver<'a> {
    /// Wrap an instance.
    ///
    /// # Safety
    /// `instance` must have been created from `entry`, must target Vulkan 1.1
    /// or later, and must outlive every call made through this driver.
    pub unsafe fn new(entry: &'a ash::Entry, instance: &'a ash::Instance) -> Self {
        Self { entry, instance }
    }

    /// The wrapped instance.
    pub fn instance(&self) -> &ash::Instance {
        self.instance
    }
}

fn extension_names(properties: &[vk::ExtensionProperties]) -> Vec<CString> {
    properties
        .iter()
        .map(|ext| {
            // SAFETY: the driver writes NUL-terminated names.
            unsafe { CStr::from_ptr(ext.extension_name.as_ptr()) }.to_owned()
        })
        .collect()
}

impl VulkanDriver for AshDriver<'_> {
    type Device = ash::Device;

    fn instance_extensions(&self) -> VkResult<Vec<CString>> {
        let properties = unsafe { self.entry.enumerate_instance_extension_properties(None) }?;
        Ok(extension_names(&properties))
    }

    fn device_extensions(&self, physical_device: vk::PhysicalDevice) -> VkResult<Vec<CString>> {
        let properties = unsafe {
            self.instance
                .enumerate_device_extension_properties(physical_device)
        }?;
        Ok(extension_names(&properties))
    }

    fn device_api_version(&self, physical_device: vk::PhysicalDevice) -> u32 {
        unsafe {
            self.instance
                .get_physical_device_properties(physical_device)
                .api_version
        }
    }

    fn device_features(&self, physical_device: vk::PhysicalDevice, chain: &mut FeatureChain) {
        chain.ensure_base();
        let mut linked = chain.link();
        if let Some(FeatureStruct::PhysicalDeviceFeatures2(head)) = linked.head_mut() {
            unsafe {
                self.instance
                    .get_physical_device_features2(physical_device, head);
            }
        }
    }

    fn device_properties(&self, physical_device: vk::PhysicalDevice, chain: &mut PropertyChain) {
        chain.ensure_base();
        let mut linked = chain.link();
        if let Some(PropertyStruct::PhysicalDeviceProperties2(head)) = linked.head_mut() {
            unsafe {
                self.instance
                    .get_physical_device_properties2(physical_device, head);
            }
        }
    }

    fn format_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
    ) -> vk::FormatProperties {
        unsafe {
            self.instance
                .get_physical_device_format_properties(physical_device, format)
        }
    }

    fn memory_type_flags(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Vec<vk::MemoryPropertyFlags> {
        let memory = unsafe {
            self.instance
                .get_physical_device_memory_properties(physical_device)
        };
        memory
            .memory_types
            .iter()
            .take(memory.memory_type_count as usize)
            .map(|ty| ty.property_flags)
            .collect()
    }

    fn queue_families(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Vec<vk::QueueFamilyProperties> {
        unsafe {
            self.instance
                .get_physical_device_queue_family_properties(physical_device)
        }
    }

    fn create_device(
        &self,
        physical_device: vk::PhysicalDevice,
        request: &DeviceCreateRequest,
    ) -> VkResult<ash::Device> {
        let queue_create_infos: Vec<vk::DeviceQueueCreateInfo> = request
            .queue_create_infos
            .iter()
            .map(|queue| {
                vk::DeviceQueueCreateInfo::default()
                    .flags(queue.flags)
                    .queue_family_index(queue.family_index)
                    .queue_priorities(&queue.priorities)
            })
            .collect();

        let extension_names: Vec<*const c_char> = request
            .enabled_extensions
            .iter()
            .map(|ext| ext.as_ptr())
            .collect();

        let mut create_info = vk::DeviceCreateInfo::default()
            .flags(request.flags)
            .queue_create_infos(&queue_create_infos)
            .enabled_extension_names(&extension_names);
        if let Some(features) = request.enabled_features.as_ref() {
            create_info = create_info.enabled_features(features);
        }

        // The request is borrowed, so link a copy of its chain.
        let mut features = request.features.clone();
        let mut linked = features.link();
        if let Some(head) = linked.head_mut() {
            create_info.p_next = head.as_raw_mut().cast_const();
        }

        unsafe {
            self.instance
                .create_device(physical_device, &create_info, None)
        }
    }
}
