//! `VP_ANDROID_baseline_2021`.

use super::{
    format, queue_family, DEPTH, DEVICE_LOCAL, HOST_COHERENT, NONE, RENDERABLE, SAMPLED,
    STORAGE_IMAGE, TEXEL_BUFFER,
};
use crate::field::{bits, feature_bit, flags, limit, Field};
use crate::profile::{
    ExtensionProperties, FormatRequirement, ProfileDesc, ProfileProperties, QueueFamilyRequirement,
};
use crate::structures::{FeatureStruct, PropertyStruct};
use ash::vk;

pub const NAME: &str = "VP_ANDROID_baseline_2021";
pub const SPEC_VERSION: u32 = 1;
pub const MIN_API_VERSION: u32 = vk::make_api_version(0, 1, 0, 68);

pub const PROPERTIES: ProfileProperties<'static> = ProfileProperties::new(NAME, SPEC_VERSION);

static EXTENSIONS: &[ExtensionProperties] = &[
    ExtensionProperties::new(c"VK_ANDROID_external_memory_android_hardware_buffer", 3),
    ExtensionProperties::new(c"VK_GOOGLE_display_timing", 1),
    ExtensionProperties::new(c"VK_KHR_dedicated_allocation", 3),
    ExtensionProperties::new(c"VK_KHR_descriptor_update_template", 1),
    ExtensionProperties::new(c"VK_KHR_external_fence", 1),
    ExtensionProperties::new(c"VK_KHR_external_fence_fd", 1),
    ExtensionProperties::new(c"VK_KHR_external_memory", 1),
    ExtensionProperties::new(c"VK_KHR_external_semaphore", 1),
    ExtensionProperties::new(c"VK_KHR_external_semaphore_fd", 1),
    ExtensionProperties::new(c"VK_KHR_get_memory_requirements2", 1),
    ExtensionProperties::new(c"VK_KHR_incremental_present", 1),
    ExtensionProperties::new(c"VK_KHR_maintenance1", 2),
    ExtensionProperties::new(c"VK_KHR_sampler_mirror_clamp_to_edge", 3),
    ExtensionProperties::new(c"VK_KHR_storage_buffer_storage_class", 1),
    ExtensionProperties::new(c"VK_KHR_swapchain", 70),
    ExtensionProperties::new(c"VK_KHR_variable_pointers", 1),
];

static CORE_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(PhysicalDeviceFeatures2[features.robust_buffer_access]),
    feature_bit!(PhysicalDeviceFeatures2[features.full_draw_index_uint32]),
    feature_bit!(PhysicalDeviceFeatures2[features.image_cube_array]),
    feature_bit!(PhysicalDeviceFeatures2[features.independent_blend]),
    feature_bit!(PhysicalDeviceFeatures2[features.sample_rate_shading]),
    feature_bit!(PhysicalDeviceFeatures2[features.draw_indirect_first_instance]),
    feature_bit!(PhysicalDeviceFeatures2[features.depth_bias_clamp]),
    feature_bit!(PhysicalDeviceFeatures2[features.sampler_anisotropy]),
    feature_bit!(PhysicalDeviceFeatures2[features.texture_compression_etc2]),
    feature_bit!(PhysicalDeviceFeatures2[features.texture_compression_astc_ldr]),
    feature_bit!(PhysicalDeviceFeatures2[features.fragment_stores_and_atomics]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_uniform_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_sampled_image_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_image_array_dynamic_indexing]),
];

static CORE_LIMITS: &[Field<PropertyStruct>] = &[
    limit!([max_image_dimension1_d]: u32 >= 4096),
    limit!([max_image_dimension2_d]: u32 >= 4096),
    limit!([max_image_dimension3_d]: u32 >= 512),
    limit!([max_image_dimension_cube]: u32 >= 4096),
    limit!([max_image_array_layers]: u32 >= 256),
    limit!([max_texel_buffer_elements]: u32 >= 65536),
    limit!([max_uniform_buffer_range]: u32 >= 65536),
    limit!([max_storage_buffer_range]: u32 >= 134_217_728),
    limit!([max_push_constants_size]: u32 >= 128),
    limit!([max_memory_allocation_count]: u32 >= 4096),
    limit!([max_sampler_allocation_count]: u32 >= 4000),
    limit!([buffer_image_granularity]: u64 <= 4096),
    limit!([max_bound_descriptor_sets]: u32 >= 4),
    limit!([max_per_stage_descriptor_samplers]: u32 >= 16),
    limit!([max_per_stage_descriptor_uniform_buffers]: u32 >= 12),
    limit!([max_per_stage_descriptor_storage_buffers]: u32 >= 4),
    limit!([max_per_stage_descriptor_sampled_images]: u32 >= 16),
    limit!([max_per_stage_descriptor_storage_images]: u32 >= 4),
    limit!([max_per_stage_descriptor_input_attachments]: u32 >= 4),
    limit!([max_per_stage_resources]: u32 >= 44),
    limit!([max_descriptor_set_samplers]: u32 >= 48),
    limit!([max_descriptor_set_uniform_buffers]: u32 >= 36),
    limit!([max_descriptor_set_storage_buffers]: u32 >= 24),
    limit!([max_descriptor_set_sampled_images]: u32 >= 48),
    limit!([max_descriptor_set_storage_images]: u32 >= 12),
    limit!([max_descriptor_set_input_attachments]: u32 >= 4),
    limit!([max_vertex_input_attributes]: u32 >= 16),
    limit!([max_vertex_input_bindings]: u32 >= 16),
    limit!([max_vertex_input_attribute_offset]: u32 >= 2047),
    limit!([max_vertex_input_binding_stride]: u32 >= 2048),
    limit!([max_vertex_output_components]: u32 >= 64),
    limit!([max_fragment_input_components]: u32 >= 64),
    limit!([max_fragment_output_attachments]: u32 >= 4),
    limit!([max_fragment_combined_output_resources]: u32 >= 8),
    limit!([max_compute_shared_memory_size]: u32 >= 16384),
    limit!([max_compute_work_group_count[0]]: u32 >= 65535),
    limit!([max_compute_work_group_count[1]]: u32 >= 65535),
    limit!([max_compute_work_group_count[2]]: u32 >= 65535),
    limit!([max_compute_work_group_invocations]: u32 >= 128),
    limit!([max_compute_work_group_size[0]]: u32 >= 128),
    limit!([max_compute_work_group_size[1]]: u32 >= 128),
    limit!([max_compute_work_group_size[2]]: u32 >= 64),
    limit!([sub_pixel_precision_bits]: u32 >= 4),
    limit!([max_sampler_lod_bias]: f32 >= 2.0),
    limit!([max_sampler_anisotropy]: f32 >= 1.0),
    limit!([max_viewports]: u32 >= 1),
    limit!([min_texel_buffer_offset_alignment]: u64 <= 256),
    limit!([min_uniform_buffer_offset_alignment]: u64 <= 256),
    limit!([min_storage_buffer_offset_alignment]: u64 <= 256),
    limit!([max_framebuffer_width]: u32 >= 4096),
    limit!([max_framebuffer_height]: u32 >= 4096),
    limit!([max_framebuffer_layers]: u32 >= 256),
    limit!([framebuffer_color_sample_counts]:
        flags superset bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)),
    limit!([framebuffer_depth_sample_counts]:
        flags superset bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)),
    limit!([max_color_attachments]: u32 >= 4),
    limit!([max_sample_mask_words]: u32 <= 1),
    limit!([standard_sample_locations]: bool == true),
    limit!([point_size_range]: range contains [1.0, 511.0]),
    limit!([line_width_range]: range contains [1.0, 1.0]),
];

static FORMATS: &[FormatRequirement] = &[
    format(vk::Format::R8G8B8A8_UNORM, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R8G8B8A8_SRGB, NONE, NONE, RENDERABLE),
    format(vk::Format::R5G6B5_UNORM_PACK16, NONE, NONE, RENDERABLE),
    format(vk::Format::R16G16B16A16_SFLOAT, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R32_SFLOAT, TEXEL_BUFFER, NONE, STORAGE_IMAGE),
    format(vk::Format::D16_UNORM, NONE, NONE, DEPTH),
    format(vk::Format::ETC2_R8G8B8A8_UNORM_BLOCK, NONE, NONE, SAMPLED),
    format(vk::Format::ASTC_4X4_UNORM_BLOCK, NONE, NONE, SAMPLED),
];

static MEMORY_TYPES: &[vk::MemoryPropertyFlags] = &[DEVICE_LOCAL, HOST_COHERENT];

static QUEUE_FAMILIES: &[QueueFamilyRequirement] =
    &[queue_family(flags!(vk::QueueFlags: GRAPHICS | COMPUTE), 1)];

pub static PROFILE: ProfileDesc = ProfileDesc {
    properties: PROPERTIES,
    min_api_version: MIN_API_VERSION,
    extensions: EXTENSIONS,
    fallbacks: &[],
    features: &[CORE_FEATURES],
    limits: &[CORE_LIMITS],
    formats: FORMATS,
    memory_types: MEMORY_TYPES,
    queue_families: QUEUE_FAMILIES,
};
