//! `VP_LUNARG_desktop_portability_2021`.

use super::{
    format, queue_family, DEPTH, DEVICE_LOCAL, HOST_CACHED, HOST_COHERENT, NONE, RENDERABLE,
    SAMPLED, STORAGE_BUFFER, STORAGE_IMAGE, TEXEL_BUFFER,
};
use crate::field::{bits, feature_bit, flags, limit, property, Field};
use crate::profile::{
    ExtensionProperties, FormatRequirement, ProfileDesc, ProfileProperties, QueueFamilyRequirement,
};
use crate::structures::{FeatureStruct, PropertyStruct};
use ash::vk;

pub const NAME: &str = "VP_LUNARG_desktop_portability_2021";
pub const SPEC_VERSION: u32 = 1;
pub const MIN_API_VERSION: u32 = vk::make_api_version(0, 1, 1, 142);

pub const PROPERTIES: ProfileProperties<'static> = ProfileProperties::new(NAME, SPEC_VERSION);

pub(super) const EXTENSIONS: [ExtensionProperties; 15] = [
    ExtensionProperties::new(c"VK_KHR_driver_properties", 1),
    ExtensionProperties::new(c"VK_KHR_create_renderpass2", 1),
    ExtensionProperties::new(c"VK_KHR_depth_stencil_resolve", 1),
    ExtensionProperties::new(c"VK_KHR_image_format_list", 1),
    ExtensionProperties::new(c"VK_KHR_imageless_framebuffer", 1),
    ExtensionProperties::new(c"VK_KHR_sampler_mirror_clamp_to_edge", 3),
    ExtensionProperties::new(c"VK_KHR_shader_float16_int8", 1),
    ExtensionProperties::new(c"VK_KHR_swapchain", 70),
    ExtensionProperties::new(c"VK_KHR_timeline_semaphore", 2),
    ExtensionProperties::new(c"VK_KHR_uniform_buffer_standard_layout", 1),
    ExtensionProperties::new(c"VK_EXT_descriptor_indexing", 2),
    ExtensionProperties::new(c"VK_EXT_host_query_reset", 1),
    ExtensionProperties::new(c"VK_EXT_image_robustness", 1),
    ExtensionProperties::new(c"VK_EXT_inline_uniform_block", 1),
    ExtensionProperties::new(c"VK_EXT_subgroup_size_control", 2),
];

pub(super) static CORE_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(PhysicalDeviceFeatures2[features.depth_bias_clamp]),
    feature_bit!(PhysicalDeviceFeatures2[features.depth_clamp]),
    feature_bit!(PhysicalDeviceFeatures2[features.draw_indirect_first_instance]),
    feature_bit!(PhysicalDeviceFeatures2[features.fragment_stores_and_atomics]),
    feature_bit!(PhysicalDeviceFeatures2[features.full_draw_index_uint32]),
    feature_bit!(PhysicalDeviceFeatures2[features.image_cube_array]),
    feature_bit!(PhysicalDeviceFeatures2[features.independent_blend]),
    feature_bit!(PhysicalDeviceFeatures2[features.inherited_queries]),
    feature_bit!(PhysicalDeviceFeatures2[features.large_points]),
    feature_bit!(PhysicalDeviceFeatures2[features.multi_draw_indirect]),
    feature_bit!(PhysicalDeviceFeatures2[features.multi_viewport]),
    feature_bit!(PhysicalDeviceFeatures2[features.occlusion_query_precise]),
    feature_bit!(PhysicalDeviceFeatures2[features.robust_buffer_access]),
    feature_bit!(PhysicalDeviceFeatures2[features.sample_rate_shading]),
    feature_bit!(PhysicalDeviceFeatures2[features.sampler_anisotropy]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_clip_distance]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_image_gather_extended]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_sampled_image_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_image_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_image_extended_formats]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_uniform_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.tessellation_shader]),
    feature_bit!(PhysicalDeviceFeatures2[features.texture_compression_bc]),
    feature_bit!(PhysicalDeviceFeatures2[features.vertex_pipeline_stores_and_atomics]),
];

pub(super) static EXTENSION_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(DescriptorIndexing[shader_uniform_texel_buffer_array_dynamic_indexing]),
    feature_bit!(DescriptorIndexing[shader_storage_texel_buffer_array_dynamic_indexing]),
    feature_bit!(DescriptorIndexing[shader_sampled_image_array_non_uniform_indexing]),
    feature_bit!(DescriptorIndexing[descriptor_binding_sampled_image_update_after_bind]),
    feature_bit!(DescriptorIndexing[descriptor_binding_partially_bound]),
    feature_bit!(DescriptorIndexing[descriptor_binding_variable_descriptor_count]),
    feature_bit!(DescriptorIndexing[runtime_descriptor_array]),
    feature_bit!(HostQueryReset[host_query_reset]),
    feature_bit!(ImagelessFramebuffer[imageless_framebuffer]),
    feature_bit!(TimelineSemaphore[timeline_semaphore]),
    feature_bit!(Multiview[multiview]),
    feature_bit!(Storage16Bit[storage_buffer16_bit_access]),
    feature_bit!(Storage16Bit[uniform_and_storage_buffer16_bit_access]),
    feature_bit!(ShaderFloat16Int8[shader_int8]),
    feature_bit!(ShaderDrawParameters[shader_draw_parameters]),
    feature_bit!(SubgroupSizeControl[subgroup_size_control]),
    feature_bit!(SubgroupSizeControl[compute_full_subgroups]),
    feature_bit!(InlineUniformBlock[inline_uniform_block]),
    feature_bit!(ImageRobustness[robust_image_access]),
];

pub(super) static CORE_LIMITS: &[Field<PropertyStruct>] = &[
    limit!([max_image_dimension1_d]: u32 >= 16384),
    limit!([max_image_dimension2_d]: u32 >= 16384),
    limit!([max_image_dimension3_d]: u32 >= 2048),
    limit!([max_image_dimension_cube]: u32 >= 16384),
    limit!([max_image_array_layers]: u32 >= 2048),
    limit!([max_texel_buffer_elements]: u32 >= 67_108_864),
    limit!([max_uniform_buffer_range]: u32 >= 65536),
    limit!([max_storage_buffer_range]: u32 >= 134_217_728),
    limit!([max_push_constants_size]: u32 >= 128),
    limit!([max_memory_allocation_count]: u32 >= 4096),
    limit!([max_sampler_allocation_count]: u32 >= 1024),
    limit!([buffer_image_granularity]: u64 <= 1024),
    limit!([max_bound_descriptor_sets]: u32 >= 8),
    limit!([max_per_stage_descriptor_samplers]: u32 >= 16),
    limit!([max_per_stage_descriptor_uniform_buffers]: u32 >= 15),
    limit!([max_per_stage_descriptor_storage_buffers]: u32 >= 16),
    limit!([max_per_stage_descriptor_sampled_images]: u32 >= 128),
    limit!([max_per_stage_descriptor_storage_images]: u32 >= 8),
    limit!([max_per_stage_descriptor_input_attachments]: u32 >= 8),
    limit!([max_per_stage_resources]: u32 >= 128),
    limit!([max_descriptor_set_samplers]: u32 >= 80),
    limit!([max_descriptor_set_uniform_buffers]: u32 >= 90),
    limit!([max_descriptor_set_uniform_buffers_dynamic]: u32 >= 8),
    limit!([max_descriptor_set_storage_buffers]: u32 >= 155),
    limit!([max_descriptor_set_storage_buffers_dynamic]: u32 >= 8),
    limit!([max_descriptor_set_sampled_images]: u32 >= 256),
    limit!([max_descriptor_set_storage_images]: u32 >= 40),
    limit!([max_descriptor_set_input_attachments]: u32 >= 8),
    limit!([max_vertex_input_attributes]: u32 >= 28),
    limit!([max_vertex_input_bindings]: u32 >= 28),
    limit!([max_vertex_input_attribute_offset]: u32 >= 2047),
    limit!([max_vertex_input_binding_stride]: u32 >= 2048),
    limit!([max_vertex_output_components]: u32 >= 124),
    limit!([max_fragment_input_components]: u32 >= 116),
    limit!([max_fragment_output_attachments]: u32 >= 8),
    limit!([max_fragment_dual_src_attachments]: u32 >= 1),
    limit!([max_fragment_combined_output_resources]: u32 >= 8),
    limit!([max_compute_shared_memory_size]: u32 >= 32768),
    limit!([max_compute_work_group_count[0]]: u32 >= 65535),
    limit!([max_compute_work_group_count[1]]: u32 >= 65535),
    limit!([max_compute_work_group_count[2]]: u32 >= 65535),
    limit!([max_compute_work_group_invocations]: u32 >= 1024),
    limit!([max_compute_work_group_size[0]]: u32 >= 1024),
    limit!([max_compute_work_group_size[1]]: u32 >= 1024),
    limit!([max_compute_work_group_size[2]]: u32 >= 64),
    limit!([sub_pixel_precision_bits]: u32 >= 4),
    limit!([sub_texel_precision_bits]: u32 >= 4),
    limit!([mipmap_precision_bits]: u32 >= 4),
    limit!([max_draw_indexed_index_value]: u32 >= 4_294_967_295),
    limit!([max_draw_indirect_count]: u32 >= 1_073_741_824),
    limit!([max_sampler_lod_bias]: f32 >= 4.0),
    limit!([max_sampler_anisotropy]: f32 >= 16.0),
    limit!([max_viewports]: u32 >= 16),
    limit!([max_viewport_dimensions[0]]: u32 >= 16384),
    limit!([max_viewport_dimensions[1]]: u32 >= 16384),
    limit!([viewport_bounds_range]: range contains [-32768.0, 32767.0]),
    limit!([min_texel_buffer_offset_alignment]: u64 <= 64),
    limit!([min_uniform_buffer_offset_alignment]: u64 <= 256),
    limit!([min_storage_buffer_offset_alignment]: u64 <= 64),
    limit!([min_texel_offset]: i32 <= -8),
    limit!([max_texel_offset]: u32 >= 7),
    limit!([min_interpolation_offset]: f32 <= -0.5),
    limit!([max_interpolation_offset]: f32 >= 0.4375),
    limit!([max_framebuffer_width]: u32 >= 16384),
    limit!([max_framebuffer_height]: u32 >= 16384),
    limit!([max_framebuffer_layers]: u32 >= 1024),
    limit!([framebuffer_color_sample_counts]:
        flags superset bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)),
    limit!([framebuffer_depth_sample_counts]:
        flags superset bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)),
    limit!([max_color_attachments]: u32 >= 8),
    limit!([sampled_image_color_sample_counts]:
        flags superset bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)),
    limit!([max_sample_mask_words]: u32 <= 1),
    limit!([max_clip_distances]: u32 >= 8),
    limit!([point_size_range]: range contains [1.0, 64.0]),
    limit!([non_coherent_atom_size]: u64 <= 256),
];

pub(super) static EXTENSION_PROPERTIES: &[Field<PropertyStruct>] = &[
    property!(Maintenance3[max_per_set_descriptors]: u32 >= 1024),
    property!(Maintenance3[max_memory_allocation_size]: u64 >= 2_147_483_648),
    property!(DepthStencilResolve[supported_depth_resolve_modes]:
        flags superset bits!(vk::ResolveModeFlags: SAMPLE_ZERO)),
    property!(DepthStencilResolve[supported_stencil_resolve_modes]:
        flags superset bits!(vk::ResolveModeFlags: SAMPLE_ZERO)),
    property!(DepthStencilResolve[independent_resolve_none]: bool == true),
    property!(DepthStencilResolve[independent_resolve]: bool == true),
    property!(DescriptorIndexing[max_update_after_bind_descriptors_in_all_pools]: u32 >= 1_048_576),
    property!(DescriptorIndexing[max_per_stage_descriptor_update_after_bind_samplers]: u32 >= 16),
    property!(DescriptorIndexing[max_per_stage_descriptor_update_after_bind_sampled_images]:
        u32 >= 128),
    property!(DescriptorIndexing[max_per_stage_update_after_bind_resources]: u32 >= 128),
    property!(DescriptorIndexing[max_descriptor_set_update_after_bind_sampled_images]: u32 >= 256),
    property!(InlineUniformBlock[max_inline_uniform_block_size]: u32 >= 256),
    property!(InlineUniformBlock[max_per_stage_descriptor_inline_uniform_blocks]: u32 >= 4),
    property!(InlineUniformBlock[max_descriptor_set_inline_uniform_blocks]: u32 >= 4),
    property!(Multiview[max_multiview_view_count]: u32 >= 6),
    property!(Multiview[max_multiview_instance_index]: u32 >= 134_217_727),
    property!(TimelineSemaphore[max_timeline_semaphore_value_difference]: u64 >= 2_147_483_647),
    property!(SubgroupSizeControl[min_subgroup_size]: u32 <= 4),
    property!(SubgroupSizeControl[max_subgroup_size]: u32 >= 32),
    property!(SubgroupSizeControl[required_subgroup_size_stages]:
        flags superset bits!(vk::ShaderStageFlags: COMPUTE)),
    property!(Subgroup[supported_operations]:
        flags superset bits!(vk::SubgroupFeatureFlags: BASIC | VOTE | BALLOT | SHUFFLE)),
];

pub(super) static FORMATS: &[FormatRequirement] = &[
    format(vk::Format::R8_UNORM, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R8G8B8A8_UNORM, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R8G8B8A8_SRGB, NONE, NONE, RENDERABLE),
    format(vk::Format::B8G8R8A8_UNORM, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::B8G8R8A8_SRGB, NONE, NONE, RENDERABLE),
    format(vk::Format::A2B10G10R10_UNORM_PACK32, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R16G16B16A16_SFLOAT, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R32_UINT, STORAGE_BUFFER, NONE, STORAGE_IMAGE),
    format(vk::Format::R32_SFLOAT, TEXEL_BUFFER, NONE, RENDERABLE),
    format(vk::Format::R32G32B32A32_SFLOAT, TEXEL_BUFFER, NONE, SAMPLED),
    format(vk::Format::D16_UNORM, NONE, NONE, DEPTH),
    format(vk::Format::D32_SFLOAT, NONE, NONE, DEPTH),
    format(vk::Format::BC1_RGBA_UNORM_BLOCK, NONE, NONE, SAMPLED),
    format(vk::Format::BC3_UNORM_BLOCK, NONE, NONE, SAMPLED),
];

pub(super) static MEMORY_TYPES: &[vk::MemoryPropertyFlags] =
    &[DEVICE_LOCAL, HOST_COHERENT, HOST_CACHED];

pub(super) static QUEUE_FAMILIES: &[QueueFamilyRequirement] = &[queue_family(
    flags!(vk::QueueFlags: GRAPHICS | COMPUTE | TRANSFER),
    1,
)];

pub static PROFILE: ProfileDesc = ProfileDesc {
    properties: PROPERTIES,
    min_api_version: MIN_API_VERSION,
    extensions: &EXTENSIONS,
    fallbacks: &[],
    features: &[CORE_FEATURES, EXTENSION_FEATURES],
    limits: &[CORE_LIMITS, EXTENSION_PROPERTIES],
    formats: FORMATS,
    memory_types: MEMORY_TYPES,
    queue_families: QUEUE_FAMILIES,
};
