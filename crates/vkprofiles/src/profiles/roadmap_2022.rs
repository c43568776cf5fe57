//! `VP_KHR_roadmap_2022`.

use crate::field::{bits, feature_bit, limit, property, Field};
use crate::profile::{ProfileDesc, ProfileProperties};
use crate::structures::{FeatureStruct, PropertyStruct};
use ash::vk;

pub const NAME: &str = "VP_KHR_roadmap_2022";
pub const SPEC_VERSION: u32 = 1;
pub const MIN_API_VERSION: u32 = vk::make_api_version(0, 1, 3, 204);

pub const PROPERTIES: ProfileProperties<'static> = ProfileProperties::new(NAME, SPEC_VERSION);

static CORE_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(PhysicalDeviceFeatures2[features.robust_buffer_access]),
    feature_bit!(PhysicalDeviceFeatures2[features.full_draw_index_uint32]),
    feature_bit!(PhysicalDeviceFeatures2[features.image_cube_array]),
    feature_bit!(PhysicalDeviceFeatures2[features.independent_blend]),
    feature_bit!(PhysicalDeviceFeatures2[features.sample_rate_shading]),
    feature_bit!(PhysicalDeviceFeatures2[features.draw_indirect_first_instance]),
    feature_bit!(PhysicalDeviceFeatures2[features.depth_clamp]),
    feature_bit!(PhysicalDeviceFeatures2[features.depth_bias_clamp]),
    feature_bit!(PhysicalDeviceFeatures2[features.sampler_anisotropy]),
    feature_bit!(PhysicalDeviceFeatures2[features.occlusion_query_precise]),
    feature_bit!(PhysicalDeviceFeatures2[features.fragment_stores_and_atomics]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_image_extended_formats]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_uniform_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_sampled_image_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_buffer_array_dynamic_indexing]),
    feature_bit!(PhysicalDeviceFeatures2[features.shader_storage_image_array_dynamic_indexing]),
];

static VULKAN_11_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(Vulkan11[multiview]),
    feature_bit!(Vulkan11[sampler_ycbcr_conversion]),
];

static VULKAN_12_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(Vulkan12[sampler_mirror_clamp_to_edge]),
    feature_bit!(Vulkan12[descriptor_indexing]),
    feature_bit!(Vulkan12[shader_uniform_texel_buffer_array_dynamic_indexing]),
    feature_bit!(Vulkan12[shader_storage_texel_buffer_array_dynamic_indexing]),
    feature_bit!(Vulkan12[shader_sampled_image_array_non_uniform_indexing]),
    feature_bit!(Vulkan12[shader_uniform_texel_buffer_array_non_uniform_indexing]),
    feature_bit!(Vulkan12[descriptor_binding_sampled_image_update_after_bind]),
    feature_bit!(Vulkan12[descriptor_binding_storage_image_update_after_bind]),
    feature_bit!(Vulkan12[descriptor_binding_storage_buffer_update_after_bind]),
    feature_bit!(Vulkan12[descriptor_binding_uniform_texel_buffer_update_after_bind]),
    feature_bit!(Vulkan12[descriptor_binding_storage_texel_buffer_update_after_bind]),
    feature_bit!(Vulkan12[descriptor_binding_update_unused_while_pending]),
    feature_bit!(Vulkan12[descriptor_binding_partially_bound]),
    feature_bit!(Vulkan12[descriptor_binding_variable_descriptor_count]),
    feature_bit!(Vulkan12[runtime_descriptor_array]),
    feature_bit!(Vulkan12[scalar_block_layout]),
    feature_bit!(Vulkan12[imageless_framebuffer]),
    feature_bit!(Vulkan12[uniform_buffer_standard_layout]),
    feature_bit!(Vulkan12[subgroup_broadcast_dynamic_id]),
    feature_bit!(Vulkan12[vulkan_memory_model_device_scope]),
];

static VULKAN_13_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(Vulkan13[robust_image_access]),
    feature_bit!(Vulkan13[inline_uniform_block]),
    feature_bit!(Vulkan13[descriptor_binding_inline_uniform_block_update_after_bind]),
    feature_bit!(Vulkan13[pipeline_creation_cache_control]),
    feature_bit!(Vulkan13[private_data]),
    feature_bit!(Vulkan13[shader_demote_to_helper_invocation]),
    feature_bit!(Vulkan13[shader_terminate_invocation]),
    feature_bit!(Vulkan13[subgroup_size_control]),
    feature_bit!(Vulkan13[compute_full_subgroups]),
    feature_bit!(Vulkan13[synchronization2]),
    feature_bit!(Vulkan13[shader_zero_initialize_workgroup_memory]),
    feature_bit!(Vulkan13[dynamic_rendering]),
    feature_bit!(Vulkan13[maintenance4]),
];

static CORE_LIMITS: &[Field<PropertyStruct>] = &[
    limit!([max_image_dimension1_d]: u32 >= 8192),
    limit!([max_image_dimension2_d]: u32 >= 8192),
    limit!([max_image_dimension_cube]: u32 >= 8192),
    limit!([max_image_array_layers]: u32 >= 2048),
    limit!([max_uniform_buffer_range]: u32 >= 65536),
    limit!([buffer_image_granularity]: u64 <= 4096),
    limit!([max_per_stage_descriptor_samplers]: u32 >= 64),
    limit!([max_per_stage_descriptor_uniform_buffers]: u32 >= 15),
    limit!([max_per_stage_descriptor_storage_buffers]: u32 >= 30),
    limit!([max_per_stage_descriptor_sampled_images]: u32 >= 200),
    limit!([max_per_stage_descriptor_storage_images]: u32 >= 16),
    limit!([max_per_stage_resources]: u32 >= 200),
    limit!([max_descriptor_set_samplers]: u32 >= 576),
    limit!([max_descriptor_set_uniform_buffers]: u32 >= 90),
    limit!([max_descriptor_set_storage_buffers]: u32 >= 96),
    limit!([max_descriptor_set_sampled_images]: u32 >= 1800),
    limit!([max_descriptor_set_storage_images]: u32 >= 144),
    limit!([max_fragment_combined_output_resources]: u32 >= 16),
    limit!([max_compute_work_group_invocations]: u32 >= 256),
    limit!([max_compute_work_group_size[0]]: u32 >= 256),
    limit!([max_compute_work_group_size[1]]: u32 >= 256),
    limit!([max_compute_work_group_size[2]]: u32 >= 64),
    limit!([sub_texel_precision_bits]: u32 >= 8),
    limit!([mipmap_precision_bits]: u32 >= 6),
    limit!([max_sampler_lod_bias]: f32 >= 14.0),
    limit!([point_size_granularity]: f32 <= 0.125),
    limit!([line_width_granularity]: f32 <= 0.5),
    limit!([standard_sample_locations]: bool == true),
    limit!([max_color_attachments]: u32 >= 7),
    limit!([min_texel_offset]: i32 <= -8),
    limit!([max_texel_offset]: u32 >= 7),
    limit!([point_size_range]: range contains [1.0, 64.0]),
];

static VULKAN_11_PROPERTIES: &[Field<PropertyStruct>] = &[
    property!(Vulkan11[subgroup_size]: u32 >= 4),
    property!(Vulkan11[subgroup_supported_stages]:
        flags superset bits!(vk::ShaderStageFlags: COMPUTE | FRAGMENT)),
    property!(Vulkan11[subgroup_supported_operations]:
        flags superset bits!(vk::SubgroupFeatureFlags:
            BASIC | VOTE | ARITHMETIC | BALLOT | SHUFFLE | SHUFFLE_RELATIVE | QUAD)),
];

static VULKAN_12_PROPERTIES: &[Field<PropertyStruct>] = &[
    property!(Vulkan12[shader_signed_zero_inf_nan_preserve_float16]: bool == true),
    property!(Vulkan12[shader_signed_zero_inf_nan_preserve_float32]: bool == true),
    property!(Vulkan12[max_per_stage_descriptor_update_after_bind_input_attachments]: u32 >= 7),
];

static VULKAN_13_PROPERTIES: &[Field<PropertyStruct>] = &[
    property!(Vulkan13[max_inline_uniform_block_size]: u32 >= 256),
    property!(Vulkan13[max_per_stage_descriptor_inline_uniform_blocks]: u32 >= 4),
    property!(Vulkan13[max_per_stage_descriptor_update_after_bind_inline_uniform_blocks]: u32 >= 4),
    property!(Vulkan13[max_descriptor_set_inline_uniform_blocks]: u32 >= 4),
    property!(Vulkan13[max_descriptor_set_update_after_bind_inline_uniform_blocks]: u32 >= 4),
    property!(Vulkan13[max_inline_uniform_total_size]: u32 >= 256),
];

pub static PROFILE: ProfileDesc = ProfileDesc {
    properties: PROPERTIES,
    min_api_version: MIN_API_VERSION,
    extensions: &[],
    fallbacks: &[],
    features: &[
        CORE_FEATURES,
        VULKAN_11_FEATURES,
        VULKAN_12_FEATURES,
        VULKAN_13_FEATURES,
    ],
    limits: &[
        CORE_LIMITS,
        VULKAN_11_PROPERTIES,
        VULKAN_12_PROPERTIES,
        VULKAN_13_PROPERTIES,
    ],
    formats: &[],
    memory_types: &[],
    queue_families: &[],
};
