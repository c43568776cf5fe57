//! `VP_LUNARG_desktop_portability_2021_subset`.
//!
//! Desktop portability on top of `VK_KHR_portability_subset`. Shares every
//! table with [`super::desktop_portability_2021`] and adds the subset's own
//! structures.

use super::{concat, desktop_portability_2021 as base};
use crate::field::{feature_bit, property, Field};
use crate::profile::{ExtensionProperties, ProfileDesc, ProfileProperties};
use crate::structures::{FeatureStruct, PropertyStruct};
use ash::vk;

pub const NAME: &str = "VP_LUNARG_desktop_portability_2021_subset";
pub const SPEC_VERSION: u32 = 1;
pub const MIN_API_VERSION: u32 = vk::make_api_version(0, 1, 1, 142);

pub const PROPERTIES: ProfileProperties<'static> = ProfileProperties::new(NAME, SPEC_VERSION);

static EXTENSIONS: [ExtensionProperties; 16] = concat(
    base::EXTENSIONS,
    [ExtensionProperties::new(c"VK_KHR_portability_subset", 1)],
);

static SUBSET_FEATURES: &[Field<FeatureStruct>] = &[
    feature_bit!(PortabilitySubset[constant_alpha_color_blend_factors]),
    feature_bit!(PortabilitySubset[events]),
    feature_bit!(PortabilitySubset[image_view_format_reinterpretation]),
    feature_bit!(PortabilitySubset[image_view_format_swizzle]),
    feature_bit!(PortabilitySubset[multisample_array_image]),
    feature_bit!(PortabilitySubset[mutable_comparison_samplers]),
    feature_bit!(PortabilitySubset[point_polygons]),
    feature_bit!(PortabilitySubset[sampler_mip_lod_bias]),
    feature_bit!(PortabilitySubset[separate_stencil_mask_ref]),
    feature_bit!(PortabilitySubset[shader_sample_rate_interpolation_functions]),
    feature_bit!(PortabilitySubset[tessellation_isolines]),
    feature_bit!(PortabilitySubset[tessellation_point_mode]),
    feature_bit!(PortabilitySubset[triangle_fans]),
    feature_bit!(PortabilitySubset[vertex_attribute_access_beyond_stride]),
];

static SUBSET_PROPERTIES: &[Field<PropertyStruct>] = &[property!(
    PortabilitySubset[min_vertex_input_binding_stride_alignment]: u32 <= 4
)];

static FALLBACKS: &[ProfileProperties<'static>] = &[base::PROPERTIES];

pub static PROFILE: ProfileDesc = ProfileDesc {
    properties: PROPERTIES,
    min_api_version: MIN_API_VERSION,
    extensions: &EXTENSIONS,
    fallbacks: FALLBACKS,
    features: &[base::CORE_FEATURES, base::EXTENSION_FEATURES, SUBSET_FEATURES],
    limits: &[base::CORE_LIMITS, base::EXTENSION_PROPERTIES, SUBSET_PROPERTIES],
    formats: base::FORMATS,
    memory_types: base::MEMORY_TYPES,
    queue_families: base::QUEUE_FAMILIES,
};
