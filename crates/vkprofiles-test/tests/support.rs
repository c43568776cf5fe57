//! Support checks against scripted devices.

use ash::vk;
use vkprofiles::profiles::{android_baseline_2021, desktop_portability_2021, roadmap_2022};
use vkprofiles::{
    check_support, get_profile_support, profiles, FeatureStruct, Mismatch, ProfileError,
    ProfileProperties, PropertyStruct, Support,
};
use vkprofiles_test::{init_test_logging, FakeDriver};

const DEVICE: vk::PhysicalDevice = vk::PhysicalDevice::null();

fn check(driver: &FakeDriver, profile: &ProfileProperties<'_>) -> Support {
    check_support(driver, DEVICE, profile).unwrap()
}

fn vulkan13_mut(driver: &mut FakeDriver) -> &mut vk::PhysicalDeviceVulkan13Features<'static> {
    match driver
        .features
        .find_mut(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES)
    {
        Some(FeatureStruct::Vulkan13(s)) => s,
        other => panic!("unexpected node {other:?}"),
    }
}

fn vulkan11_properties_mut(
    driver: &mut FakeDriver,
) -> &mut vk::PhysicalDeviceVulkan11Properties<'static> {
    match driver
        .properties
        .find_mut(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES)
    {
        Some(PropertyStruct::Vulkan11(s)) => s,
        other => panic!("unexpected node {other:?}"),
    }
}

#[test]
fn every_profile_accepts_a_device_built_from_it() {
    init_test_logging();
    for profile in profiles() {
        let driver = FakeDriver::satisfying(&profile);
        assert_eq!(check(&driver, &profile), Support::Supported, "{}", profile.name);
        assert!(get_profile_support(&driver, DEVICE, &profile).unwrap());
    }
}

#[test]
fn empty_device_supports_nothing() {
    init_test_logging();
    let driver = FakeDriver::new();
    for profile in profiles() {
        assert!(!get_profile_support(&driver, DEVICE, &profile).unwrap());
    }
}

#[test]
fn unknown_profile_is_unsupported_not_an_error() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    let profile = ProfileProperties::new("not-a-real-profile", 1);
    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::UnknownProfile)
    );
    assert!(driver.calls().is_empty());
}

#[test]
fn newer_requested_version_fails_before_touching_the_device() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    let profile = ProfileProperties::new(roadmap_2022::NAME, roadmap_2022::SPEC_VERSION + 1);

    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::SpecVersion {
            requested: roadmap_2022::SPEC_VERSION + 1,
            supported: roadmap_2022::SPEC_VERSION,
        })
    );
    assert!(driver.calls().is_empty());
}

#[test]
fn older_requested_version_is_accepted() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    let profile = ProfileProperties::new(roadmap_2022::NAME, 0);
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn api_version_gate() {
    init_test_logging();
    let mut driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);

    driver.api_version = vk::make_api_version(0, 1, 3, 203);
    assert!(matches!(
        check(&driver, &roadmap_2022::PROPERTIES),
        Support::Unsupported(Mismatch::ApiVersion { .. })
    ));

    driver.api_version = vk::make_api_version(0, 1, 4, 0);
    assert!(check(&driver, &roadmap_2022::PROPERTIES).is_supported());
}

#[test]
fn extensions_may_come_from_the_instance() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.remove_device_extension(c"VK_KHR_swapchain");
    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::MissingExtension(c"VK_KHR_swapchain".to_owned()))
    );

    driver
        .instance_extensions
        .push(c"VK_KHR_swapchain".to_owned());
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn extension_names_are_case_sensitive() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    driver.remove_device_extension(c"VK_KHR_swapchain");
    driver.device_extensions.push(c"vk_khr_swapchain".to_owned());
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn extension_query_errors_propagate() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    driver.extension_error = Some(vk::Result::ERROR_OUT_OF_HOST_MEMORY);

    assert_eq!(
        check_support(&driver, DEVICE, &profile),
        Err(ProfileError::Vulkan(vk::Result::ERROR_OUT_OF_HOST_MEMORY))
    );
    assert_eq!(
        get_profile_support(&driver, DEVICE, &profile),
        Err(ProfileError::Vulkan(vk::Result::ERROR_OUT_OF_HOST_MEMORY))
    );
}

#[test]
fn missing_format_flag_fails_the_format_gate() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    let format = vk::Format::D32_SFLOAT;
    let properties = driver.formats.get_mut(&format).unwrap();
    properties.optimal_tiling_features &= !vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT;
    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::Format(format))
    );

    // Extra flags beyond the requirement are fine.
    let properties = driver.formats.get_mut(&format).unwrap();
    properties.optimal_tiling_features |= vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT
        | vk::FormatFeatureFlags::SAMPLED_IMAGE_FILTER_LINEAR;
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn memory_types_match_existentially() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    let cached = vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_CACHED;

    driver.memory_types.retain(|flags| *flags != cached);
    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::MemoryType(cached))
    );

    // One type carrying more flags covers the requirement.
    driver
        .memory_types
        .push(cached | vk::MemoryPropertyFlags::HOST_COHERENT);
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn memory_type_restored_restores_support() {
    init_test_logging();
    let profile = android_baseline_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    let removed = driver.memory_types.remove(0);
    assert!(!check(&driver, &profile).is_supported());

    driver.memory_types.push(removed);
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn queue_families_match_existentially() {
    init_test_logging();
    let profile = android_baseline_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.queue_families[0].queue_flags = vk::QueueFlags::COMPUTE;
    assert!(matches!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::QueueFamily(_))
    ));

    driver.queue_families.push(vk::QueueFamilyProperties {
        queue_flags: vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE | vk::QueueFlags::TRANSFER,
        queue_count: 4,
        ..Default::default()
    });
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn missing_feature_fails_the_feature_gate() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    vulkan13_mut(&mut driver).dynamic_rendering = vk::FALSE;
    assert!(matches!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::Feature { .. })
    ));

    vulkan13_mut(&mut driver).dynamic_rendering = vk::TRUE;
    // Features the profile does not mention are not checked.
    vulkan13_mut(&mut driver).texture_compression_astc_hdr = vk::TRUE;
    assert!(check(&driver, &profile).is_supported());
}

#[test]
fn unreported_feature_structure_fails() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    driver.features = driver
        .features
        .iter()
        .copied()
        .filter(|node| !matches!(node, FeatureStruct::Vulkan12(_)))
        .collect();
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn capacity_limits_are_monotonic() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.limits_mut().max_image_dimension2_d = 16384;
    assert!(check(&driver, &profile).is_supported());

    driver.limits_mut().max_image_dimension2_d = 8191;
    assert!(matches!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::Property { .. })
    ));
}

#[test]
fn alignment_limits_are_inverted() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.limits_mut().buffer_image_granularity = 1;
    assert!(check(&driver, &profile).is_supported());

    driver.limits_mut().buffer_image_granularity = 8192;
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn sample_mask_words_must_not_exceed_profile() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.limits_mut().max_sample_mask_words = 2;
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn device_range_must_contain_profile_range() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.limits_mut().point_size_range = [0.5, 256.0];
    assert!(check(&driver, &profile).is_supported());

    driver.limits_mut().point_size_range = [1.0, 32.0];
    assert!(!check(&driver, &profile).is_supported());

    driver.limits_mut().point_size_range = [2.0, 64.0];
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn capability_flags_must_be_a_superset() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    vulkan11_properties_mut(&mut driver).subgroup_supported_operations |=
        vk::SubgroupFeatureFlags::CLUSTERED;
    assert!(check(&driver, &profile).is_supported());

    vulkan11_properties_mut(&mut driver).subgroup_supported_operations &=
        !vk::SubgroupFeatureFlags::BALLOT;
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn exact_match_fields_require_equality() {
    init_test_logging();
    let profile = roadmap_2022::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);

    driver.limits_mut().standard_sample_locations = vk::FALSE;
    assert!(!check(&driver, &profile).is_supported());
}

#[test]
fn first_failing_gate_wins() {
    init_test_logging();
    let profile = desktop_portability_2021::PROPERTIES;
    let mut driver = FakeDriver::satisfying(&profile);
    driver.remove_device_extension(c"VK_KHR_timeline_semaphore");
    driver.formats.clear();
    driver.limits_mut().max_image_dimension2_d = 1;

    assert_eq!(
        check(&driver, &profile),
        Support::Unsupported(Mismatch::MissingExtension(
            c"VK_KHR_timeline_semaphore".to_owned()
        ))
    );
    let calls = driver.calls();
    assert!(!calls.contains(&"format_properties"));
    assert!(!calls.contains(&"device_properties"));
}
