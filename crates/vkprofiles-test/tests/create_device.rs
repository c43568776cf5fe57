//! Profile-driven device creation against scripted devices.

use ash::vk;
use vkprofiles::profiles::{desktop_portability_2021, roadmap_2022};
use vkprofiles::{
    build_device_create_request, create_device, find_profile, profiles, ChainNode,
    DeviceCreateRequest, FeatureChain, FeatureStruct, ProfileCreateFlags,
    ProfileDeviceCreateInfo, ProfileError, ProfileProperties, QueueCreateRequest, VulkanDriver,
};
use vkprofiles_test::{init_test_logging, FakeDriver};

fn device() -> vk::PhysicalDevice {
    use ash::vk::Handle;
    vk::PhysicalDevice::from_raw(0x1000)
}

fn minimal_request() -> DeviceCreateRequest {
    DeviceCreateRequest::new().queue(QueueCreateRequest::new(0, [1.0]))
}

fn vulkan13(chain: &FeatureChain) -> Vec<vk::PhysicalDeviceVulkan13Features<'static>> {
    chain
        .iter()
        .filter_map(|node| match node {
            FeatureStruct::Vulkan13(s) => Some(*s),
            _ => None,
        })
        .collect()
}

#[test]
fn no_profile_matches_direct_creation() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    let request = minimal_request();

    let direct = driver.create_device(device(), &request);
    let through = create_device(&driver, device(), &ProfileDeviceCreateInfo::new(&request));
    assert_eq!(through, direct.map_err(ProfileError::from));

    let created = driver.created_requests();
    assert_eq!(created.len(), 2);
    assert_eq!(format!("{:?}", created[0]), format!("{:?}", created[1]));
}

#[test]
fn empty_profile_name_is_pass_through() {
    init_test_logging();
    let driver = FakeDriver::new();
    let request = minimal_request().extension(c"VK_KHR_swapchain");
    let info = ProfileDeviceCreateInfo::new(&request).profile(ProfileProperties::new("", 1));

    let device_handle = create_device(&driver, device(), &info).unwrap();
    assert_eq!(
        device_handle,
        driver.create_device(device(), &request).unwrap()
    );
}

#[test]
fn null_physical_device_is_pass_through() {
    init_test_logging();
    let driver = FakeDriver::new();
    let request = minimal_request();
    let info = ProfileDeviceCreateInfo::new(&request).profile(roadmap_2022::PROPERTIES);

    create_device(&driver, vk::PhysicalDevice::null(), &info).unwrap();
    let created = driver.created_requests();
    assert_eq!(created.len(), 1);
    assert!(created[0].features.is_empty());
    assert!(created[0].enabled_extensions.is_empty());
}

#[test]
fn unknown_profile_fails_without_creating() {
    init_test_logging();
    let driver = FakeDriver::new();
    let request = minimal_request();
    let info = ProfileDeviceCreateInfo::new(&request)
        .profile(ProfileProperties::new("not-a-real-profile", 1));

    assert_eq!(
        create_device(&driver, device(), &info),
        Err(ProfileError::UnknownProfile(
            "not-a-real-profile".to_string()
        ))
    );
    assert!(!driver.calls().contains(&"create_device"));
}

#[test]
fn caller_structures_are_not_clobbered() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    let caller = vk::PhysicalDeviceVulkan13Features::default().synchronization2(true);
    let request = minimal_request()
        .features(FeatureChain::new().with(FeatureStruct::Vulkan13(caller)));
    let info = ProfileDeviceCreateInfo::new(&request).profile(roadmap_2022::PROPERTIES);

    create_device(&driver, device(), &info).unwrap();
    let created = &driver.created_requests()[0];

    let nodes = vulkan13(&created.features);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].dynamic_rendering, vk::FALSE);
    assert_eq!(nodes[0].synchronization2, vk::TRUE);
}

#[test]
fn synthesized_structures_carry_every_required_feature() {
    init_test_logging();
    for profile in profiles() {
        let driver = FakeDriver::satisfying(&profile);
        let request = minimal_request();
        let info = ProfileDeviceCreateInfo::new(&request).profile(profile);
        create_device(&driver, device(), &info).unwrap();

        let created = &driver.created_requests()[0];
        assert!(created.features.iter().next().is_some_and(ChainNode::is_base));

        let desc = find_profile(profile.name).unwrap();
        for field in desc.feature_fields() {
            let node = created.features.find(field.s_type());
            assert!(
                node.is_some_and(|node| field.is_satisfied_by(node)),
                "{}: {}",
                profile.name,
                field.name
            );
        }
    }
}

#[test]
fn created_request_matches_built_request() {
    init_test_logging();
    let driver = FakeDriver::satisfying(&desktop_portability_2021::PROPERTIES);
    let request = minimal_request().extension(c"VK_EXT_memory_budget");
    let info = ProfileDeviceCreateInfo::new(&request)
        .profile(desktop_portability_2021::PROPERTIES)
        .flags(ProfileCreateFlags::DISABLE_ROBUST_BUFFER_ACCESS);

    let built = build_device_create_request(&info).unwrap().unwrap();
    create_device(&driver, device(), &info).unwrap();
    let created = &driver.created_requests()[0];

    assert_eq!(created.enabled_extensions, built.enabled_extensions);
    assert_eq!(created.features.s_types(), built.features.s_types());
    assert_eq!(created.queue_create_infos, request.queue_create_infos);
    let base = created
        .features
        .iter()
        .next()
        .and_then(FeatureStruct::core_features)
        .unwrap();
    assert_eq!(base.robust_buffer_access, vk::FALSE);
}

#[test]
fn legacy_and_chained_callers_agree() {
    init_test_logging();
    let features = vk::PhysicalDeviceFeatures {
        geometry_shader: vk::TRUE,
        ..Default::default()
    };
    let legacy = minimal_request().enabled_features(features);
    let chained =
        minimal_request().features(FeatureChain::new().with(FeatureStruct::features2(features)));

    let built = |request: &DeviceCreateRequest| {
        let info = ProfileDeviceCreateInfo::new(request).profile(roadmap_2022::PROPERTIES);
        build_device_create_request(&info).unwrap().unwrap()
    };
    let legacy = built(&legacy);
    let chained = built(&chained);

    assert!(legacy.enabled_features.is_none());
    assert_eq!(legacy.features.s_types(), chained.features.s_types());
    let legacy_base = legacy.features.iter().next().and_then(FeatureStruct::core_features);
    assert_eq!(legacy_base.map(|f| f.geometry_shader), Some(vk::TRUE));
}

#[test]
fn driver_errors_propagate() {
    init_test_logging();
    let mut driver = FakeDriver::satisfying(&roadmap_2022::PROPERTIES);
    driver.create_error = Some(vk::Result::ERROR_FEATURE_NOT_PRESENT);
    let request = minimal_request();

    let info = ProfileDeviceCreateInfo::new(&request).profile(roadmap_2022::PROPERTIES);
    assert_eq!(
        create_device(&driver, device(), &info),
        Err(ProfileError::Vulkan(vk::Result::ERROR_FEATURE_NOT_PRESENT))
    );

    let info = ProfileDeviceCreateInfo::new(&request);
    assert_eq!(
        create_device(&driver, device(), &info),
        Err(ProfileError::Vulkan(vk::Result::ERROR_FEATURE_NOT_PRESENT))
    );
}
