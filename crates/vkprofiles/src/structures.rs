//! Closed structure families.
//!
//! Each family is a sum type with one variant per supported Vulkan
//! structure. Dispatching over the variant replaces casting a `p_next`
//! pointer by its tag.

use crate::chain::{ChainNode, StructureChain};
use ash::vk;
use std::ffi::c_void;

macro_rules! structure_family {
    (
        $(#[$meta:meta])*
        $name:ident (base: $base:ident) {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ident), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {
            $( $(#[$vmeta])* $variant(vk::$ty<'static>), )+
        }

        impl $name {
            /// A zeroed node for `s_type`, or `None` if the type is not part
            /// of this family.
            pub fn zeroed(s_type: vk::StructureType) -> Option<Self> {
                $(
                    if s_type == vk::$ty::default().s_type {
                        return Some(Self::$variant(vk::$ty::default()));
                    }
                )+
                None
            }
        }

        impl ChainNode for $name {
            fn s_type(&self) -> vk::StructureType {
                match self {
                    $( Self::$variant(s) => s.s_type, )+
                }
            }

            fn base() -> Self {
                Self::$base(vk::$base::default())
            }

            fn next_slot(&mut self) -> &mut *mut c_void {
                match self {
                    $( Self::$variant(s) => &mut s.p_next, )+
                }
            }

            fn as_raw_mut(&mut self) -> *mut c_void {
                match self {
                    $( Self::$variant(s) => <*mut vk::$ty<'static>>::cast(s), )+
                }
            }
        }
    };
}

structure_family! {
    /// Device feature structures.
    FeatureStruct (base: PhysicalDeviceFeatures2) {
        /// `VkPhysicalDeviceFeatures2`, anchoring every feature chain.
        PhysicalDeviceFeatures2(PhysicalDeviceFeatures2),
        Vulkan11(PhysicalDeviceVulkan11Features),
        Vulkan12(PhysicalDeviceVulkan12Features),
        Vulkan13(PhysicalDeviceVulkan13Features),
        DescriptorIndexing(PhysicalDeviceDescriptorIndexingFeatures),
        HostQueryReset(PhysicalDeviceHostQueryResetFeatures),
        ImagelessFramebuffer(PhysicalDeviceImagelessFramebufferFeatures),
        TimelineSemaphore(PhysicalDeviceTimelineSemaphoreFeatures),
        Multiview(PhysicalDeviceMultiviewFeatures),
        Storage16Bit(PhysicalDevice16BitStorageFeatures),
        ShaderFloat16Int8(PhysicalDeviceShaderFloat16Int8Features),
        SamplerYcbcrConversion(PhysicalDeviceSamplerYcbcrConversionFeatures),
        ShaderDrawParameters(PhysicalDeviceShaderDrawParametersFeatures),
        SubgroupSizeControl(PhysicalDeviceSubgroupSizeControlFeatures),
        InlineUniformBlock(PhysicalDeviceInlineUniformBlockFeatures),
        ImageRobustness(PhysicalDeviceImageRobustnessFeatures),
        PortabilitySubset(PhysicalDevicePortabilitySubsetFeaturesKHR),
    }
}

structure_family! {
    /// Device property structures.
    PropertyStruct (base: PhysicalDeviceProperties2) {
        /// `VkPhysicalDeviceProperties2`, carrying the core limits.
        PhysicalDeviceProperties2(PhysicalDeviceProperties2),
        Vulkan11(PhysicalDeviceVulkan11Properties),
        Vulkan12(PhysicalDeviceVulkan12Properties),
        Vulkan13(PhysicalDeviceVulkan13Properties),
        Subgroup(PhysicalDeviceSubgroupProperties),
        Maintenance3(PhysicalDeviceMaintenance3Properties),
        DepthStencilResolve(PhysicalDeviceDepthStencilResolveProperties),
        DescriptorIndexing(PhysicalDeviceDescriptorIndexingProperties),
        InlineUniformBlock(PhysicalDeviceInlineUniformBlockProperties),
        Multiview(PhysicalDeviceMultiviewProperties),
        TimelineSemaphore(PhysicalDeviceTimelineSemaphoreProperties),
        SubgroupSizeControl(PhysicalDeviceSubgroupSizeControlProperties),
        PortabilitySubset(PhysicalDevicePortabilitySubsetPropertiesKHR),
    }
}

/// Chain of feature structures.
pub type FeatureChain = StructureChain<FeatureStruct>;

/// Chain of property structures.
pub type PropertyChain = StructureChain<PropertyStruct>;

impl FeatureStruct {
    /// A base node carrying the given core features.
    pub fn features2(features: vk::PhysicalDeviceFeatures) -> Self {
        Self::PhysicalDeviceFeatures2(vk::PhysicalDeviceFeatures2::default().features(features))
    }

    /// The core features of a base node.
    pub fn core_features(&self) -> Option<&vk::PhysicalDeviceFeatures> {
        match self {
            Self::PhysicalDeviceFeatures2(s) => Some(&s.features),
            _ => None,
        }
    }

    /// The versioned core structure this extension structure was promoted
    /// into. A device create chain may carry one or the other, not both.
    pub fn promoted_into(&self) -> Option<vk::StructureType> {
        match self {
            Self::Multiview(_)
            | Self::Storage16Bit(_)
            | Self::SamplerYcbcrConversion(_)
            | Self::ShaderDrawParameters(_) => {
                Some(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES)
            }
            Self::DescriptorIndexing(_)
            | Self::HostQueryReset(_)
            | Self::ImagelessFramebuffer(_)
            | Self::TimelineSemaphore(_)
            | Self::ShaderFloat16Int8(_) => {
                Some(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES)
            }
            Self::SubgroupSizeControl(_)
            | Self::InlineUniformBlock(_)
            | Self::ImageRobustness(_) => {
                Some(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES)
            }
            Self::PhysicalDeviceFeatures2(_)
            | Self::Vulkan11(_)
            | Self::Vulkan12(_)
            | Self::Vulkan13(_)
            | Self::PortabilitySubset(_) => None,
        }
    }
}

impl PropertyStruct {
    /// The core properties of a base node.
    pub fn core_properties(&self) -> Option<&vk::PhysicalDeviceProperties> {
        match self {
            Self::PhysicalDeviceProperties2(s) => Some(&s.properties),
            _ => None,
        }
    }
}
