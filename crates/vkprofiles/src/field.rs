//! Declared requirement fields and their comparators.
//!
//! A profile lists the fields it cares about; anything it does not list is
//! left alone, both when defaulting and when comparing against a device.

use ash::vk;
use std::cmp::Ordering;
use std::fmt;

/// A field value as declared by a profile or reported by a device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    U32(u32),
    U64(u64),
    I32(i32),
    F32(f32),
    /// Raw bits of a 32-bit flags type.
    Flags(u32),
    /// A `[min, max]` interval.
    Range([f32; 2]),
}

impl Value {
    fn scalar_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::U32(a), Self::U32(b)) => Some(a.cmp(&b)),
            (Self::U64(a), Self::U64(b)) => Some(a.cmp(&b)),
            (Self::I32(a), Self::I32(b)) => Some(a.cmp(&b)),
            (Self::F32(a), Self::F32(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::Flags(v) => write!(f, "{v:#x}"),
            Self::Range([lo, hi]) => write!(f, "[{lo}, {hi}]"),
        }
    }
}

/// How a device value is checked against a profile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Device value must equal the profile value.
    Equal,
    /// Device value must be at least the profile value (capacities).
    AtLeast,
    /// Device value must be at most the profile value (alignments,
    /// granularities).
    AtMost,
    /// Device interval must contain the profile interval.
    Contains,
    /// Device flags must include every profile flag.
    Superset,
}

impl Comparator {
    /// Whether `device` satisfies `required` under this comparator.
    ///
    /// Values of different kinds never satisfy each other.
    pub fn accepts(self, device: Value, required: Value) -> bool {
        match self {
            Self::Equal => device == required,
            Self::AtLeast => matches!(
                device.scalar_cmp(required),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::AtMost => matches!(
                device.scalar_cmp(required),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Self::Contains => match (device, required) {
                (Value::Range([dev_lo, dev_hi]), Value::Range([req_lo, req_hi])) => {
                    dev_lo <= req_lo && dev_hi >= req_hi
                }
                _ => false,
            },
            Self::Superset => match (device, required) {
                (Value::Flags(dev), Value::Flags(req)) => dev & req == req,
                _ => false,
            },
        }
    }
}

/// One field a profile declares on a structure of family `S`.
pub struct Field<S> {
    /// `Structure.field` name, for diagnostics.
    pub name: &'static str,
    pub comparator: Comparator,
    pub value: Value,
    pub(crate) new_node: fn() -> S,
    pub(crate) read: fn(&S) -> Option<Value>,
    pub(crate) write: fn(&mut S, Value) -> bool,
}

impl<S: crate::chain::ChainNode> Field<S> {
    /// The structure type owning this field.
    pub fn s_type(&self) -> vk::StructureType {
        (self.new_node)().s_type()
    }

    /// A zeroed node of the owning structure type.
    pub fn new_node(&self) -> S {
        (self.new_node)()
    }

    /// Read the field from `node`; `None` if the node is another type.
    pub fn read(&self, node: &S) -> Option<Value> {
        (self.read)(node)
    }

    /// Write the declared value into `node`.
    ///
    /// Returns `false` if the node is another type.
    pub fn apply(&self, node: &mut S) -> bool {
        (self.write)(node, self.value)
    }

    /// Whether `node` satisfies this field. Nodes of another type never do.
    pub fn is_satisfied_by(&self, node: &S) -> bool {
        self.read(node)
            .is_some_and(|device| self.comparator.accepts(device, self.value))
    }
}

impl<S> fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("comparator", &self.comparator)
            .field("value", &self.value)
            .finish()
    }
}

/// Flags types whose raw bits can be written back from a [`Value::Flags`].
pub(crate) trait RawFlags {
    fn from_bits(bits: u32) -> Self;
}

macro_rules! impl_raw_flags {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl RawFlags for vk::$ty {
                fn from_bits(bits: u32) -> Self {
                    Self::from_raw(bits)
                }
            }
        )+
    };
}

impl_raw_flags!(
    SubgroupFeatureFlags,
    ShaderStageFlags,
    ResolveModeFlags,
    SampleCountFlags,
);

/// OR together flag constants in a const context.
///
/// `bits!(vk::SampleCountFlags: TYPE_1 | TYPE_4)` yields the raw `u32`.
macro_rules! bits {
    ($ty:path: $($flag:ident)|+) => {
        0 $(| <$ty>::$flag.as_raw())+
    };
}

/// Build a flags value from constants in a const context.
macro_rules! flags {
    ($ty:path: $($flag:ident)|+) => {
        <$ty>::from_raw($crate::field::bits!($ty: $($flag)|+))
    };
}

/// Declare a [`Field`] on a structure family variant.
///
/// ```ignore
/// field!(FeatureStruct::Vulkan12 [buffer_device_address]: bool == true)
/// field!(PropertyStruct::PhysicalDeviceProperties2
///     [properties.limits.max_image_dimension2_d]: u32 >= 8192)
/// ```
macro_rules! field {
    (@read bool, $v:expr) => { $crate::field::Value::Bool($v != ash::vk::FALSE) };
    (@read u32, $v:expr) => { $crate::field::Value::U32($v) };
    (@read u64, $v:expr) => { $crate::field::Value::U64($v) };
    (@read i32, $v:expr) => { $crate::field::Value::I32($v) };
    (@read f32, $v:expr) => { $crate::field::Value::F32($v) };
    (@read flags, $v:expr) => { $crate::field::Value::Flags($v.as_raw()) };
    (@read range, $v:expr) => { $crate::field::Value::Range($v) };

    (@value bool, $v:expr) => { $crate::field::Value::Bool($v) };
    (@value u32, $v:expr) => { $crate::field::Value::U32($v) };
    (@value u64, $v:expr) => { $crate::field::Value::U64($v) };
    (@value i32, $v:expr) => { $crate::field::Value::I32($v) };
    (@value f32, $v:expr) => { $crate::field::Value::F32($v) };
    (@value flags, $v:expr) => { $crate::field::Value::Flags($v) };
    (@value range, $v:expr) => { $crate::field::Value::Range($v) };

    (@cmp ==) => { $crate::field::Comparator::Equal };
    (@cmp >=) => { $crate::field::Comparator::AtLeast };
    (@cmp <=) => { $crate::field::Comparator::AtMost };
    (@cmp contains) => { $crate::field::Comparator::Contains };
    (@cmp superset) => { $crate::field::Comparator::Superset };

    (@write bool, $slot:expr, $value:expr) => {
        match $value {
            $crate::field::Value::Bool(v) => {
                $slot = ash::vk::Bool32::from(v);
                true
            }
            _ => false,
        }
    };
    (@write flags, $slot:expr, $value:expr) => {
        match $value {
            $crate::field::Value::Flags(bits) => {
                $slot = $crate::field::RawFlags::from_bits(bits);
                true
            }
            _ => false,
        }
    };
    (@write u32, $slot:expr, $value:expr) => {
        match $value { $crate::field::Value::U32(v) => { $slot = v; true } _ => false }
    };
    (@write u64, $slot:expr, $value:expr) => {
        match $value { $crate::field::Value::U64(v) => { $slot = v; true } _ => false }
    };
    (@write i32, $slot:expr, $value:expr) => {
        match $value { $crate::field::Value::I32(v) => { $slot = v; true } _ => false }
    };
    (@write f32, $slot:expr, $value:expr) => {
        match $value { $crate::field::Value::F32(v) => { $slot = v; true } _ => false }
    };
    (@write range, $slot:expr, $value:expr) => {
        match $value { $crate::field::Value::Range(v) => { $slot = v; true } _ => false }
    };

    ($family:ident :: $variant:ident [$($path:tt)+] : $kind:ident $cmp:tt $value:expr) => {
        $crate::field::Field::<$crate::structures::$family> {
            name: concat!(stringify!($variant), ".", stringify!($($path)+)),
            comparator: $crate::field::field!(@cmp $cmp),
            value: $crate::field::field!(@value $kind, $value),
            new_node: || $crate::structures::$family::$variant(Default::default()),
            read: |node| match node {
                $crate::structures::$family::$variant(s) => Some($crate::field::field!(@read $kind, s.$($path)+)),
                _ => None,
            },
            write: |node, value| match node {
                $crate::structures::$family::$variant(s) => $crate::field::field!(@write $kind, s.$($path)+, value),
                _ => false,
            },
        }
    };
}

/// A required feature bit.
macro_rules! feature_bit {
    ($variant:ident [$($path:tt)+]) => {
        $crate::field::field!(FeatureStruct::$variant [$($path)+]: bool == true)
    };
}

/// A limit on the core `VkPhysicalDeviceLimits`.
macro_rules! limit {
    ([$($path:tt)+]: $kind:ident $cmp:tt $value:expr) => {
        $crate::field::field!(PropertyStruct::PhysicalDeviceProperties2
            [properties.limits.$($path)+]: $kind $cmp $value)
    };
}

/// A property on an extension or versioned property structure.
macro_rules! property {
    ($variant:ident [$($path:tt)+]: $kind:ident $cmp:tt $value:expr) => {
        $crate::field::field!(PropertyStruct::$variant [$($path)+]: $kind $cmp $value)
    };
}

pub(crate) use {bits, feature_bit, field, flags, limit, property};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainNode;
    use crate::structures::{FeatureStruct, PropertyStruct};

    #[test]
    fn capacity_fields_accept_larger_devices() {
        let cmp = Comparator::AtLeast;
        assert!(cmp.accepts(Value::U32(8192), Value::U32(4096)));
        assert!(cmp.accepts(Value::U32(4096), Value::U32(4096)));
        assert!(!cmp.accepts(Value::U32(2048), Value::U32(4096)));
    }

    #[test]
    fn alignment_fields_accept_smaller_devices() {
        let cmp = Comparator::AtMost;
        assert!(cmp.accepts(Value::U64(64), Value::U64(256)));
        assert!(!cmp.accepts(Value::U64(1024), Value::U64(256)));
        assert!(cmp.accepts(Value::F32(0.125), Value::F32(0.5)));
        assert!(cmp.accepts(Value::I32(-16), Value::I32(-8)));
    }

    #[test]
    fn range_must_contain_profile_range() {
        let cmp = Comparator::Contains;
        assert!(cmp.accepts(Value::Range([1.0, 64.0]), Value::Range([1.0, 8.0])));
        assert!(!cmp.accepts(Value::Range([2.0, 64.0]), Value::Range([1.0, 8.0])));
        assert!(!cmp.accepts(Value::Range([1.0, 4.0]), Value::Range([1.0, 8.0])));
    }

    #[test]
    fn flags_must_be_superset() {
        let cmp = Comparator::Superset;
        assert!(cmp.accepts(Value::Flags(0b1111), Value::Flags(0b0101)));
        assert!(!cmp.accepts(Value::Flags(0b1010), Value::Flags(0b0110)));
    }

    #[test]
    fn mismatched_kinds_never_match() {
        assert!(!Comparator::AtLeast.accepts(Value::U64(10), Value::U32(1)));
        assert!(!Comparator::Equal.accepts(Value::Bool(true), Value::U32(1)));
    }

    #[test]
    fn feature_field_reads_and_writes_its_variant() {
        let field = feature_bit!(Vulkan12[buffer_device_address]);
        assert_eq!(
            field.s_type(),
            vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES
        );

        let mut node = field.new_node();
        assert!(!field.is_satisfied_by(&node));
        assert!(field.apply(&mut node));
        assert!(field.is_satisfied_by(&node));

        let mut other = FeatureStruct::base();
        assert!(!field.apply(&mut other));
        assert_eq!(field.read(&other), None);
    }

    #[test]
    fn limit_field_uses_nested_path() {
        let field = limit!([max_compute_work_group_size[2]]: u32 >= 64);
        let mut node = PropertyStruct::base();
        assert!(field.apply(&mut node));
        assert_eq!(
            node.core_properties()
                .unwrap()
                .limits
                .max_compute_work_group_size,
            [0, 0, 64]
        );
    }

    #[test]
    fn flags_field_round_trips_bits() {
        let field = property!(Vulkan11[subgroup_supported_stages]:
            flags superset bits!(vk::ShaderStageFlags: COMPUTE | FRAGMENT));
        let mut node = field.new_node();
        field.apply(&mut node);
        assert_eq!(
            field.read(&node),
            Some(Value::Flags(
                (vk::ShaderStageFlags::COMPUTE | vk::ShaderStageFlags::FRAGMENT).as_raw()
            ))
        );
    }

    #[test]
    fn const_flags_match_runtime_union() {
        const QUEUE: vk::QueueFlags = flags!(vk::QueueFlags: GRAPHICS | COMPUTE);
        assert_eq!(QUEUE, vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE);
    }
}
