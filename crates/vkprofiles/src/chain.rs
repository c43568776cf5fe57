//! Structure chains.
//!
//! Vulkan links capability structures through raw `p_next` pointers. Here a
//! chain is an owned, ordered sequence of nodes; the position in the sequence
//! is the link. Raw pointers are only written while a chain is handed to the
//! driver (see [`StructureChain::link`]) and are cleared again afterwards, so
//! stored nodes never point at each other.

use ash::vk;
use std::ffi::c_void;
use std::fmt;
use std::ptr;

/// A node type that can live in a [`StructureChain`].
///
/// Implemented by the closed structure families in [`crate::structures`].
pub trait ChainNode: Copy + fmt::Debug {
    /// The structure type tag of this node.
    fn s_type(&self) -> vk::StructureType;

    /// A zeroed node of the type anchoring a chain of this family.
    fn base() -> Self;

    /// The node's `p_next` slot.
    fn next_slot(&mut self) -> &mut *mut c_void;

    /// Pointer to the underlying Vulkan structure.
    fn as_raw_mut(&mut self) -> *mut c_void;

    /// Whether this node is the family's anchor type.
    fn is_base(&self) -> bool {
        self.s_type() == Self::base().s_type()
    }
}

/// An ordered chain of tagged capability structures.
///
/// Structure types are unique within a chain: [`push`](Self::push) refuses a
/// node whose type is already present.
#[derive(Clone)]
pub struct StructureChain<T> {
    nodes: Vec<T>,
}

impl<T> Default for StructureChain<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: ChainNode> fmt::Debug for StructureChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.nodes).finish()
    }
}

impl<T: ChainNode> StructureChain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain holding only a zeroed base node.
    pub fn with_base() -> Self {
        Self {
            nodes: vec![T::base()],
        }
    }

    /// Append a node, builder style. Duplicate types are dropped.
    #[must_use]
    pub fn with(mut self, node: T) -> Self {
        self.push(node);
        self
    }

    /// Append a node at the end of the chain.
    ///
    /// Returns `false` and leaves the chain untouched if a node of the same
    /// structure type is already present.
    pub fn push(&mut self, node: T) -> bool {
        if self.contains(node.s_type()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Make sure the chain starts with the family's base node.
    ///
    /// A base node found further down the chain is moved to the front; if
    /// there is none, a zeroed one is inserted.
    pub fn ensure_base(&mut self) {
        match self.nodes.iter().position(ChainNode::is_base) {
            Some(0) => {}
            Some(index) => {
                let base = self.nodes.remove(index);
                self.nodes.insert(0, base);
            }
            None => self.nodes.insert(0, T::base()),
        }
    }

    /// First node of the given type.
    pub fn find(&self, s_type: vk::StructureType) -> Option<&T> {
        self.nodes.iter().find(|node| node.s_type() == s_type)
    }

    /// First node of the given type, mutably.
    pub fn find_mut(&mut self, s_type: vk::StructureType) -> Option<&mut T> {
        self.nodes.iter_mut().find(|node| node.s_type() == s_type)
    }

    /// Whether a node of the given type is present.
    pub fn contains(&self, s_type: vk::StructureType) -> bool {
        self.find(s_type).is_some()
    }

    /// Visit every node front to back.
    pub fn for_each(&self, visitor: impl FnMut(&T)) {
        self.nodes.iter().for_each(visitor);
    }

    /// Visit every node front to back, with write access to field values.
    pub fn for_each_mut(&mut self, visitor: impl FnMut(&mut T)) {
        self.nodes.iter_mut().for_each(visitor);
    }

    /// Iterate over the nodes.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter()
    }

    /// Structure types in chain order.
    pub fn s_types(&self) -> Vec<vk::StructureType> {
        self.nodes.iter().map(ChainNode::s_type).collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Write `p_next` links between consecutive nodes for the lifetime of
    /// the returned guard.
    ///
    /// The guard clears every link when dropped.
    pub(crate) fn link(&mut self) -> LinkedChain<'_, T> {
        let next: Vec<*mut c_void> = self
            .nodes
            .iter_mut()
            .skip(1)
            .map(ChainNode::as_raw_mut)
            .chain(std::iter::once(ptr::null_mut()))
            .collect();

        for (node, next) in self.nodes.iter_mut().zip(next) {
            *node.next_slot() = next;
        }

        LinkedChain { chain: self }
    }
}

impl<T: ChainNode> FromIterator<T> for StructureChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        for node in iter {
            chain.push(node);
        }
        chain
    }
}

/// A chain whose nodes are linked through `p_next`.
pub(crate) struct LinkedChain<'a, T: ChainNode> {
    chain: &'a mut StructureChain<T>,
}

impl<T: ChainNode> LinkedChain<'_, T> {
    /// The head node, which the rest of the chain hangs off.
    pub(crate) fn head_mut(&mut self) -> Option<&mut T> {
        self.chain.nodes.first_mut()
    }
}

impl<T: ChainNode> Drop for LinkedChain<'_, T> {
    fn drop(&mut self) {
        for node in &mut self.chain.nodes {
            *node.next_slot() = ptr::null_mut();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::FeatureStruct;

    fn vulkan12() -> FeatureStruct {
        FeatureStruct::Vulkan12(vk::PhysicalDeviceVulkan12Features::default())
    }

    #[test]
    fn push_rejects_duplicate_types() {
        let mut chain = StructureChain::with_base();
        assert!(chain.push(vulkan12()));
        assert!(!chain.push(vulkan12()));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn find_returns_first_match() {
        let chain = StructureChain::new().with(vulkan12());
        assert!(chain
            .find(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES)
            .is_some());
        assert!(chain
            .find(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES)
            .is_none());
    }

    #[test]
    fn ensure_base_moves_base_to_front() {
        let mut chain = StructureChain::new()
            .with(vulkan12())
            .with(FeatureStruct::base());
        chain.ensure_base();
        assert!(chain.iter().next().is_some_and(ChainNode::is_base));
        assert_eq!(chain.len(), 2);

        let mut empty = StructureChain::<FeatureStruct>::new();
        empty.ensure_base();
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn links_are_cleared_after_use() {
        let mut chain = StructureChain::with_base().with(vulkan12());
        {
            let mut linked = chain.link();
            let head = linked.head_mut().unwrap();
            assert!(!head.next_slot().is_null());
        }
        chain.for_each_mut(|node| assert!(node.next_slot().is_null()));
    }

    #[test]
    fn for_each_visits_in_order() {
        let chain = StructureChain::with_base().with(vulkan12());
        let mut seen = Vec::new();
        chain.for_each(|node| seen.push(node.s_type()));
        assert_eq!(seen, chain.s_types());
        assert_eq!(seen[0], vk::StructureType::PHYSICAL_DEVICE_FEATURES_2);
    }
}
