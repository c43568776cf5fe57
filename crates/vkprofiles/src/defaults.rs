//! Profile default values.
//!
//! The same materialization backs device creation, where defaults fill the
//! structures a caller left out, and support checks, where the declared
//! structure set decides what to query from the device.

use crate::chain::ChainNode;
use crate::field::Field;
use crate::profile::{find_profile, ProfileDesc, ProfileProperties};
use crate::structures::{FeatureChain, FeatureStruct, PropertyChain, PropertyStruct};
use std::iter;

/// Zeroed feature nodes for every structure `desc` declares, base first.
pub(crate) fn feature_nodes(desc: &ProfileDesc) -> FeatureChain {
    iter::once(FeatureStruct::base())
        .chain(desc.feature_fields().map(Field::new_node))
        .collect()
}

/// Zeroed property nodes for every structure `desc` declares, base first.
pub(crate) fn property_nodes(desc: &ProfileDesc) -> PropertyChain {
    iter::once(PropertyStruct::base())
        .chain(desc.property_fields().map(Field::new_node))
        .collect()
}

pub(crate) fn fill_features(desc: &ProfileDesc, chain: &mut FeatureChain) {
    chain.for_each_mut(|node| desc.fill_feature(node));
}

pub(crate) fn fill_properties(desc: &ProfileDesc, chain: &mut PropertyChain) {
    chain.for_each_mut(|node| desc.fill_property(node));
}

/// Write the profile's declared feature values into `chain`.
///
/// Only nodes already in the chain are touched and only the fields the
/// profile declares are written. Node types the profile says nothing about
/// are skipped. An unknown profile leaves the chain as it is.
pub fn get_profile_features(profile: &ProfileProperties<'_>, chain: &mut FeatureChain) {
    if let Some(desc) = find_profile(profile.name) {
        fill_features(desc, chain);
    }
}

/// Write the profile's declared property and limit values into `chain`.
///
/// Same rules as [`get_profile_features`].
pub fn get_profile_properties(profile: &ProfileProperties<'_>, chain: &mut PropertyChain) {
    if let Some(desc) = find_profile(profile.name) {
        fill_properties(desc, chain);
    }
}

/// A feature chain with one zeroed node per structure the profile declares.
///
/// Pass it to [`get_profile_features`] for the profile's defaults, or to a
/// device query for the device's values. Empty for an unknown profile.
pub fn profile_feature_chain(name: &str) -> FeatureChain {
    find_profile(name).map_or_else(FeatureChain::new, feature_nodes)
}

/// A property chain with one zeroed node per structure the profile declares.
pub fn profile_property_chain(name: &str) -> PropertyChain {
    find_profile(name).map_or_else(PropertyChain::new, property_nodes)
}
