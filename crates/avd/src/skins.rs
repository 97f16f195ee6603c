//! Skin aggregation.
//!
//! Skins come from two places: the target's own `skins/` directory
//! and each system image's location. An empty result is a valid state
//! and renders as no skin at all.

use avdkit_sdk::{SkinSet, TagAbiVariant, Target};

/// Skins available anywhere on the target: target-level plus every
/// variant. Used by the target listing.
pub fn target_skins(target: &Target) -> SkinSet {
    SkinSet::collect(
        target
            .skins
            .iter()
            .chain(target.variants.iter().flat_map(|v| v.skins.iter())),
    )
}

/// Skins available to one resolved variant: target-level plus the
/// variant's own. The set's default is the skin a new device gets.
pub fn variant_skins(target: &Target, variant: &TagAbiVariant) -> SkinSet {
    SkinSet::collect(target.skins.iter().chain(variant.skins.iter()))
}
