//! Rendering-priority tiers for aspects.
//!
//! The base tier comes from the orb alone. Two identity overrides follow:
//! aspects touching the Sun, Moon or Ascendant are lifted out of the
//! midground, and aspects purely between Uranus, Neptune and Pluto are pushed
//! back since they are shared by a whole generation.

use crate::aspects::types::{AspectRecord, Layer, LayeredAspect};
use crate::chart::zodiac::{body_kind_of, BodyKind};
use crate::config::LayerThresholds;

/// Outer-planet aspects at or below this orb stay in the midground.
pub const OUTER_PLANET_MIDGROUND_ORB: f64 = 2.0;

/// Tier from orb only.
pub fn base_layer(orb: f64, thresholds: &LayerThresholds) -> Layer {
    let orb = orb.abs();
    if orb <= thresholds.highlight {
        Layer::Foreground
    } else if orb <= thresholds.midground {
        Layer::Midground
    } else {
        Layer::Background
    }
}

/// Tier for an aspect, including the luminary and outer-planet overrides.
pub fn classify(aspect: &AspectRecord, thresholds: &LayerThresholds) -> Layer {
    let orb = aspect.orb.abs();
    let base = base_layer(orb, thresholds);

    let kind_a = body_kind_of(&aspect.body_a);
    let kind_b = body_kind_of(&aspect.body_b);

    let luminary = [kind_a, kind_b]
        .into_iter()
        .any(|k| k.map_or(false, BodyKind::is_luminary));
    if luminary && base == Layer::Midground {
        return Layer::Foreground;
    }

    let outer_only = [kind_a, kind_b]
        .into_iter()
        .all(|k| k.map_or(false, BodyKind::is_outer_planet));
    if outer_only && base != Layer::Background {
        return if orb <= OUTER_PLANET_MIDGROUND_ORB {
            Layer::Midground
        } else {
            Layer::Background
        };
    }

    base
}

/// Classify a sequence, preserving order.
pub fn classify_all(aspects: &[AspectRecord], thresholds: &LayerThresholds) -> Vec<LayeredAspect> {
    aspects
        .iter()
        .map(|aspect| LayeredAspect {
            layer: classify(aspect, thresholds),
            aspect: aspect.clone(),
        })
        .collect()
}
