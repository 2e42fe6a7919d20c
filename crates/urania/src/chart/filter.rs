use crate::aspects::types::AspectRecord;
use crate::chart::body::CelestialBody;
use crate::chart::zodiac::BodyKind;
use crate::config::{AspectConfig, ChartModeConfig};

/// Options for [`filter_bodies`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Keep Descendant and IC. They are hidden on the wheel but still take
    /// part in aspect detection.
    pub include_all_angles: bool,
}

/// Whether a mode keeps a body of the given kind.
pub fn is_body_visible(kind: BodyKind, mode: &ChartModeConfig, options: FilterOptions) -> bool {
    let Some(category) = kind.category() else {
        return false;
    };
    if !mode.bodies.shows(category) {
        return false;
    }
    !kind.is_secondary_angle() || options.include_all_angles
}

/// Keep the bodies a mode displays; unrecognised bodies are dropped.
pub fn filter_bodies(
    bodies: &[CelestialBody],
    mode: &ChartModeConfig,
    options: FilterOptions,
) -> Vec<CelestialBody> {
    bodies
        .iter()
        .filter(|body| match body.kind() {
            Some(kind) => is_body_visible(kind, mode, options),
            None => {
                log::trace!("Dropping unrecognised body {}", body.id());
                false
            }
        })
        .cloned()
        .collect()
}

/// Keep aspects whose kind is enabled and whose orb is within tolerance.
pub fn filter_aspects(aspects: &[AspectRecord], config: &AspectConfig) -> Vec<AspectRecord> {
    aspects
        .iter()
        .filter(|aspect| {
            let cfg = config.get(aspect.kind);
            cfg.enabled && aspect.orb.abs() <= cfg.orb
        })
        .cloned()
        .collect()
}
