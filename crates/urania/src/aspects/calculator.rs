use crate::angles::{round2, separation};
use crate::aspects::types::{AspectKind, AspectRecord};
use crate::chart::body::CelestialBody;
use crate::config::AspectConfig;

/// Aspect calculator
///
/// Kinds are tried in [`AspectKind::ALL`] order and the first one within its
/// orb is reported, even when a later kind would fit tighter.
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Compute aspects between every unordered pair of one body set
    pub fn detect_aspects(
        &self,
        bodies: &[CelestialBody],
        config: &AspectConfig,
    ) -> Vec<AspectRecord> {
        // Early exit if not enough bodies
        if bodies.len() < 2 {
            return Vec::new();
        }

        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if let Some(aspect) = self.aspect_between(&bodies[i], &bodies[j], config) {
                    aspects.push(aspect);
                }
            }
        }

        log::trace!(
            "Detected {} aspects among {} bodies",
            aspects.len(),
            bodies.len()
        );
        aspects
    }

    /// Compute aspects between two body sets, one body from each side
    pub fn detect_cross_aspects(
        &self,
        set_a: &[CelestialBody],
        set_b: &[CelestialBody],
        config: &AspectConfig,
    ) -> Vec<AspectRecord> {
        if set_a.is_empty() || set_b.is_empty() {
            return Vec::new();
        }

        let mut aspects = Vec::new();
        for a in set_a {
            for b in set_b {
                if let Some(aspect) = self.aspect_between(a, b, config) {
                    aspects.push(aspect);
                }
            }
        }

        log::trace!(
            "Detected {} cross aspects between {} and {} bodies",
            aspects.len(),
            set_a.len(),
            set_b.len()
        );
        aspects
    }

    /// Match two longitudes against the enabled aspect kinds.
    ///
    /// Returns the first kind in priority order whose orb covers the
    /// separation, with the deviation rounded to two decimals.
    pub fn calculate_aspect(
        &self,
        lon1: f64,
        lon2: f64,
        config: &AspectConfig,
    ) -> Option<(AspectKind, f64)> {
        let angle = separation(lon1, lon2);

        config.enabled().find_map(|(kind, orb)| {
            let deviation = (angle - kind.exact_angle()).abs();
            (deviation <= orb).then(|| (kind, round2(deviation)))
        })
    }

    fn aspect_between(
        &self,
        a: &CelestialBody,
        b: &CelestialBody,
        config: &AspectConfig,
    ) -> Option<AspectRecord> {
        self.calculate_aspect(a.absolute_angle(), b.absolute_angle(), config)
            .map(|(kind, orb)| AspectRecord::new(a.id(), b.id(), kind, orb))
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aspects within one body set, using a default calculator.
pub fn detect_aspects(bodies: &[CelestialBody], config: &AspectConfig) -> Vec<AspectRecord> {
    AspectCalculator::new().detect_aspects(bodies, config)
}

/// Aspects across two body sets, using a default calculator.
pub fn detect_cross_aspects(
    set_a: &[CelestialBody],
    set_b: &[CelestialBody],
    config: &AspectConfig,
) -> Vec<AspectRecord> {
    AspectCalculator::new().detect_cross_aspects(set_a, set_b, config)
}
