//! Label de-overlap for bodies on a circular chart.
//!
//! Bodies whose true longitudes cluster too closely get their `visual_angle`
//! spread apart so their glyphs do not collide. `absolute_angle` is never
//! touched, and no visual angle drifts further than
//! `MAX_OFFSET_FACTOR * min_spacing` from it.
//!
//! The resolver works on a private copy sorted by visual angle and writes
//! results back by input position, so callers get their own ordering back.

use std::cmp::Ordering;

use crate::angles::{angle_diff, normalize_angle};
use crate::chart::body::CelestialBody;

/// Relaxation passes before giving up on a dense cluster
pub const MAX_PASSES: usize = 30;

/// Allowed drift from the true angle, as a multiple of `min_spacing`
pub const MAX_OFFSET_FACTOR: f64 = 1.5;

/// Extra separation added to each push so pairs do not settle right at the limit
const PUSH_OVERSHOOT: f64 = 0.3;

/// Largest single push per body per pass, in degrees
const MAX_PUSH: f64 = 2.0;

/// Tolerance on the offset bound check
const OFFSET_EPSILON: f64 = 1e-9;

/// Settings for [`OverlapResolver`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapSettings {
    /// Minimum visual gap between neighbouring bodies, in degrees
    pub min_spacing: f64,
    /// Treat bodies at exactly the same visual angle as overlapping.
    /// When false they are left stacked.
    pub spread_coincident: bool,
}

impl Default for OverlapSettings {
    fn default() -> Self {
        Self {
            min_spacing: 8.0,
            spread_coincident: true,
        }
    }
}

impl OverlapSettings {
    pub fn with_min_spacing(min_spacing: f64) -> Self {
        Self {
            min_spacing,
            ..Self::default()
        }
    }

    pub fn max_offset(&self) -> f64 {
        MAX_OFFSET_FACTOR * self.min_spacing
    }
}

/// Result of one resolver run
#[derive(Debug, Clone)]
pub struct OverlapOutcome {
    /// Bodies in the caller's order with adjusted visual angles
    pub bodies: Vec<CelestialBody>,
    /// Passes executed
    pub passes: usize,
    /// No adjacent pair is left closer than `min_spacing`
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    index: usize,
    absolute: f64,
    visual: f64,
    moved: bool,
}

pub struct OverlapResolver {
    settings: OverlapSettings,
}

impl OverlapResolver {
    pub fn new(settings: OverlapSettings) -> Self {
        Self { settings }
    }

    /// Spread visual angles of clustered bodies.
    ///
    /// Always returns within [`MAX_PASSES`]; dense clusters may come back
    /// still overlapping with `converged == false`.
    pub fn resolve(&self, bodies: &[CelestialBody]) -> OverlapOutcome {
        let min_spacing = self.settings.min_spacing;
        if bodies.len() < 2 || !min_spacing.is_finite() || min_spacing <= 0.0 {
            return OverlapOutcome {
                bodies: bodies.to_vec(),
                passes: 0,
                converged: true,
            };
        }

        let max_offset = self.settings.max_offset();
        let mut slots: Vec<Slot> = bodies
            .iter()
            .enumerate()
            .map(|(index, body)| Slot {
                index,
                absolute: body.absolute_angle(),
                visual: normalize_angle(body.visual_angle()),
                moved: false,
            })
            .collect();
        sort_slots(&mut slots);

        let mut passes = 0;
        let mut converged = false;
        while passes < MAX_PASSES {
            passes += 1;
            let mut violated = false;
            let n = slots.len();

            for i in 0..n {
                let j = (i + 1) % n;
                // Wrap pair (last -> first) goes through 360
                let gap = normalize_angle(slots[j].visual - slots[i].visual);
                if !self.is_violation(gap) {
                    continue;
                }
                violated = true;

                let push = ((min_spacing - gap) / 2.0 + PUSH_OVERSHOOT).min(MAX_PUSH);
                nudge(&mut slots[i], -push, max_offset);
                nudge(&mut slots[j], push, max_offset);
            }

            if !violated {
                converged = true;
                break;
            }
            sort_slots(&mut slots);
        }

        if !converged {
            converged = !self.has_violation(&slots);
        }
        if converged {
            log::debug!(
                "Overlap resolution for {} bodies settled after {} passes",
                bodies.len(),
                passes
            );
        } else {
            log::debug!(
                "Overlap resolution for {} bodies stopped after {} passes with overlaps left",
                bodies.len(),
                passes
            );
        }

        let mut resolved = bodies.to_vec();
        for slot in slots.iter().filter(|s| s.moved) {
            resolved[slot.index].set_visual_angle(slot.visual);
        }

        OverlapOutcome {
            bodies: resolved,
            passes,
            converged,
        }
    }

    fn is_violation(&self, gap: f64) -> bool {
        if gap >= self.settings.min_spacing {
            return false;
        }
        gap > 0.0 || (self.settings.spread_coincident && gap == 0.0)
    }

    fn has_violation(&self, slots: &[Slot]) -> bool {
        let n = slots.len();
        let mut ordered = slots.to_vec();
        sort_slots(&mut ordered);
        (0..n).any(|i| {
            let gap = normalize_angle(ordered[(i + 1) % n].visual - ordered[i].visual);
            self.is_violation(gap)
        })
    }
}

impl Default for OverlapResolver {
    fn default() -> Self {
        Self::new(OverlapSettings::default())
    }
}

/// Resolve overlaps with the default settings and the given spacing.
pub fn resolve_overlaps(bodies: &[CelestialBody], min_spacing: f64) -> Vec<CelestialBody> {
    OverlapResolver::new(OverlapSettings::with_min_spacing(min_spacing))
        .resolve(bodies)
        .bodies
}

/// Move a slot unless that takes it beyond `max_offset` from its true angle.
fn nudge(slot: &mut Slot, delta: f64, max_offset: f64) {
    let candidate = normalize_angle(slot.visual + delta);
    if angle_diff(candidate, slot.absolute).abs() <= max_offset + OFFSET_EPSILON {
        slot.visual = candidate;
        slot.moved = true;
    }
}

fn sort_slots(slots: &mut [Slot]) {
    // Stable: coincident bodies keep input order
    slots.sort_by(|a, b| a.visual.partial_cmp(&b.visual).unwrap_or(Ordering::Equal));
}
