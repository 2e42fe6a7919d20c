//! One render pass: filter, detect, merge, classify, de-overlap.

use serde::Serialize;

use crate::aspects::{classify_all, merge_aspects, AspectCalculator, AspectRecord, LayeredAspect};
use crate::chart::{
    filter_aspects, filter_bodies, CelestialBody, FilterOptions, OverlapResolver,
    OverlapSettings, WheelMarker,
};
use crate::config::{ChartMode, ChartModeConfig};

/// Output of a single-wheel render
#[derive(Debug, Clone, Serialize)]
pub struct RenderedChart {
    pub bodies: Vec<CelestialBody>,
    pub aspects: Vec<LayeredAspect>,
}

/// Output of a dual-wheel render; `aspects` run between the two wheels
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDualChart {
    pub inner: Vec<CelestialBody>,
    pub outer: Vec<CelestialBody>,
    pub aspects: Vec<LayeredAspect>,
}

pub struct ChartPipeline {
    mode: ChartModeConfig,
    calculator: AspectCalculator,
    resolver: OverlapResolver,
}

impl ChartPipeline {
    pub fn new(mode: ChartModeConfig) -> Self {
        Self {
            mode,
            calculator: AspectCalculator::new(),
            resolver: OverlapResolver::default(),
        }
    }

    pub fn for_mode(mode: ChartMode) -> Self {
        Self::new(ChartModeConfig::for_mode(mode))
    }

    pub fn with_overlap(mut self, settings: OverlapSettings) -> Self {
        self.resolver = OverlapResolver::new(settings);
        self
    }

    pub fn mode(&self) -> &ChartModeConfig {
        &self.mode
    }

    /// Render one position set.
    ///
    /// Descendant and IC are left off the wheel but still take part in
    /// aspect detection when the mode shows angles.
    pub fn render_single(&self, bodies: &[CelestialBody]) -> RenderedChart {
        let shown = filter_bodies(bodies, &self.mode, FilterOptions::default());
        let aspect_bodies = filter_bodies(
            bodies,
            &self.mode,
            FilterOptions {
                include_all_angles: true,
            },
        );

        let aspects = self
            .calculator
            .detect_aspects(&aspect_bodies, &self.mode.aspects);
        let layered = classify_all(&aspects, &self.mode.layers);

        let outcome = self.resolver.resolve(&shown);
        log::debug!(
            "Rendered single wheel: {} of {} bodies shown, {} aspects",
            outcome.bodies.len(),
            bodies.len(),
            layered.len()
        );

        RenderedChart {
            bodies: outcome.bodies,
            aspects: layered,
        }
    }

    /// Render two position sets on concentric wheels.
    ///
    /// Outer-wheel identifiers get `marker` so they never collide with the
    /// same body on the inner wheel. `upstream` aspects outside the mode's
    /// enabled kinds and orbs are dropped first; the rest are authoritative
    /// and locally detected cross aspects only fill the keys they lack.
    pub fn render_dual(
        &self,
        inner: &[CelestialBody],
        outer: &[CelestialBody],
        marker: WheelMarker,
        upstream: &[AspectRecord],
    ) -> RenderedDualChart {
        let outer: Vec<CelestialBody> = outer.iter().map(|b| b.marked(marker)).collect();
        let all_angles = FilterOptions {
            include_all_angles: true,
        };

        let inner_aspect_bodies = filter_bodies(inner, &self.mode, all_angles);
        let outer_aspect_bodies = filter_bodies(&outer, &self.mode, all_angles);
        let local = self.calculator.detect_cross_aspects(
            &inner_aspect_bodies,
            &outer_aspect_bodies,
            &self.mode.aspects,
        );

        // Out-of-orb upstream records must not shadow a local match
        let upstream_kept = filter_aspects(upstream, &self.mode.aspects);
        let merged = merge_aspects(&upstream_kept, &local);
        let layered = classify_all(&merged, &self.mode.layers);

        let inner_shown = filter_bodies(inner, &self.mode, FilterOptions::default());
        let outer_shown = filter_bodies(&outer, &self.mode, FilterOptions::default());
        let inner_resolved = self.resolver.resolve(&inner_shown).bodies;
        let outer_resolved = self.resolver.resolve(&outer_shown).bodies;

        log::debug!(
            "Rendered dual wheel: {} upstream + {} local cross aspects, {} kept",
            upstream.len(),
            local.len(),
            layered.len()
        );

        RenderedDualChart {
            inner: inner_resolved,
            outer: outer_resolved,
            aspects: layered,
        }
    }
}
