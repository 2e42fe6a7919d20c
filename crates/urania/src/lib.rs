//! Chart geometry and aspect engine.
//!
//! Given body positions (sign, degree, minute) this crate filters bodies by
//! chart mode, detects aspects within one wheel or across two, merges them
//! with aspects supplied upstream, assigns each a rendering tier, and spreads
//! clustered labels so they do not collide. Everything is pure and
//! synchronous.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod payload;
pub mod pipeline;

pub use angles::{angle_diff, longitude_of, normalize_angle, separation};
pub use aspects::{AspectCalculator, AspectKind, AspectRecord, Layer, LayeredAspect};
pub use chart::{CelestialBody, OverlapResolver, OverlapSettings, Sign};
pub use config::{ChartMode, ChartModeConfig, ConfigError};
pub use payload::{Payload, RenderedPayload};
pub use pipeline::{ChartPipeline, RenderedChart, RenderedDualChart};
