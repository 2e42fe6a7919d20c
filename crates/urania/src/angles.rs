//! Angle primitives shared by every chart component.
//!
//! All angles are ecliptic degrees. Nothing here allocates or fails.

use crate::chart::zodiac::Sign;

/// Wrap an angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest difference `a - b`, wrapped to `[-180, 180]`.
///
/// Exactly antisymmetric: `angle_diff(a, b) == -angle_diff(b, a)`. A precise
/// half-turn therefore reports -180 in one direction and +180 in the other.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let raw = a - b;
    // f64::round rounds halves away from zero, which keeps the result odd in raw
    raw - 360.0 * (raw / 360.0).round()
}

/// Shorter-arc separation between two longitudes, in `[0, 180]`.
pub fn separation(a: f64, b: f64) -> f64 {
    angle_diff(a, b).abs()
}

/// Absolute ecliptic longitude from sign, degree within sign and arc minutes.
pub fn longitude_of(sign: Sign, degree: f64, minute: f64) -> f64 {
    normalize_angle(sign.index() as f64 * 30.0 + degree + minute / 60.0)
}

/// Round to two decimal places (orb precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
