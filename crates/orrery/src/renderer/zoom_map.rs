//! Mapping between the unified zoom percentage and each renderer's own camera units.
//!
//! The globe zooms by moving the camera toward the body (distance in body
//! radii, linear). The system map zooms by scaling the whole plane
//! (multiplicative, so the percentage maps logarithmically).

use crate::core::zoom::ZoomPercent;

/// Globe camera distance at 100% zoom, in body radii.
pub const GLOBE_DISTANCE_NEAR: f32 = 1.25;
/// Globe camera distance at 0% zoom, in body radii.
pub const GLOBE_DISTANCE_FAR: f32 = 6.0;

/// Map scale at 0% zoom.
pub const MAP_SCALE_MIN: f64 = 0.15;
/// Map scale at 100% zoom.
pub const MAP_SCALE_MAX: f64 = 8.0;

/// Camera distance for a zoom percentage.
pub fn globe_distance(percent: ZoomPercent) -> f32 {
    GLOBE_DISTANCE_FAR - (GLOBE_DISTANCE_FAR - GLOBE_DISTANCE_NEAR) * percent.as_fraction()
}

/// Zoom percentage for a camera distance (clamped to the near/far range).
pub fn globe_percent(distance: f32) -> ZoomPercent {
    let t = (GLOBE_DISTANCE_FAR - distance) / (GLOBE_DISTANCE_FAR - GLOBE_DISTANCE_NEAR);
    ZoomPercent::from_f32(t * 100.0)
}

/// Map scale factor for a zoom percentage.
pub fn map_scale(percent: ZoomPercent) -> f64 {
    let (lo, hi) = (MAP_SCALE_MIN.ln(), MAP_SCALE_MAX.ln());
    (lo + (hi - lo) * f64::from(percent.as_fraction())).exp()
}

/// Zoom percentage for a map scale factor (clamped to the scale range).
pub fn map_percent(scale: f64) -> ZoomPercent {
    let scale = scale.clamp(MAP_SCALE_MIN, MAP_SCALE_MAX);
    let (lo, hi) = (MAP_SCALE_MIN.ln(), MAP_SCALE_MAX.ln());
    ZoomPercent::from_f32(((scale.ln() - lo) / (hi - lo) * 100.0) as f32)
}
