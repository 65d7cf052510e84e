use serde::Serialize;

/// Lowest unified zoom percentage.
pub const MIN_ZOOM_PERCENT: i32 = 0;
/// Highest unified zoom percentage.
pub const MAX_ZOOM_PERCENT: i32 = 100;

/// Renderer-agnostic zoom percentage, guaranteed to be within 0–100.
///
/// Each renderer maps this onto its own camera units; see
/// [`crate::renderer::zoom_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ZoomPercent(u8);

impl ZoomPercent {
    /// Create a zoom percentage, clamping to the valid range.
    #[must_use]
    pub fn new(percent: i32) -> Self {
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT) as u8)
    }

    /// Create from a fractional value (e.g. a renderer's continuous zoom),
    /// rounding to the nearest whole percent.
    #[must_use]
    pub fn from_f32(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(0);
        }
        Self::new(percent.round().clamp(i32::MIN as f32, i32::MAX as f32) as i32)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Position within the range as 0.0–1.0.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / MAX_ZOOM_PERCENT as f32
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ZoomPercent::new(150).value(), 100);
        assert_eq!(ZoomPercent::new(-10).value(), 0);
        assert_eq!(ZoomPercent::new(42).value(), 42);
    }

    #[test]
    fn from_f32_rounds_and_survives_garbage() {
        assert_eq!(ZoomPercent::from_f32(41.6).value(), 42);
        assert_eq!(ZoomPercent::from_f32(f32::INFINITY).value(), 100);
        assert_eq!(ZoomPercent::from_f32(f32::NAN).value(), 0);
    }

    #[test]
    fn fraction_spans_unit_range() {
        assert_eq!(ZoomPercent::new(0).as_fraction(), 0.0);
        assert_eq!(ZoomPercent::new(100).as_fraction(), 1.0);
    }
}
