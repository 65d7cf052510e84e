//! Device classification from viewport and input-capability signals.

use crate::api::types::DeviceClass;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Everything the platform reports that bears on device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSignals {
    pub viewport: Viewport,
    /// The platform reports any touch input capability.
    pub touch_capable: bool,
}

impl DeviceSignals {
    pub fn new(width: f32, height: f32, touch_capable: bool) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            touch_capable,
        }
    }
}

/// Touch if the viewport's shorter side is below `small_screen_px` or the
/// platform reports touch input; desktop otherwise.
pub fn classify(signals: &DeviceSignals, small_screen_px: f32) -> DeviceClass {
    if signals.touch_capable || signals.viewport.shorter_side() < small_screen_px {
        DeviceClass::Touch
    } else {
        DeviceClass::Desktop
    }
}

/// Tracks the current device class across viewport resizes.
pub struct DeviceClassifier {
    small_screen_px: f32,
    signals: DeviceSignals,
    class: DeviceClass,
}

impl DeviceClassifier {
    pub fn new(small_screen_px: f32, signals: DeviceSignals) -> Self {
        Self {
            small_screen_px,
            signals,
            class: classify(&signals, small_screen_px),
        }
    }

    /// Current device class.
    pub fn classify(&self) -> DeviceClass {
        self.class
    }

    /// Last signals seen.
    pub fn signals(&self) -> DeviceSignals {
        self.signals
    }

    /// Re-evaluate after a resize. Returns the new class only when it changed,
    /// so repeated resize events within one class produce no writes.
    pub fn on_resize(&mut self, signals: DeviceSignals) -> Option<DeviceClass> {
        self.signals = signals;
        let class = classify(&signals, self.small_screen_px);
        if class == self.class {
            return None;
        }
        log::debug!("device reclassified: {:?} -> {:?}", self.class, class);
        self.class = class;
        Some(class)
    }
}
