//! The contract each visual renderer exposes to the coordinator.
//!
//! Rendering itself happens outside this crate (WebGL globe, canvas
//! system map). The coordinator only pushes commands through
//! [`RendererHandle`] and consumes [`RendererEvent`]s; it never knows which
//! concrete renderer it is talking to beyond [`RendererKind`] routing.

use serde::Serialize;

use crate::api::types::BodyId;
use crate::catalog::registry::Location;
use crate::core::zoom::ZoomPercent;

/// The two renderers an explorer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Surface globe for a single body.
    Globe,
    /// Map of the whole system.
    Map,
}

impl RendererKind {
    /// Wire index: 0 = globe, 1 = map.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(RendererKind::Globe),
            1 => Some(RendererKind::Map),
            _ => None,
        }
    }
}

/// Where a smooth camera flight should end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum FlyTarget {
    Location(Location),
    Body(BodyId),
}

/// Renderer trait for globe and map backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlobeView {
///     camera: OrbitCamera,
/// }
///
/// impl RendererHandle for GlobeView {
///     fn set_zoom(&mut self, percent: ZoomPercent) {
///         self.camera.distance = zoom_map::globe_distance(percent);
///     }
///
///     fn fly_to(&mut self, target: &FlyTarget) {
///         // Start a camera tween toward the target...
///     }
/// }
/// ```
pub trait RendererHandle {
    /// Apply a zoom level chosen through the shared zoom control.
    fn set_zoom(&mut self, percent: ZoomPercent);

    /// Start a smooth camera transition. Fire-and-forget: no completion is reported.
    fn fly_to(&mut self, target: &FlyTarget);
}

/// Events a renderer emits back to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererEvent {
    /// Pointer entered (true) or left (false) something selectable.
    Hover(bool),
    /// A surface location was picked.
    SelectLocation(Location),
    /// A body was picked.
    SelectBody(BodyId),
    /// Zoom changed by a gesture the coordinator did not issue.
    ZoomChanged(i32),
}
