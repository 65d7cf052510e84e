use serde::Serialize;

use crate::api::types::{BodyId, Cursor, DeviceClass, PanelVisibility, ViewMode};
use crate::catalog::registry::Location;
use crate::core::zoom::ZoomPercent;
use crate::lifecycle::activation::ActivationPhase;

/// Interaction state owned and mutated only by the coordinator.
/// Activation and device class live in their own components.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// Always resolvable in the catalog.
    pub active_body: BodyId,
    /// None, or a location of `active_body`.
    pub selection: Option<Location>,
    pub view_mode: ViewMode,
    /// Mirrors the active renderer's zoom.
    pub zoom: ZoomPercent,
    /// At most one panel open.
    pub panels: PanelVisibility,
    /// Active renderer reports something selectable under the pointer.
    pub hovering: bool,
}

impl InteractionState {
    pub fn new(active_body: BodyId, zoom: ZoomPercent) -> Self {
        Self {
            active_body,
            selection: None,
            view_mode: ViewMode::Orbit,
            zoom,
            panels: PanelVisibility::default(),
            hovering: false,
        }
    }
}

/// Read-only view of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationSnapshot {
    /// Bumped on every change; re-render when it differs from the last one seen.
    pub revision: u64,
    pub active_body: BodyId,
    pub active_body_name: String,
    pub view_mode: ViewMode,
    pub zoom: ZoomPercent,
    pub selection: Option<Location>,
    pub activation: ActivationPhase,
    /// Renderers accept pointer input.
    pub interactive: bool,
    /// Visual prominence of the explorer, dormant preview through activated.
    pub prominence: f32,
    pub device: DeviceClass,
    pub is_mobile: bool,
    pub panels: PanelVisibility,
    pub cursor: Cursor,
}
