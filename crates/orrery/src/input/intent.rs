use crate::api::types::{BodyId, ViewMode};
use crate::bridge::protocol::{
    INTENT_ACTIVATE, INTENT_CLEAR_SELECTION, INTENT_DEACTIVATE, INTENT_RESIZE,
    INTENT_SELECT_BODY, INTENT_SELECT_FROM_MAP, INTENT_SELECT_LOCATION, INTENT_SET_VIEW_MODE,
    INTENT_SET_ZOOM, INTENT_TOGGLE_INFO, INTENT_TOGGLE_LIST,
};
use crate::catalog::registry::{Catalog, Location};
use crate::device::classifier::DeviceSignals;

/// Everything the UI surface or platform can ask of the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectBody(BodyId),
    SelectFromMap(BodyId),
    SelectLocation(Location),
    SetViewMode(ViewMode),
    SetZoom(i32),
    ToggleMobileInfo,
    ToggleMobileList,
    ClearSelection,
    Activate,
    Deactivate,
    /// Viewport resize or change in reported touch capability.
    Resize(DeviceSignals),
}

impl Intent {
    /// Decode a numeric custom event from the UI layer.
    /// Bodies and locations travel as catalog indices; see `bridge::protocol`.
    /// Returns None for unknown kinds or indices outside the catalog.
    pub fn from_custom(kind: u32, a: f32, b: f32, c: f32, catalog: &Catalog) -> Option<Self> {
        let intent = match kind {
            INTENT_SELECT_BODY => Intent::SelectBody(body_at(catalog, a)?),
            INTENT_SELECT_FROM_MAP => Intent::SelectFromMap(body_at(catalog, a)?),
            INTENT_SELECT_LOCATION => {
                let body = catalog.by_index(index(a)?)?;
                Intent::SelectLocation(body.location(index(b)?)?.clone())
            }
            INTENT_SET_VIEW_MODE => {
                let mode = u32::try_from(index(a)?).ok()?;
                Intent::SetViewMode(ViewMode::from_index(mode)?)
            }
            INTENT_SET_ZOOM => Intent::SetZoom(a.round() as i32),
            INTENT_TOGGLE_INFO => Intent::ToggleMobileInfo,
            INTENT_TOGGLE_LIST => Intent::ToggleMobileList,
            INTENT_CLEAR_SELECTION => Intent::ClearSelection,
            INTENT_ACTIVATE => Intent::Activate,
            INTENT_DEACTIVATE => Intent::Deactivate,
            INTENT_RESIZE => Intent::Resize(DeviceSignals::new(a, b, c > 0.5)),
            _ => {
                log::warn!("unknown intent kind {}", kind);
                return None;
            }
        };
        Some(intent)
    }
}

fn index(value: f32) -> Option<usize> {
    if value.is_finite() && value >= 0.0 {
        Some(value as usize)
    } else {
        None
    }
}

fn body_at(catalog: &Catalog, value: f32) -> Option<BodyId> {
    let id = catalog.by_index(index(value)?).map(|body| body.id.clone());
    if id.is_none() {
        log::warn!("intent references body index {} outside the catalog", value);
    }
    id
}
