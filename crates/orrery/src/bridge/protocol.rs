/// Wire protocol between the coordinator and the JS presentation layer.
/// Must stay in sync with the explorer's TypeScript `protocol.ts`.
///
/// Two directions:
/// ```text
/// JS → Rust: custom events (kind: u32, a, b, c: f32), decoded into `Intent`s
/// Rust → JS: a fixed snapshot frame of SNAPSHOT_FLOATS f32s, read in place
/// ```
///
/// Bodies and locations travel as catalog indices; the JSON snapshot carries
/// identifiers and names for panels that need them.

use bytemuck::{Pod, Zeroable};

use crate::api::types::{Cursor, DeviceClass};
use crate::catalog::registry::Catalog;
use crate::coordinator::state::PresentationSnapshot;
use crate::lifecycle::activation::ActivationPhase;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

// ── Intent kinds (JS → Rust) ─────────────────────────────────────────

/// a = body index.
pub const INTENT_SELECT_BODY: u32 = 1;
/// a = body index.
pub const INTENT_SELECT_FROM_MAP: u32 = 2;
/// a = body index, b = location index within the body.
pub const INTENT_SELECT_LOCATION: u32 = 3;
/// a = 0 orbit, 1 system.
pub const INTENT_SET_VIEW_MODE: u32 = 4;
/// a = zoom percentage.
pub const INTENT_SET_ZOOM: u32 = 5;
pub const INTENT_TOGGLE_INFO: u32 = 6;
pub const INTENT_TOGGLE_LIST: u32 = 7;
pub const INTENT_CLEAR_SELECTION: u32 = 8;
pub const INTENT_ACTIVATE: u32 = 9;
pub const INTENT_DEACTIVATE: u32 = 10;
/// Viewport resize: a = width, b = height, c = 1.0 if touch capable.
pub const INTENT_RESIZE: u32 = 99;

// ── Snapshot frame (Rust → JS) ───────────────────────────────────────

/// Floats per snapshot frame. Fixed by the wire format.
pub const SNAPSHOT_FLOATS: usize = 16;

/// Revision counter wraps at 2^24 so it stays exact in an f32.
const REVISION_WRAP: u64 = 1 << 24;

/// Flat snapshot for zero-copy reads. Enum fields are small integers,
/// booleans are 0.0/1.0, missing indices are -1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SnapshotFrame {
    pub version: f32,
    pub revision: f32,
    /// 0 orbit, 1 system.
    pub view_mode: f32,
    pub zoom: f32,
    /// 0 dormant, 1 transitioning, 2 activated.
    pub activation: f32,
    pub interactive: f32,
    pub prominence: f32,
    /// 0 desktop, 1 touch.
    pub device: f32,
    pub panel_info: f32,
    pub panel_list: f32,
    pub body_index: f32,
    /// Index of the selection within the active body's locations, or -1.
    pub selection_index: f32,
    /// 0 default, 1 pointer.
    pub cursor: f32,
    _pad: [f32; 3],
}

impl SnapshotFrame {
    pub fn from_snapshot(snapshot: &PresentationSnapshot, catalog: &Catalog) -> Self {
        let body = catalog.get(&snapshot.active_body);
        let body_index = catalog
            .index_of(&snapshot.active_body)
            .map_or(-1.0, |i| i as f32);
        let selection_index = match (&snapshot.selection, body) {
            (Some(selected), Some(body)) => body
                .locations
                .iter()
                .position(|l| l == selected)
                .map_or(-1.0, |i| i as f32),
            _ => -1.0,
        };

        Self {
            version: PROTOCOL_VERSION,
            revision: (snapshot.revision % REVISION_WRAP) as f32,
            view_mode: snapshot.view_mode.index() as f32,
            zoom: f32::from(snapshot.zoom.value()),
            activation: match snapshot.activation {
                ActivationPhase::Dormant => 0.0,
                ActivationPhase::Transitioning => 1.0,
                ActivationPhase::Activated => 2.0,
            },
            interactive: flag(snapshot.interactive),
            prominence: snapshot.prominence,
            device: match snapshot.device {
                DeviceClass::Desktop => 0.0,
                DeviceClass::Touch => 1.0,
            },
            panel_info: flag(snapshot.panels.info),
            panel_list: flag(snapshot.panels.list),
            body_index,
            selection_index,
            cursor: match snapshot.cursor {
                Cursor::Default => 0.0,
                Cursor::Pointer => 1.0,
            },
            _pad: [0.0; 3],
        }
    }

    /// The frame as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}
