use std::fmt;
use serde::{Deserialize, Serialize};

use crate::renderer::handle::RendererKind;

/// Stable identifier of a body in the catalog (e.g. `"mars"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Which view owns the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Globe renderer focused on one body's surface.
    #[default]
    Orbit,
    /// System map showing every body.
    System,
}

impl ViewMode {
    /// The renderer that is live in this mode. This is the only place
    /// a view mode is mapped to a renderer.
    pub fn renderer(self) -> RendererKind {
        match self {
            ViewMode::Orbit => RendererKind::Globe,
            ViewMode::System => RendererKind::Map,
        }
    }

    /// Wire index: 0 = orbit, 1 = system.
    pub fn index(self) -> u32 {
        match self {
            ViewMode::Orbit => 0,
            ViewMode::System => 1,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ViewMode::Orbit),
            1 => Some(ViewMode::System),
            _ => None,
        }
    }
}

/// Device class derived from viewport and input capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Pointer-driven, large viewport. Always interactive, no gating overlay.
    Desktop,
    /// Touch input or small screen. Gated behind activation, uses mobile panels.
    Touch,
}

impl DeviceClass {
    pub fn is_touch(self) -> bool {
        self == DeviceClass::Touch
    }
}

/// Visibility of the two mobile panels. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelVisibility {
    pub info: bool,
    pub list: bool,
}

impl PanelVisibility {
    /// Flip the info panel, closing the list.
    pub fn toggle_info(&mut self) {
        self.info = !self.info;
        self.list = false;
    }

    /// Flip the list panel, closing the info panel.
    pub fn toggle_list(&mut self) {
        self.list = !self.list;
        self.info = false;
    }

    pub fn close_all(&mut self) {
        self.info = false;
        self.list = false;
    }
}

/// Cursor affordance shown over the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    /// The active renderer reports something selectable under the pointer.
    Pointer,
}
