use serde::Deserialize;

use crate::api::error::CatalogError;
use crate::api::types::BodyId;
use crate::catalog::registry::Catalog;
use crate::extensions::easing::Easing;

/// Coordinator configuration, provided by the explorer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Shorter viewport side (CSS px) below which a device counts as touch-class (default: 768).
    pub small_screen_px: f32,
    /// Duration of the dormant → activated transition in seconds (default: 1.2).
    pub transition_secs: f32,
    /// Easing of the activation prominence during the transition.
    pub transition_easing: Easing,
    /// Zoom percentage at startup and after deactivation (default: 50).
    pub default_zoom: i32,
    /// Body shown at startup and used when an identifier cannot be resolved.
    pub default_body: BodyId,
    /// Bodies with surface detail. Selecting one from the system map drills into orbit view.
    pub detailed_bodies: Vec<BodyId>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            small_screen_px: 768.0,
            transition_secs: 1.2,
            transition_easing: Easing::CubicInOut,
            default_zoom: 50,
            default_body: BodyId::new("earth"),
            detailed_bodies: vec![
                BodyId::new("earth"),
                BodyId::new("moon"),
                BodyId::new("mars"),
            ],
        }
    }
}

impl ExplorerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether selecting this body from the system map switches to orbit view.
    pub fn is_detailed(&self, id: &BodyId) -> bool {
        self.detailed_bodies.contains(id)
    }
}

/// The contract every explorer app fulfills.
pub trait Explorer {
    /// Return coordinator configuration. Called once before the catalog is built.
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig::default()
    }

    /// Build the body catalog. Called once at init.
    fn catalog(&self) -> Result<Catalog, CatalogError>;
}
