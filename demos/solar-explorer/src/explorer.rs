use orrery::{BodyId, Catalog, CatalogError, Explorer, ExplorerConfig};

use crate::bodies;

/// Solar system explorer: surface globe for Earth, Moon and Mars plus a
/// system map for everything else.
pub struct SolarExplorer;

impl SolarExplorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolarExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Explorer for SolarExplorer {
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            transition_secs: 0.9,
            default_zoom: 40,
            default_body: BodyId::new("earth"),
            detailed_bodies: bodies::DETAILED.iter().map(|&id| BodyId::new(id)).collect(),
            ..ExplorerConfig::default()
        }
    }

    fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_manifest(&bodies::manifest())
    }
}
