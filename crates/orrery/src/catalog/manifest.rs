use serde::{Deserialize, Serialize};

/// Catalog manifest describing every body an explorer can show.
/// Loaded from JSON at init; order is the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Bodies in display order.
    pub bodies: Vec<BodyDescriptor>,
}

/// Describes a single body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Stable identifier (e.g., "mars").
    pub id: String,
    /// Display name (e.g., "Mars").
    pub name: String,
    /// What sort of body this is (default: planet).
    #[serde(default)]
    pub kind: BodyKind,
    /// Points of interest on the surface.
    #[serde(default)]
    pub locations: Vec<LocationDescriptor>,
}

/// Describes a surface location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDescriptor {
    pub name: String,
    /// Latitude in degrees, north positive.
    pub lat: f32,
    /// Longitude in degrees, east positive.
    pub lon: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
    DwarfPlanet,
    Moon,
    Belt,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
