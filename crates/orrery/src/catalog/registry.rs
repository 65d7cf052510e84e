use std::collections::HashMap;
use glam::Vec3;
use serde::Serialize;

use crate::api::error::CatalogError;
use crate::api::types::BodyId;
use crate::catalog::manifest::{BodyKind, CatalogManifest};

/// Latitude/longitude on a body's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Unit vector from the body center through this point.
    /// Y is the north pole; longitude 0 faces +Z.
    pub fn to_unit_vector(self) -> Vec3 {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
    }
}

/// A point of interest on exactly one body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Owning body.
    pub body: BodyId,
    pub name: String,
    pub position: GeoPoint,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub locations: Vec<Location>,
}

impl Body {
    /// Whether `location` is one of this body's own locations.
    pub fn owns(&self, location: &Location) -> bool {
        location.body == self.id && self.locations.iter().any(|l| l == location)
    }

    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }
}

/// Ordered, read-only body catalog built from a [`CatalogManifest`].
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<Body>,
    index: HashMap<BodyId, usize>,
}

impl Catalog {
    /// Build a catalog from a parsed manifest. Rejects empty manifests and duplicate ids.
    pub fn from_manifest(manifest: &CatalogManifest) -> Result<Self, CatalogError> {
        if manifest.bodies.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut bodies = Vec::with_capacity(manifest.bodies.len());
        let mut index = HashMap::with_capacity(manifest.bodies.len());
        for desc in &manifest.bodies {
            let id = BodyId::new(desc.id.as_str());
            if index.insert(id.clone(), bodies.len()).is_some() {
                return Err(CatalogError::DuplicateBody(id));
            }
            let locations = desc
                .locations
                .iter()
                .map(|loc| Location {
                    body: id.clone(),
                    name: loc.name.clone(),
                    position: GeoPoint::new(loc.lat, loc.lon),
                })
                .collect();
            bodies.push(Body {
                id,
                name: desc.name.clone(),
                kind: desc.kind,
                locations,
            });
        }
        Ok(Self { bodies, index })
    }

    /// Parse and build in one step.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let manifest = CatalogManifest::from_json(json)?;
        Self::from_manifest(&manifest)
    }

    /// Look up a body by id. Returns None if not found.
    pub fn get(&self, id: &BodyId) -> Option<&Body> {
        self.index.get(id).map(|&i| &self.bodies[i])
    }

    pub fn contains(&self, id: &BodyId) -> bool {
        self.index.contains_key(id)
    }

    /// Body at a display index.
    pub fn by_index(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn index_of(&self, id: &BodyId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Resolve `id` to a body that exists: `id` itself, else `fallback`,
    /// else the first body in the catalog.
    pub fn resolve(&self, id: &BodyId, fallback: &BodyId) -> &Body {
        self.get(id)
            .or_else(|| self.get(fallback))
            .unwrap_or(&self.bodies[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of bodies. Never zero.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Serialize the bodies (with locations) for the presentation layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.bodies)
    }
}
