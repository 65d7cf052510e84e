/// Body table for the solar explorer, in display order (sun outward).
///
/// Coordinates are planetocentric degrees, east longitude positive.
/// Landing sites use the published mission coordinates rounded to 0.01°.

use orrery::{BodyDescriptor, BodyKind, CatalogManifest, LocationDescriptor};

/// One row of the body table.
pub struct BodyEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: BodyKind,
    pub locations: &'static [(&'static str, f32, f32)],
}

// ── Surface locations ────────────────────────────────────────────────

const EARTH_SITES: &[(&str, f32, f32)] = &[
    ("Cape Canaveral", 28.39, -80.60),
    ("Baikonur", 45.96, 63.31),
    ("Mauna Kea", 19.82, -155.47),
    ("Atacama", -24.63, -70.40),
    ("Greenwich", 51.48, 0.0),
];

const MOON_SITES: &[(&str, f32, f32)] = &[
    ("Tranquility Base", 0.67, 23.47),
    ("Hadley Rille", 26.13, 3.63),
    ("Tycho", -43.31, -11.36),
    ("Shackleton", -89.9, 0.0),
];

const MARS_SITES: &[(&str, f32, f32)] = &[
    ("Olympus Mons", 18.65, -133.8),
    ("Jezero", 18.38, 77.58),
    ("Gale", -5.4, 137.8),
    ("Valles Marineris", -13.9, -59.2),
    ("Hellas Planitia", -42.4, 70.5),
];

// ── Bodies ───────────────────────────────────────────────────────────

pub const BODIES: &[BodyEntry] = &[
    BodyEntry { id: "sol",     name: "Sun",           kind: BodyKind::Star,        locations: &[] },
    BodyEntry { id: "mercury", name: "Mercury",       kind: BodyKind::Planet,      locations: &[] },
    BodyEntry { id: "venus",   name: "Venus",         kind: BodyKind::Planet,      locations: &[] },
    BodyEntry { id: "earth",   name: "Earth",         kind: BodyKind::Planet,      locations: EARTH_SITES },
    BodyEntry { id: "moon",    name: "Moon",          kind: BodyKind::Moon,        locations: MOON_SITES },
    BodyEntry { id: "mars",    name: "Mars",          kind: BodyKind::Planet,      locations: MARS_SITES },
    BodyEntry { id: "belt",    name: "Asteroid Belt", kind: BodyKind::Belt,        locations: &[] },
    BodyEntry { id: "jupiter", name: "Jupiter",       kind: BodyKind::Planet,      locations: &[] },
    BodyEntry { id: "saturn",  name: "Saturn",        kind: BodyKind::Planet,      locations: &[] },
    BodyEntry { id: "uranus",  name: "Uranus",        kind: BodyKind::Planet,      locations: &[] },
    BodyEntry { id: "neptune", name: "Neptune",       kind: BodyKind::Planet,      locations: &[] },
    // Pluto (dwarf planet, included by popular demand)
    BodyEntry { id: "pluto",   name: "Pluto",         kind: BodyKind::DwarfPlanet, locations: &[] },
];

/// Bodies with surface textures on the globe.
pub const DETAILED: [&str; 3] = ["earth", "moon", "mars"];

/// Build the catalog manifest from the body table.
pub fn manifest() -> CatalogManifest {
    CatalogManifest {
        bodies: BODIES
            .iter()
            .map(|entry| BodyDescriptor {
                id: entry.id.to_string(),
                name: entry.name.to_string(),
                kind: entry.kind,
                locations: entry
                    .locations
                    .iter()
                    .map(|&(name, lat, lon)| LocationDescriptor {
                        name: name.to_string(),
                        lat,
                        lon,
                    })
                    .collect(),
            })
            .collect(),
    }
}
