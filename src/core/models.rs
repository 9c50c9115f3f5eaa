//! Core data models for starlog
//!
//! This module contains the celestial body records stored in the catalog.
//! The set of body kinds is closed: a [`CelestialBody`] is always exactly one
//! of galaxy, star, planet or moon, and every record is immutable once built.

use crate::core::spectral::{classify, SpectralClass};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Body kinds
// =============================================================================

/// The four fixed celestial body categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Galaxy,
    Star,
    Planet,
    Moon,
}

impl BodyKind {
    /// All kinds, root first
    pub const ALL: [BodyKind; 4] = [
        BodyKind::Galaxy,
        BodyKind::Star,
        BodyKind::Planet,
        BodyKind::Moon,
    ];

    /// Parse the singular word used after `add`
    pub fn from_singular(word: &str) -> Option<Self> {
        match word {
            "galaxy" => Some(BodyKind::Galaxy),
            "star" => Some(BodyKind::Star),
            "planet" => Some(BodyKind::Planet),
            "moon" => Some(BodyKind::Moon),
            _ => None,
        }
    }

    /// Parse the plural word used after `list`
    pub fn from_plural(word: &str) -> Option<Self> {
        match word {
            "galaxies" => Some(BodyKind::Galaxy),
            "stars" => Some(BodyKind::Star),
            "planets" => Some(BodyKind::Planet),
            "moons" => Some(BodyKind::Moon),
            _ => None,
        }
    }

    /// Lowercase singular noun ("galaxy")
    pub fn noun(&self) -> &'static str {
        match self {
            BodyKind::Galaxy => "galaxy",
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::Moon => "moon",
        }
    }

    /// Lowercase plural noun ("galaxies")
    pub fn plural(&self) -> &'static str {
        match self {
            BodyKind::Galaxy => "galaxies",
            BodyKind::Star => "stars",
            BodyKind::Planet => "planets",
            BodyKind::Moon => "moons",
        }
    }

    /// The kind a body of this kind must be parented to
    pub fn parent_kind(&self) -> Option<BodyKind> {
        match self {
            BodyKind::Galaxy => None,
            BodyKind::Star => Some(BodyKind::Galaxy),
            BodyKind::Planet => Some(BodyKind::Star),
            BodyKind::Moon => Some(BodyKind::Planet),
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BodyKind::Galaxy => "Galaxy",
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Moon => "Moon",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Galaxy
// =============================================================================

/// Morphological galaxy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalaxyKind {
    Elliptical,
    Lenticular,
    Spiral,
    Irregular,
}

impl GalaxyKind {
    /// Parse a galaxy type word (exact, case-sensitive)
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "elliptical" => Some(GalaxyKind::Elliptical),
            "lenticular" => Some(GalaxyKind::Lenticular),
            "spiral" => Some(GalaxyKind::Spiral),
            "irregular" => Some(GalaxyKind::Irregular),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GalaxyKind::Elliptical => "elliptical",
            GalaxyKind::Lenticular => "lenticular",
            GalaxyKind::Spiral => "spiral",
            GalaxyKind::Irregular => "irregular",
        }
    }
}

impl fmt::Display for GalaxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Magnitude of a galaxy age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeUnit {
    Million,
    Billion,
}

impl AgeUnit {
    /// Map the age suffix character (`M` or `B`)
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'M' => Some(AgeUnit::Million),
            'B' => Some(AgeUnit::Billion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeUnit::Million => "million",
            AgeUnit::Billion => "billion",
        }
    }
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A galaxy; always a hierarchy root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Galaxy {
    pub name: String,
    pub kind: GalaxyKind,
    pub age: f64,
    pub age_unit: AgeUnit,
}

impl Galaxy {
    pub fn new(name: impl Into<String>, kind: GalaxyKind, age: f64, age_unit: AgeUnit) -> Self {
        Self {
            name: name.into(),
            kind,
            age,
            age_unit,
        }
    }
}

// =============================================================================
// Star
// =============================================================================

/// A star, parented to a galaxy
///
/// The spectral class is derived from the physical parameters at
/// construction, so a stored star never carries an invalid class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub name: String,
    pub mass: f64,
    pub diameter: f64,
    /// Surface temperature in Kelvin
    pub temperature: u64,
    pub luminosity: f64,
    pub spectral_class: SpectralClass,
}

impl Star {
    /// Build a star, or `None` if the parameters match no spectral class
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        diameter: f64,
        temperature: u64,
        luminosity: f64,
    ) -> Option<Self> {
        let spectral_class = classify(mass, diameter, temperature, luminosity)?;
        Some(Self {
            name: name.into(),
            mass,
            diameter,
            temperature,
            luminosity,
            spectral_class,
        })
    }
}

// =============================================================================
// Planet
// =============================================================================

/// Planet categories accepted by `add planet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetKind {
    Terrestrial,
    GiantPlanet,
    IceGiant,
    Mesoplanet,
    MiniNeptune,
    Planetar,
    SuperEarth,
    SuperJupiter,
    SubEarth,
}

impl PlanetKind {
    /// Command-language spelling of every kind
    const TABLE: [(&'static str, PlanetKind); 9] = [
        ("terrestrial", PlanetKind::Terrestrial),
        ("giant planet", PlanetKind::GiantPlanet),
        ("ice giant", PlanetKind::IceGiant),
        ("mesoplanet", PlanetKind::Mesoplanet),
        ("mini-neptune", PlanetKind::MiniNeptune),
        ("planetar", PlanetKind::Planetar),
        ("super-earth", PlanetKind::SuperEarth),
        ("super-jupiter", PlanetKind::SuperJupiter),
        ("sub-earth", PlanetKind::SubEarth),
    ];

    /// Look up a planet kind by its exact command-language spelling
    pub fn parse(s: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, kind)| *kind)
    }

    /// True if `word` opens a two-word kind name
    pub fn is_two_word_prefix(word: &str) -> bool {
        matches!(word, "giant" | "ice")
    }

    pub fn as_str(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planet, parented to a star
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    pub name: String,
    pub kind: PlanetKind,
    pub supports_life: bool,
}

impl Planet {
    pub fn new(name: impl Into<String>, kind: PlanetKind, supports_life: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            supports_life,
        }
    }
}

// =============================================================================
// Moon
// =============================================================================

/// A moon, parented to a planet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moon {
    pub name: String,
}

impl Moon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// =============================================================================
// Celestial body
// =============================================================================

/// Any record the catalog can hold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum CelestialBody {
    Galaxy(Galaxy),
    Star(Star),
    Planet(Planet),
    Moon(Moon),
}

impl CelestialBody {
    pub fn name(&self) -> &str {
        match self {
            CelestialBody::Galaxy(g) => &g.name,
            CelestialBody::Star(s) => &s.name,
            CelestialBody::Planet(p) => &p.name,
            CelestialBody::Moon(m) => &m.name,
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            CelestialBody::Galaxy(_) => BodyKind::Galaxy,
            CelestialBody::Star(_) => BodyKind::Star,
            CelestialBody::Planet(_) => BodyKind::Planet,
            CelestialBody::Moon(_) => BodyKind::Moon,
        }
    }

    pub fn as_galaxy(&self) -> Option<&Galaxy> {
        match self {
            CelestialBody::Galaxy(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_star(&self) -> Option<&Star> {
        match self {
            CelestialBody::Star(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            CelestialBody::Planet(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_moon(&self) -> Option<&Moon> {
        match self {
            CelestialBody::Moon(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Galaxy> for CelestialBody {
    fn from(galaxy: Galaxy) -> Self {
        CelestialBody::Galaxy(galaxy)
    }
}

impl From<Star> for CelestialBody {
    fn from(star: Star) -> Self {
        CelestialBody::Star(star)
    }
}

impl From<Planet> for CelestialBody {
    fn from(planet: Planet) -> Self {
        CelestialBody::Planet(planet)
    }
}

impl From<Moon> for CelestialBody {
    fn from(moon: Moon) -> Self {
        CelestialBody::Moon(moon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_kind_words() {
        for kind in BodyKind::ALL {
            assert_eq!(BodyKind::from_singular(kind.noun()), Some(kind));
            assert_eq!(BodyKind::from_plural(kind.plural()), Some(kind));
        }
        assert_eq!(BodyKind::from_plural("galaxy"), None);
        assert_eq!(BodyKind::from_singular("Galaxy"), None);
    }

    #[test]
    fn test_parent_kinds_form_a_chain() {
        assert_eq!(BodyKind::Galaxy.parent_kind(), None);
        assert_eq!(BodyKind::Star.parent_kind(), Some(BodyKind::Galaxy));
        assert_eq!(BodyKind::Planet.parent_kind(), Some(BodyKind::Star));
        assert_eq!(BodyKind::Moon.parent_kind(), Some(BodyKind::Planet));
    }

    #[test]
    fn test_galaxy_kind_is_case_sensitive() {
        assert_eq!(GalaxyKind::parse("spiral"), Some(GalaxyKind::Spiral));
        assert_eq!(GalaxyKind::parse("Spiral"), None);
        assert_eq!(GalaxyKind::parse("barred"), None);
    }

    #[test]
    fn test_age_unit_suffix() {
        assert_eq!(AgeUnit::from_suffix('M'), Some(AgeUnit::Million));
        assert_eq!(AgeUnit::from_suffix('B'), Some(AgeUnit::Billion));
        assert_eq!(AgeUnit::from_suffix('b'), None);
    }

    #[test]
    fn test_planet_kind_table() {
        assert_eq!(PlanetKind::parse("giant planet"), Some(PlanetKind::GiantPlanet));
        assert_eq!(PlanetKind::parse("ice giant"), Some(PlanetKind::IceGiant));
        assert_eq!(PlanetKind::parse("mini-neptune"), Some(PlanetKind::MiniNeptune));
        assert_eq!(PlanetKind::parse("mini_neptune"), None);
        assert_eq!(PlanetKind::parse("giant"), None);
        assert_eq!(PlanetKind::SuperEarth.to_string(), "super-earth");
    }

    #[test]
    fn test_star_new_derives_class() {
        let sol = Star::new("Sol", 1.0, 1.39, 5778, 1.0).unwrap();
        assert_eq!(sol.spectral_class, SpectralClass::G);
        assert!(Star::new("Dud", 0.01, 1.0, 5778, 1.0).is_none());
    }

    #[test]
    fn test_celestial_body_accessors() {
        let body: CelestialBody = Moon::new("Luna").into();
        assert_eq!(body.name(), "Luna");
        assert_eq!(body.kind(), BodyKind::Moon);
        assert!(body.as_moon().is_some());
        assert!(body.as_planet().is_none());
    }

    #[test]
    fn test_body_serializes_with_body_tag() {
        let body: CelestialBody = Planet::new("Earth", PlanetKind::Terrestrial, true).into();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["body"], "planet");
        assert_eq!(json["kind"], "terrestrial");
        assert_eq!(json["name"], "Earth");
        assert_eq!(json["supports_life"], true);
    }
}
