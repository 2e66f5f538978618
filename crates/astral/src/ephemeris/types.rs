use crate::error::AstralError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Astrological glyph appended to retrograde bodies.
pub const RETROGRADE_SYMBOL: &str = "℞";

/// Bodies the engine can place on the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// How a body's position is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyModel {
    /// Earth's orbit seen from the geocentre.
    Sun,
    /// Geocentric orbit plus the periodic perturbation series.
    Moon,
    /// Mean ascending node of the lunar orbit.
    NorthNode,
    /// Point opposite the mean ascending node.
    SouthNode,
    /// Heliocentric two-body orbit shifted to the geocentre.
    TwoBody,
}

impl CelestialBody {
    /// Every body, in display order.
    pub const ALL: [CelestialBody; 17] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::NorthNode,
        CelestialBody::SouthNode,
        CelestialBody::Chiron,
        CelestialBody::Ceres,
        CelestialBody::Pallas,
        CelestialBody::Juno,
        CelestialBody::Vesta,
    ];

    /// The traditional planets, Sun through Saturn.
    pub fn main_planets() -> &'static [CelestialBody] {
        &Self::ALL[..7]
    }

    /// Chiron and the four major asteroids.
    pub fn asteroids() -> &'static [CelestialBody] {
        &Self::ALL[12..]
    }

    /// Which position model computes this body
    pub fn model(self) -> BodyModel {
        match self {
            CelestialBody::Sun => BodyModel::Sun,
            CelestialBody::Moon => BodyModel::Moon,
            CelestialBody::NorthNode => BodyModel::NorthNode,
            CelestialBody::SouthNode => BodyModel::SouthNode,
            _ => BodyModel::TwoBody,
        }
    }

    /// Whether the body can show apparent retrograde motion from Earth.
    pub fn can_be_retrograde(self) -> bool {
        self.model() == BodyModel::TwoBody
    }

    /// Whether the body is one of the traditional planets
    pub fn is_main_planet(self) -> bool {
        self <= CelestialBody::Saturn
    }

    /// Display name ("North Node")
    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::NorthNode => "North Node",
            CelestialBody::SouthNode => "South Node",
            CelestialBody::Chiron => "Chiron",
            CelestialBody::Ceres => "Ceres",
            CelestialBody::Pallas => "Pallas",
            CelestialBody::Juno => "Juno",
            CelestialBody::Vesta => "Vesta",
        }
    }

    /// Astrological glyph
    pub fn symbol(self) -> &'static str {
        match self {
            CelestialBody::Sun => "☉",
            CelestialBody::Moon => "☽",
            CelestialBody::Mercury => "☿",
            CelestialBody::Venus => "♀",
            CelestialBody::Mars => "♂",
            CelestialBody::Jupiter => "♃",
            CelestialBody::Saturn => "♄",
            CelestialBody::Uranus => "♅",
            CelestialBody::Neptune => "♆",
            CelestialBody::Pluto => "♇",
            CelestialBody::NorthNode => "☊",
            CelestialBody::SouthNode => "☋",
            CelestialBody::Chiron => "⚷",
            CelestialBody::Ceres => "⚳",
            CelestialBody::Pallas => "⚴",
            CelestialBody::Juno => "⚵",
            CelestialBody::Vesta => "⚶",
        }
    }

    /// Identifier used in configuration files ("north_node").
    pub fn id(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = AstralError;

    /// Accepts "north_node", "North Node" or "north-node" alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(&[' ', '-'][..], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|body| body.id() == wanted)
            .ok_or_else(|| AstralError::UnknownBody {
                name: s.to_string(),
                valid: Self::ALL.iter().map(|body| body.id()).collect(),
            })
    }
}

/// Apparent geocentric position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub body: CelestialBody,
    /// Ecliptic longitude in degrees, `[0, 360)`
    pub ecliptic_longitude: f64,
    /// Ecliptic latitude in degrees
    pub ecliptic_latitude: f64,
    /// AU for planets, Earth radii for the Moon, 0 for the nodes
    pub distance: f64,
    pub retrograde: bool,
}

impl Position {
    /// All-zero position, returned for bodies without orbital elements.
    pub fn zeroed(body: CelestialBody) -> Self {
        Self {
            body,
            ecliptic_longitude: 0.0,
            ecliptic_latitude: 0.0,
            distance: 0.0,
            retrograde: false,
        }
    }
}
