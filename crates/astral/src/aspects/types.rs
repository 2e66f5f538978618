use crate::ephemeris::CelestialBody;
use crate::error::AstralError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five major (Ptolemaic) aspects, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    /// Priority order used when classifying a separation.
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
        }
    }

    /// Astrological glyph
    pub fn symbol(self) -> &'static str {
        match self {
            AspectType::Conjunction => "☌",
            AspectType::Sextile => "⚹",
            AspectType::Square => "□",
            AspectType::Trine => "△",
            AspectType::Opposition => "☍",
        }
    }

    /// Conjunction, sextile and trine are the flowing aspects.
    pub fn is_harmonic(self) -> bool {
        matches!(self, AspectType::Conjunction | AspectType::Sextile | AspectType::Trine)
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectType {
    type Err = AstralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|aspect| aspect.name().to_lowercase() == wanted)
            .ok_or_else(|| AstralError::UnknownAspect {
                name: s.to_string(),
                valid: Self::ALL.iter().map(|a| a.name().to_lowercase()).collect(),
            })
    }
}

/// Maximum orb per aspect type, in degrees.
///
/// A zero entry means "not configured" and resolves to the matching
/// [`Orbs::DEFAULT`] value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbs {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl Orbs {
    pub const DEFAULT: Orbs = Orbs {
        conjunction: 8.0,
        sextile: 6.0,
        square: 7.0,
        trine: 8.0,
        opposition: 8.0,
    };

    pub const TIGHT: Orbs = Orbs {
        conjunction: 5.0,
        sextile: 4.0,
        square: 5.0,
        trine: 5.0,
        opposition: 5.0,
    };

    pub const PRESETS: [&'static str; 2] = ["default", "tight"];

    /// Named preset: "default" or "tight".
    pub fn preset(name: &str) -> Result<Orbs, AstralError> {
        match name.trim().to_lowercase().as_str() {
            "default" => Ok(Orbs::DEFAULT),
            "tight" => Ok(Orbs::TIGHT),
            _ => Err(AstralError::UnknownOrbPreset {
                name: name.to_string(),
                valid: Self::PRESETS.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }

    /// Configured value, zero included.
    pub fn get(&self, aspect: AspectType) -> f64 {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::Sextile => self.sextile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Opposition => self.opposition,
        }
    }

    /// Effective maximum orb, falling back to the default when unset.
    pub fn max_orb(&self, aspect: AspectType) -> f64 {
        let orb = self.get(aspect);
        if orb == 0.0 {
            Orbs::DEFAULT.get(aspect)
        } else {
            orb
        }
    }

    /// Copy with one aspect's orb replaced.
    pub fn with(mut self, aspect: AspectType, degrees: f64) -> Self {
        match aspect {
            AspectType::Conjunction => self.conjunction = degrees,
            AspectType::Sextile => self.sextile = degrees,
            AspectType::Square => self.square = degrees,
            AspectType::Trine => self.trine = degrees,
            AspectType::Opposition => self.opposition = degrees,
        }
        self
    }
}

impl Default for Orbs {
    fn default() -> Self {
        Orbs::DEFAULT
    }
}

/// A matched aspect between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body1: CelestialBody,
    pub body2: CelestialBody,
    pub aspect_type: AspectType,
    /// Actual separation between the bodies, `[0, 180]`
    pub angle: f64,
    /// Deviation from exact, degrees
    pub orb: f64,
    /// Always false; approach direction is not computed.
    pub applying: bool,
}

impl Aspect {
    /// Whether `body` is one side of the aspect
    pub fn involves(&self, body: CelestialBody) -> bool {
        self.body1 == body || self.body2 == body
    }

    /// The other body of the pair, if `body` takes part.
    pub fn other(&self, body: CelestialBody) -> Option<CelestialBody> {
        if self.body1 == body {
            Some(self.body2)
        } else if self.body2 == body {
            Some(self.body1)
        } else {
            None
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({:.2}°)",
            self.body1,
            self.aspect_type.symbol(),
            self.body2,
            self.orb
        )
    }
}
