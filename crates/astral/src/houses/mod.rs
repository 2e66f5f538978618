//! House cusp computation.

pub mod equal;
pub mod placidus;
pub mod types;

pub use equal::equal_cusps;
pub use placidus::{placidus_cusps, PLACIDUS_MAX_ITERATIONS};
pub use types::{House, HouseCusps};

use crate::angles::ChartAngles;
use crate::error::AstralError;
use crate::time::{julian_day, local_sidereal_time};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    Equal,
    #[default]
    Placidus,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 2] = [HouseSystem::Equal, HouseSystem::Placidus];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Equal => "Equal",
            HouseSystem::Placidus => "Placidus",
        }
    }

    /// Cusps and angles for an instant and place (degrees, north/east positive).
    pub fn compute(self, latitude: f64, longitude: f64, dt: &DateTime<Utc>) -> HouseCusps {
        let lst = local_sidereal_time(julian_day(dt), longitude);
        let angles = ChartAngles::from_sidereal_time(lst, latitude);

        match self {
            HouseSystem::Equal => equal_cusps(&angles),
            HouseSystem::Placidus => placidus_cusps(&angles, lst, latitude),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = AstralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" => Ok(HouseSystem::Equal),
            "placidus" => Ok(HouseSystem::Placidus),
            _ => Err(AstralError::UnknownHouseSystem {
                name: s.to_string(),
                valid: Self::ALL.iter().map(|system| system.name().to_lowercase()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse() {
        assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!(" Equal ".parse::<HouseSystem>().unwrap(), HouseSystem::Equal);
        let err = "koch".parse::<HouseSystem>().unwrap_err();
        assert!(err.to_string().contains("koch"));
    }

    #[test]
    fn test_default_is_placidus() {
        assert_eq!(HouseSystem::default(), HouseSystem::Placidus);
    }

    #[test]
    fn test_compute_dispatch() {
        let dt = Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap();
        let equal = HouseSystem::Equal.compute(48.85, 2.35, &dt);
        let placidus = HouseSystem::Placidus.compute(48.85, 2.35, &dt);
        assert_eq!(equal.system, HouseSystem::Equal);
        assert_eq!(placidus.system, HouseSystem::Placidus);
        assert_eq!(equal.ascendant, placidus.ascendant);
        assert_eq!(equal.midheaven, placidus.midheaven);
    }
}
