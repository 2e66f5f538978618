use super::HouseSystem;
use crate::angles::ChartAngles;
use crate::time::normalize_angle;
use crate::zodiac::{longitude_to_zodiac, ZodiacSign};
use serde::{Deserialize, Serialize};

/// One of the twelve houses, identified by its starting cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1..=12
    pub number: u8,
    /// Ecliptic longitude of the cusp
    pub cusp: f64,
    pub sign: ZodiacSign,
}

impl House {
    /// House with its cusp normalized and its sign resolved
    pub fn new(number: u8, cusp: f64) -> Self {
        let cusp = normalize_angle(cusp);
        Self {
            number,
            cusp,
            sign: longitude_to_zodiac(cusp).sign,
        }
    }
}

/// Twelve cusps in house order plus the four chart angles.
///
/// Cusp longitudes are cyclic; under Placidus they are not guaranteed to
/// increase monotonically from house to house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub system: HouseSystem,
    pub houses: [House; 12],
    pub ascendant: f64,
    pub midheaven: f64,
    pub imum_coeli: f64,
    pub descendant: f64,
}

impl HouseCusps {
    pub(crate) fn from_parts(system: HouseSystem, cusps: [f64; 12], angles: &ChartAngles) -> Self {
        let houses = std::array::from_fn(|i| House::new(i as u8 + 1, cusps[i]));
        Self {
            system,
            houses,
            ascendant: angles.ascendant,
            midheaven: angles.midheaven,
            imum_coeli: angles.imum_coeli,
            descendant: angles.descendant,
        }
    }

    /// Cusp longitudes in house order.
    pub fn cusps(&self) -> [f64; 12] {
        self.houses.map(|house| house.cusp)
    }

    /// The four chart angles these cusps were built from
    pub fn angles(&self) -> ChartAngles {
        ChartAngles {
            ascendant: self.ascendant,
            midheaven: self.midheaven,
            descendant: self.descendant,
            imum_coeli: self.imum_coeli,
        }
    }

    /// House (1..=12) containing `longitude`.
    ///
    /// Each house spans `[cusp_i, cusp_{i+1})`, wrapping through 0° when the
    /// next cusp is numerically smaller. Falls back to house 1 when no span
    /// matches, which only happens for degenerate cusp sets.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let longitude = normalize_angle(longitude);

        for i in 0..12 {
            let cusp = self.houses[i].cusp;
            let next = self.houses[(i + 1) % 12].cusp;

            let inside = if next < cusp {
                longitude >= cusp || longitude < next
            } else {
                longitude >= cusp && longitude < next
            };
            if inside {
                return self.houses[i].number;
            }
        }
        1
    }
}
