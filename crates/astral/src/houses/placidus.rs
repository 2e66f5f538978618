use super::{HouseCusps, HouseSystem};
use crate::angles::{ChartAngles, OBLIQUITY};
use crate::time::normalize_angle;

/// Upper bound on semi-arc refinement passes per cusp.
pub const PLACIDUS_MAX_ITERATIONS: usize = 20;

/// Intermediate cusps: (house number, RA offset from RAMC, semi-arc fraction).
const INTERMEDIATE_CUSPS: [(u8, f64, f64); 4] = [
    (11, 30.0, 1.0 / 3.0),
    (12, 60.0, 2.0 / 3.0),
    (2, 120.0, 2.0 / 3.0),
    (3, 150.0, 1.0 / 3.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CuspSolution {
    pub longitude: f64,
    /// Semi-arc was undefined and the starting RA was used as the longitude.
    pub fallback: bool,
}

/// Placidus houses for a chart whose RAMC (local sidereal time) is `ramc`.
///
/// Cusps 1/4/7/10 are the angles themselves. Cusps 11, 12, 2 and 3 are
/// solved by trisecting semi-arcs; 5, 6, 8 and 9 mirror them across the
/// chart.
pub fn placidus_cusps(angles: &ChartAngles, ramc: f64, latitude: f64) -> HouseCusps {
    let mut cusps = [0.0; 12];
    cusps[0] = angles.ascendant;
    cusps[3] = angles.imum_coeli;
    cusps[6] = angles.descendant;
    cusps[9] = angles.midheaven;

    for (house, offset, fraction) in INTERMEDIATE_CUSPS {
        let solution = solve_cusp(ramc, offset, fraction, latitude);
        if solution.fallback {
            log::debug!(
                "Placidus cusp {} undefined at latitude {:.2}; using RA {:.4}",
                house,
                latitude,
                solution.longitude
            );
        }
        let index = house as usize - 1;
        cusps[index] = solution.longitude;
        cusps[(index + 6) % 12] = normalize_angle(solution.longitude + 180.0);
    }

    HouseCusps::from_parts(HouseSystem::Placidus, cusps, angles)
}

pub(crate) fn solve_cusp(ramc: f64, offset: f64, fraction: f64, latitude: f64) -> CuspSolution {
    let lat = latitude.to_radians();
    let obl = OBLIQUITY.to_radians();

    let start = normalize_angle(ramc + offset);
    let mut ra = start.to_radians();
    let mut longitude = 0.0;

    for _ in 0..PLACIDUS_MAX_ITERATIONS {
        let decl = (obl.sin() * ra.sin()).asin();
        let semi_arc = (-lat.tan() * decl.tan()).acos();
        if semi_arc.is_nan() {
            return CuspSolution {
                longitude: start,
                fallback: true,
            };
        }

        ra = normalize_angle(ramc + fraction * semi_arc.to_degrees() * 2.0).to_radians();

        longitude = (ra.sin() * obl.cos() + decl.tan() * obl.sin())
            .atan2(ra.cos())
            .to_degrees();
    }

    CuspSolution {
        longitude: normalize_angle(longitude),
        fallback: false,
    }
}
