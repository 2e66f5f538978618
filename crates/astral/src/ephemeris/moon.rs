//! Lunar position with the principal periodic perturbations, and lunar phase.

use super::calculator::sun_position;
use super::elements::elements_for;
use super::kepler::OrbitPoint;
use super::types::{CelestialBody, Position};
use crate::time::normalize_angle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geocentric Moon position at day `d`; distance in Earth radii.
pub fn moon_position(d: f64) -> Position {
    let (Some(moon_table), Some(sun_table)) =
        (elements_for(CelestialBody::Moon), elements_for(CelestialBody::Sun))
    else {
        log::warn!("No orbital elements for the Moon; returning a zero position");
        return Position::zeroed(CelestialBody::Moon);
    };

    let elements = moon_table.at_day(d);
    let sun = sun_table.at_day(d);

    let ms = sun.mean_anomaly.to_radians();
    let ls = (sun.mean_anomaly + sun.perihelion_argument).to_radians();

    let node = elements.ascending_node.to_radians();
    let mm = elements.mean_anomaly.to_radians();
    let lm = node + elements.perihelion_argument.to_radians() + mm;

    // Mean elongation and argument of latitude
    let dd = lm - ls;
    let f = lm - node;

    let lon_terms = -1.274 * (mm - 2.0 * dd).sin() // evection
        + 0.658 * (2.0 * dd).sin() // variation
        - 0.186 * ms.sin() // yearly equation
        - 0.059 * (2.0 * mm - 2.0 * dd).sin()
        - 0.057 * (mm - 2.0 * dd + ms).sin()
        + 0.053 * (mm + 2.0 * dd).sin()
        + 0.046 * (2.0 * dd - ms).sin()
        + 0.041 * (mm - ms).sin()
        - 0.035 * dd.sin() // parallactic equation
        - 0.031 * (mm + ms).sin()
        - 0.015 * (2.0 * f - 2.0 * dd).sin()
        + 0.011 * (mm - 4.0 * dd).sin();

    let lat_terms = -0.173 * (f - 2.0 * dd).sin()
        - 0.055 * (mm - f - 2.0 * dd).sin()
        - 0.046 * (mm + f - 2.0 * dd).sin()
        + 0.033 * (f + 2.0 * dd).sin()
        + 0.017 * (2.0 * mm + f).sin();

    let dist_terms = -0.58 * (mm - 2.0 * dd).cos() - 0.46 * (2.0 * dd).cos();

    let mut orbit = OrbitPoint::solve(&elements);
    orbit.radius += dist_terms;
    let [x, y, z] = orbit.to_ecliptic(&elements);

    Position {
        body: CelestialBody::Moon,
        ecliptic_longitude: normalize_angle(y.atan2(x).to_degrees() + lon_terms),
        ecliptic_latitude: z.atan2(x.hypot(y)).to_degrees() + lat_terms,
        distance: orbit.radius,
        retrograde: false,
    }
}

/// Lunar phase as a fraction of the synodic cycle: 0 new, 0.5 full.
pub fn moon_phase(d: f64) -> f64 {
    let elongation = moon_position(d).ecliptic_longitude - sun_position(d).ecliptic_longitude;
    normalize_angle(elongation) / 360.0
}

/// The eight conventional named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Named phase for a phase fraction in `[0, 1)`; each name spans 1/8
    /// of the cycle centred on its exact point.
    pub fn from_fraction(phase: f64) -> Self {
        match phase {
            p if !(0.0625..0.9375).contains(&p) => MoonPhase::New,
            p if p < 0.1875 => MoonPhase::WaxingCrescent,
            p if p < 0.3125 => MoonPhase::FirstQuarter,
            p if p < 0.4375 => MoonPhase::WaxingGibbous,
            p if p < 0.5625 => MoonPhase::Full,
            p if p < 0.6875 => MoonPhase::WaningGibbous,
            p if p < 0.8125 => MoonPhase::LastQuarter,
            _ => MoonPhase::WaningCrescent,
        }
    }

    /// Named phase at day `d`
    pub fn at_day(d: f64) -> Self {
        Self::from_fraction(moon_phase(d))
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::day_number;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_moon_distance_in_earth_radii() {
        for d in [0.0, 7.3, 14.7, 22.1, 3650.0] {
            let moon = moon_position(d);
            assert!(moon.distance > 54.0 && moon.distance < 66.0, "d={d}: {}", moon.distance);
            assert!(moon.ecliptic_latitude.abs() < 5.5);
        }
    }

    #[test]
    fn test_moon_moves_eastward_about_thirteen_degrees_a_day() {
        let today = moon_position(500.0).ecliptic_longitude;
        let tomorrow = moon_position(501.0).ecliptic_longitude;
        let motion = crate::time::normalize_motion(tomorrow - today);
        assert!(motion > 10.0 && motion < 16.0, "motion {motion}");
    }

    #[test]
    fn test_phase_names_cover_the_cycle() {
        assert_eq!(MoonPhase::from_fraction(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_fraction(0.95), MoonPhase::New);
        assert_eq!(MoonPhase::from_fraction(0.1), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_fraction(0.25), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_fraction(0.4), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::from_fraction(0.5), MoonPhase::Full);
        assert_eq!(MoonPhase::from_fraction(0.6), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::from_fraction(0.75), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_fraction(0.9), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::Full.to_string(), "Full Moon");
    }

    #[test]
    fn test_known_full_moon() {
        // Full moon of 2024-01-25 17:54 UTC
        let dt = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let phase = moon_phase(day_number(&dt));
        assert!((phase - 0.5).abs() < 0.1, "phase {phase}");
    }

    #[test]
    fn test_phase_advances_through_a_synodic_month() {
        let start = moon_phase(1000.0);
        let week_later = moon_phase(1007.0);
        let advance = (week_later - start).rem_euclid(1.0);
        // ~7/29.53 of a cycle
        assert!((advance - 0.237).abs() < 0.05, "advance {advance}");
    }
}
