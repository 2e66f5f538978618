//! Ascendant, Midheaven and their opposite points.

use crate::time::{julian_day, local_sidereal_time, normalize_angle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic at J2000.0, in degrees. Held constant.
pub const OBLIQUITY: f64 = 23.4393;

/// The four chart angles, in ecliptic degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
}

impl ChartAngles {
    /// Angles for an instant and place (degrees, north/east positive)
    pub fn compute(latitude: f64, longitude: f64, dt: &DateTime<Utc>) -> Self {
        let lst = local_sidereal_time(julian_day(dt), longitude);
        Self::from_sidereal_time(lst, latitude)
    }

    /// Angles for a local sidereal time (degrees) and geographic latitude.
    pub fn from_sidereal_time(lst: f64, latitude: f64) -> Self {
        let ascendant = ascendant_from_lst(lst, latitude);
        let midheaven = midheaven_from_lst(lst);
        Self {
            ascendant,
            midheaven,
            descendant: normalize_angle(ascendant + 180.0),
            imum_coeli: normalize_angle(midheaven + 180.0),
        }
    }
}

/// Ecliptic longitude rising on the eastern horizon.
pub fn ascendant(latitude: f64, longitude: f64, dt: &DateTime<Utc>) -> f64 {
    ascendant_from_lst(local_sidereal_time(julian_day(dt), longitude), latitude)
}

/// Ecliptic longitude culminating on the local meridian.
pub fn midheaven(longitude: f64, dt: &DateTime<Utc>) -> f64 {
    midheaven_from_lst(local_sidereal_time(julian_day(dt), longitude))
}

/// Ascendant for a local sidereal time and latitude, in degrees
pub fn ascendant_from_lst(lst: f64, latitude: f64) -> f64 {
    let lst = lst.to_radians();
    let lat = latitude.to_radians();
    let obl = OBLIQUITY.to_radians();

    let y = -lst.cos();
    let x = lst.sin() * obl.cos() + lat.tan() * obl.sin();

    normalize_angle(y.atan2(x).to_degrees())
}

/// Midheaven for a local sidereal time, in degrees
pub fn midheaven_from_lst(lst: f64) -> f64 {
    let lst = lst.to_radians();
    let obl = OBLIQUITY.to_radians();

    normalize_angle(lst.sin().atan2(lst.cos() * obl.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midheaven_at_equinox_points() {
        // RAMC 0° culminates 0° Aries, RAMC 90° culminates 0° Cancer
        assert!(midheaven_from_lst(0.0).abs() < 1e-9);
        assert!((midheaven_from_lst(90.0) - 90.0).abs() < 1e-9);
        assert!((midheaven_from_lst(180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_on_equator() {
        assert!((ascendant_from_lst(0.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_finite_in_range() {
        for lst in [0.0, 45.0, 100.0, 200.0, 300.0] {
            for lat in [-60.0, -50.0, 0.0, 35.0, 55.0, 60.0] {
                let asc = ascendant_from_lst(lst, lat);
                assert!(asc.is_finite(), "lst={lst} lat={lat}");
                assert!((0.0..360.0).contains(&asc), "lst={lst} lat={lat} asc={asc}");
            }
        }
    }

    #[test]
    fn test_opposite_angles() {
        let angles = ChartAngles::from_sidereal_time(123.4, 48.85);
        assert_eq!(angles.descendant, normalize_angle(angles.ascendant + 180.0));
        assert_eq!(angles.imum_coeli, normalize_angle(angles.midheaven + 180.0));
    }
}
