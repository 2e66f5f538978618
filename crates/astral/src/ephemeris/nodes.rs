//! Mean and true lunar nodes.

use super::elements::elements_for;
use super::types::{CelestialBody, Position};
use crate::time::{normalize_angle, JULIAN_CENTURY};

/// Mean ascending lunar node at day `d`.
///
/// A straight linear regression of the Moon's node element. Latitude and
/// distance are 0: the node is a point on the ecliptic, not a body.
pub fn north_node(d: f64) -> Position {
    let Some(moon) = elements_for(CelestialBody::Moon) else {
        log::warn!("No lunar elements for the North Node; returning a zero position");
        return Position::zeroed(CelestialBody::NorthNode);
    };

    Position {
        ecliptic_longitude: moon.at_day(d).ascending_node,
        ..Position::zeroed(CelestialBody::NorthNode)
    }
}

/// Mean descending lunar node, always opposite the North Node.
pub fn south_node(d: f64) -> Position {
    Position {
        ecliptic_longitude: normalize_angle(north_node(d).ecliptic_longitude + 180.0),
        ..Position::zeroed(CelestialBody::SouthNode)
    }
}

/// True North Node longitude: the mean node corrected by the two largest
/// nutation-in-longitude terms.
pub fn true_north_node(d: f64) -> f64 {
    let mean_node = north_node(d).ecliptic_longitude;
    let Some(sun) = elements_for(CelestialBody::Sun).map(|table| table.at_day(d)) else {
        return mean_node;
    };

    let omega = (125.04 - 1934.136 * d / JULIAN_CENTURY).to_radians();
    let sun_mean_longitude = (sun.mean_anomaly + sun.perihelion_argument).to_radians();

    // arcseconds
    let delta_psi = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean_longitude).sin();

    normalize_angle(mean_node + delta_psi / 3600.0)
}
