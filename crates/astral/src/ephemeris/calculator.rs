use super::elements::elements_for;
use super::kepler::OrbitPoint;
use super::moon::moon_position;
use super::nodes::{north_node, south_node};
use super::types::{BodyModel, CelestialBody, Position};
use crate::time::{day_number, normalize_angle, normalize_motion};
use chrono::{DateTime, Utc};

/// Days before and after the requested instant sampled for retrograde motion.
pub const RETROGRADE_WINDOW_DAYS: f64 = 1.0;

/// Position of `body` at a UTC instant. The retrograde flag is not filled.
pub fn calculate(body: CelestialBody, dt: &DateTime<Utc>) -> Position {
    calculate_at_day(body, day_number(dt))
}

/// Position of `body` at day number `d` since J2000.0.
///
/// The retrograde flag is not filled; see [`calculate_bodies`].
pub fn calculate_at_day(body: CelestialBody, d: f64) -> Position {
    match body.model() {
        BodyModel::Sun => sun_position(d),
        BodyModel::Moon => moon_position(d),
        BodyModel::NorthNode => north_node(d),
        BodyModel::SouthNode => south_node(d),
        BodyModel::TwoBody => planet_position(body, d),
    }
}

/// Positions for the requested bodies, in request order, with retrograde
/// flags set for the bodies that can move backwards.
pub fn calculate_bodies(bodies: &[CelestialBody], dt: &DateTime<Utc>) -> Vec<Position> {
    let d = day_number(dt);
    bodies
        .iter()
        .map(|&body| {
            let mut position = calculate_at_day(body, d);
            if body.can_be_retrograde() {
                position.retrograde = is_retrograde(body, d);
            }
            position
        })
        .collect()
}

/// Positions for every body in [`CelestialBody::ALL`] order.
pub fn calculate_all(dt: &DateTime<Utc>) -> Vec<Position> {
    calculate_bodies(&CelestialBody::ALL, dt)
}

/// Whether `body` moves westward around day `d`, judged from its longitude
/// one day before and one day after.
pub fn is_retrograde(body: CelestialBody, d: f64) -> bool {
    let before = calculate_at_day(body, d - RETROGRADE_WINDOW_DAYS);
    let after = calculate_at_day(body, d + RETROGRADE_WINDOW_DAYS);
    is_retrograde_motion(before.ecliptic_longitude, after.ecliptic_longitude)
}

/// Whether the shortest arc from `earlier` to `later` runs westward.
pub fn is_retrograde_motion(earlier: f64, later: f64) -> bool {
    normalize_motion(later - earlier) < 0.0
}

/// Sun's apparent geocentric position, from Earth's orbit.
///
/// Latitude is 0 by construction.
pub fn sun_position(d: f64) -> Position {
    let Some(table) = elements_for(CelestialBody::Sun) else {
        log::warn!("No orbital elements for the Sun; returning a zero position");
        return Position::zeroed(CelestialBody::Sun);
    };
    let elements = table.at_day(d);
    let orbit = OrbitPoint::solve(&elements);

    Position {
        body: CelestialBody::Sun,
        ecliptic_longitude: normalize_angle(
            orbit.true_anomaly.to_degrees() + elements.perihelion_argument,
        ),
        ecliptic_latitude: 0.0,
        distance: orbit.radius,
        retrograde: false,
    }
}

/// Geocentric position of a body on a heliocentric two-body orbit.
///
/// The Sun's geocentric vector is added to the body's heliocentric vector.
/// The reported distance is that norm plus the Sun's distance, not the
/// true Earth-body range.
pub fn planet_position(body: CelestialBody, d: f64) -> Position {
    let (Some(table), Some(sun_table)) = (elements_for(body), elements_for(CelestialBody::Sun))
    else {
        log::warn!("No orbital elements for {}; returning a zero position", body);
        return Position::zeroed(body);
    };

    let elements = table.at_day(d);
    let [xh, yh, zh] = OrbitPoint::solve(&elements).to_ecliptic(&elements);

    let sun_elements = sun_table.at_day(d);
    let sun = OrbitPoint::solve(&sun_elements);
    let sun_lon = sun.true_anomaly + sun_elements.perihelion_argument.to_radians();

    let xg = xh + sun.radius * sun_lon.cos();
    let yg = yh + sun.radius * sun_lon.sin();
    let zg = zh;

    Position {
        body,
        ecliptic_longitude: normalize_angle(yg.atan2(xg).to_degrees()),
        ecliptic_latitude: zg.atan2(xg.hypot(yg)).to_degrees(),
        distance: (xg * xg + yg * yg + zg * zg).sqrt() + sun.radius,
        retrograde: false,
    }
}
