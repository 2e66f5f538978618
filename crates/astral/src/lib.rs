//! Geocentric ephemeris, house and aspect engine for natal charts.
//!
//! Positions come from mean orbital elements with linear secular rates, so
//! accuracy is on the order of arcminutes for the planets and about a degree
//! for the Moon: adequate for charts, not for astronomy.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod time;
pub mod zodiac;

pub use angles::{ascendant, midheaven, ChartAngles, OBLIQUITY};
pub use aspects::{Aspect, AspectCalculator, AspectType, Orbs};
pub use chart::{Chart, ChartSettings};
pub use ephemeris::{calculate, calculate_all, calculate_bodies, CelestialBody, MoonPhase, Position};
pub use error::AstralError;
pub use houses::{House, HouseCusps, HouseSystem};
pub use time::{julian_day, julian_day_to_civil, normalize_angle};
pub use zodiac::{longitude_to_zodiac, ZodiacPosition, ZodiacSign};
