//! Civil time, Julian Day and sidereal time conversions.
//!
//! The day number `d = JD - 2451545.0` (days since J2000.0) is the single
//! time parameter threaded through every orbital formula in the engine.

use crate::error::AstralError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const JULIAN_CENTURY: f64 = 36_525.0;

/// First Julian Day number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JD: i64 = 2_299_161;

/// Julian Days beyond this magnitude lie far outside any civil calendar
/// chrono can represent and are rejected before the integer arithmetic.
pub const MAX_CIVIL_JD: f64 = 1.0e9;

/// Convert a UTC instant to a Julian Day number (Meeus, proleptic Gregorian).
///
/// Sub-second precision is dropped.
pub fn julian_day(dt: &DateTime<Utc>) -> f64 {
    let mut year = dt.year();
    let mut month = dt.month() as i32;
    let day = dt.day() as f64
        + dt.hour() as f64 / 24.0
        + dt.minute() as f64 / 1440.0
        + dt.second() as f64 / 86400.0;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = year / 100;
    let b = 2 - a + a / 4;

    let year_days = (365.25 * (year + 4716) as f64).trunc();
    let month_days = (30.6001 * (month + 1) as f64).trunc();

    year_days + month_days + day + b as f64 - 1524.5
}

/// Days elapsed since J2000.0 for the given instant.
pub fn day_number(dt: &DateTime<Utc>) -> f64 {
    julian_day(dt) - J2000
}

/// Convert a Julian Day back to a UTC instant, rounded to the nearest second.
///
/// Julian Days before 2299161 are read in the Julian calendar, later ones in
/// the Gregorian calendar. [`julian_day`] always assumes Gregorian, so the
/// two only round-trip from 1582-10-15 onwards.
pub fn julian_day_to_civil(jd: f64) -> Result<DateTime<Utc>, AstralError> {
    if !jd.is_finite() || jd.abs() > MAX_CIVIL_JD {
        return Err(AstralError::InvalidJulianDay { jd });
    }

    let z = (jd + 0.5).trunc() as i64;
    let f = jd + 0.5 - z as f64;

    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).trunc() as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).trunc() as i64;
    let d = (365.25 * c as f64).trunc() as i64;
    let e = ((b - d) as f64 / 30.6001).trunc() as i64;

    let day = b - d - (30.6001 * e as f64).trunc() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    let midnight = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, day as u32))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(AstralError::InvalidJulianDay { jd })?;

    // Rounding can land on 86400, which carries into the next day.
    let seconds = (f * 86_400.0).round() as i64;
    let instant = midnight
        .checked_add_signed(Duration::seconds(seconds))
        .ok_or(AstralError::InvalidJulianDay { jd })?;
    Ok(Utc.from_utc_datetime(&instant))
}

/// Local mean sidereal time in degrees for a Julian Day and east longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    let d = jd - J2000;
    let t = d / JULIAN_CENTURY;
    let gmst = 280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0;

    normalize_angle(gmst + longitude)
}

/// Reduce an angle in degrees to `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angular difference to `(-180, 180]`, the signed shortest arc.
pub fn normalize_motion(motion: f64) -> f64 {
    let reduced = normalize_angle(motion);
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}
