use super::signs::ZodiacSign;
use crate::time::normalize_angle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A longitude expressed as a sign plus degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// 0..=29
    pub degrees: u32,
    /// 0..=59
    pub minutes: u32,
    /// 0..=59
    pub seconds: u32,
    /// Degrees into the sign, `[0, 30)`
    pub total: f64,
}

/// Map an ecliptic longitude onto the zodiac. Components are truncated,
/// not rounded.
pub fn longitude_to_zodiac(longitude: f64) -> ZodiacPosition {
    let longitude = normalize_angle(longitude);

    let sign_index = ((longitude / 30.0).floor() as usize).min(11);
    let in_sign = longitude - sign_index as f64 * 30.0;

    let degrees = in_sign.floor();
    let minutes_f = (in_sign - degrees) * 60.0;
    let minutes = minutes_f.floor();
    let seconds = ((minutes_f - minutes) * 60.0).floor();

    ZodiacPosition {
        sign: ZodiacSign::from_index(sign_index),
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
        total: in_sign,
    }
}

impl ZodiacPosition {
    /// Abbreviated form, e.g. `15°23' Ari`.
    pub fn short(&self) -> String {
        format!("{}°{:02}' {}", self.degrees, self.minutes, self.sign.abbreviation())
    }

    /// Absolute ecliptic longitude of this position.
    pub fn longitude(&self) -> f64 {
        self.sign.start_longitude() + self.total
    }
}

impl fmt::Display for ZodiacPosition {
    /// e.g. `15°23' Aries`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}' {}", self.degrees, self.minutes, self.sign)
    }
}
