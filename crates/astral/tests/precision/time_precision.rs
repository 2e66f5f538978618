use astral::error::AstralError;
use astral::time::{day_number, julian_day, julian_day_to_civil, J2000};
use chrono::{Datelike, TimeZone, Timelike, Utc};

#[test]
fn test_round_trip_to_the_second() {
    let instants = [
        Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(1700, 2, 28, 23, 59, 59).unwrap(),
        Utc.with_ymd_and_hms(1899, 12, 31, 12, 0, 1).unwrap(),
        Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap(),
        Utc.with_ymd_and_hms(2000, 2, 29, 6, 6, 6).unwrap(),
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        Utc.with_ymd_and_hms(2100, 3, 1, 0, 0, 30).unwrap(),
    ];

    for dt in instants {
        let back = julian_day_to_civil(julian_day(&dt)).unwrap();
        assert_eq!(back, dt, "round trip of {dt}");
    }
}

#[test]
fn test_every_hour_of_a_leap_day() {
    for hour in 0..24 {
        let dt = Utc.with_ymd_and_hms(2024, 2, 29, hour, 30, 15).unwrap();
        let back = julian_day_to_civil(julian_day(&dt)).unwrap();
        assert_eq!(back, dt);
    }
}

#[test]
fn test_julian_calendar_before_reform() {
    // JD 2299160.5 is 15 Oct 1582 (Gregorian); one day earlier is 4 Oct (Julian)
    let before = julian_day_to_civil(2_299_159.5).unwrap();
    assert_eq!((before.year(), before.month(), before.day()), (1582, 10, 4));
    assert_eq!(before.hour(), 0);
}

#[test]
fn test_day_number_epoch() {
    let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(julian_day(&noon), J2000);
    assert_eq!(day_number(&noon), 0.0);

    let next = Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap();
    assert!((day_number(&next) - 0.5).abs() < 1e-9);
}

#[test]
fn test_non_finite_rejected() {
    assert!(julian_day_to_civil(f64::NAN).is_err());
    assert!(julian_day_to_civil(f64::INFINITY).is_err());
}

#[test]
fn test_out_of_range_rejected() {
    for jd in [1e19, -1e19, 1.0e9 + 1.0, f64::MAX, 5.0e8] {
        assert!(
            matches!(julian_day_to_civil(jd), Err(AstralError::InvalidJulianDay { .. })),
            "jd {jd}"
        );
    }
}
