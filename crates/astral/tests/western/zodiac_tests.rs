use astral::time::normalize_angle;
use astral::zodiac::{longitude_to_zodiac, Element, Modality, ZodiacSign};

#[test]
fn test_sign_index_is_floor_of_thirty() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let pos = longitude_to_zodiac(lon);
        assert_eq!(pos.sign.index(), (lon / 30.0).floor() as usize, "lon {lon}");
        lon += 0.73;
    }
}

#[test]
fn test_components_reconstruct_position_in_sign() {
    for lon in [0.0, 12.3456, 89.9999, 145.01, 222.222, 301.5, 359.9999] {
        let pos = longitude_to_zodiac(lon);
        let rebuilt =
            pos.degrees as f64 + pos.minutes as f64 / 60.0 + pos.seconds as f64 / 3600.0;
        assert!((rebuilt - pos.total).abs() < 1e-4 + 1.0 / 3600.0, "lon {lon}");
        assert!(pos.degrees < 30);
        assert!(pos.minutes < 60);
        assert!(pos.seconds < 60);
    }
}

#[test]
fn test_normalize_angle_properties() {
    for lon in [-720.5, -359.9, -0.25, 0.0, 42.0, 359.99, 360.0, 1000.125] {
        let n = normalize_angle(lon);
        assert!((0.0..360.0).contains(&n), "lon {lon} -> {n}");
        assert!((normalize_angle(lon + 360.0) - n).abs() < 1e-9);
    }
}

#[test]
fn test_sign_metadata() {
    assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    assert_eq!(ZodiacSign::Scorpio.modality(), Modality::Fixed);
    assert_eq!(ZodiacSign::Capricorn.symbol(), "♑");
    assert_eq!(ZodiacSign::Pisces.start_longitude(), 330.0);
    assert_eq!(Element::Air.to_string(), "Air");
    assert_eq!(Modality::Mutable.to_string(), "Mutable");
}

#[test]
fn test_display_forms() {
    let pos = longitude_to_zodiac(195.5);
    assert_eq!(pos.sign, ZodiacSign::Libra);
    assert_eq!(pos.to_string(), "15°30' Libra");
    assert_eq!(pos.short(), "15°30' Lib");
}
