use astral::aspects::{angular_separation, aspect_between, AspectCalculator, AspectType, Orbs};
use astral::ephemeris::{CelestialBody, Position};

fn at(body: CelestialBody, lon: f64) -> Position {
    Position {
        ecliptic_longitude: lon,
        ..Position::zeroed(body)
    }
}

#[test]
fn test_exact_square() {
    let aspect = aspect_between(
        &at(CelestialBody::Sun, 100.0),
        &at(CelestialBody::Mars, 190.0),
        &Orbs::DEFAULT,
    )
    .unwrap();
    assert_eq!(aspect.aspect_type, AspectType::Square);
    assert_eq!(aspect.angle, 90.0);
    assert_eq!(aspect.orb, 0.0);
}

#[test]
fn test_square_within_orb() {
    let aspect = aspect_between(
        &at(CelestialBody::Venus, 10.0),
        &at(CelestialBody::Jupiter, 98.0),
        &Orbs::DEFAULT,
    )
    .unwrap();
    assert_eq!(aspect.aspect_type, AspectType::Square);
    assert!((aspect.angle - 88.0).abs() < 1e-9);
    assert!((aspect.orb - 2.0).abs() < 1e-9);
}

#[test]
fn test_no_covering_aspect() {
    let aspect = aspect_between(
        &at(CelestialBody::Moon, 10.0),
        &at(CelestialBody::Saturn, 50.0),
        &Orbs::DEFAULT,
    );
    assert!(aspect.is_none());
}

#[test]
fn test_opposition_across_zero() {
    // 5° and 187° are 178° apart the short way
    let aspect = aspect_between(
        &at(CelestialBody::Sun, 5.0),
        &at(CelestialBody::Moon, 187.0),
        &Orbs::DEFAULT,
    )
    .unwrap();
    assert_eq!(aspect.aspect_type, AspectType::Opposition);
    assert!((aspect.angle - 178.0).abs() < 1e-9);
    assert!((aspect.orb - 2.0).abs() < 1e-9);
}

#[test]
fn test_conjunction_across_zero() {
    assert!((angular_separation(358.0, 3.0) - 5.0).abs() < 1e-9);
    let aspect = aspect_between(
        &at(CelestialBody::Mercury, 358.0),
        &at(CelestialBody::Venus, 3.0),
        &Orbs::DEFAULT,
    )
    .unwrap();
    assert_eq!(aspect.aspect_type, AspectType::Conjunction);
}

#[test]
fn test_tight_orbs_reject_wide_trine() {
    let p1 = at(CelestialBody::Sun, 0.0);
    let p2 = at(CelestialBody::Neptune, 127.0);
    assert!(aspect_between(&p1, &p2, &Orbs::DEFAULT).is_some());
    assert!(aspect_between(&p1, &p2, &Orbs::TIGHT).is_none());
}

#[test]
fn test_zero_orb_uses_default() {
    let orbs = Orbs {
        conjunction: 0.0,
        sextile: 0.0,
        square: 0.0,
        trine: 0.0,
        opposition: 0.0,
    };
    let aspect = aspect_between(
        &at(CelestialBody::Sun, 0.0),
        &at(CelestialBody::Mars, 97.0),
        &orbs,
    );
    assert_eq!(aspect.unwrap().aspect_type, AspectType::Square);
}

#[test]
fn test_calculate_aspects_pairs() {
    let positions = vec![
        at(CelestialBody::Sun, 0.0),
        at(CelestialBody::Moon, 120.0),
        at(CelestialBody::Mars, 240.0),
        at(CelestialBody::Venus, 45.0),
    ];
    let aspects = AspectCalculator::new().calculate_aspects(&positions);

    // Grand trine among the first three, Venus aspects nobody
    assert_eq!(aspects.len(), 3);
    assert!(aspects.iter().all(|a| a.aspect_type == AspectType::Trine));
    assert!(aspects.iter().all(|a| !a.involves(CelestialBody::Venus)));
    assert!(aspects.iter().all(|a| !a.applying));
    assert_eq!(aspects[0].body1, CelestialBody::Sun);
    assert_eq!(aspects[0].body2, CelestialBody::Moon);
}
