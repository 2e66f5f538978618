use crate::aspects::types::{Aspect, AspectType, Orbs};
use crate::ephemeris::Position;

/// Finds major aspects between body positions.
pub struct AspectCalculator {
    orbs: Orbs,
}

impl AspectCalculator {
    /// Calculator using the default orbs
    pub fn new() -> Self {
        Self::with_orbs(Orbs::DEFAULT)
    }

    /// Create a calculator with custom orbs
    pub fn with_orbs(orbs: Orbs) -> Self {
        Self { orbs }
    }

    /// Orbs in use
    pub fn orbs(&self) -> &Orbs {
        &self.orbs
    }

    /// Aspects for every unordered pair of distinct positions, in input
    /// pair order.
    pub fn calculate_aspects(&self, positions: &[Position]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                if p1.body == p2.body {
                    continue;
                }
                if let Some(aspect) = self.aspect_between(p1, p2) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspect between two positions, if any type matches
    pub fn aspect_between(&self, p1: &Position, p2: &Position) -> Option<Aspect> {
        let separation = angular_separation(p1.ecliptic_longitude, p2.ecliptic_longitude);
        let (aspect_type, orb) = self.classify(separation)?;

        Some(Aspect {
            body1: p1.body,
            body2: p2.body,
            aspect_type,
            angle: separation,
            orb,
            applying: false,
        })
    }

    /// First aspect type (in priority order) whose orb covers `separation`.
    ///
    /// Not the tightest match: a separation inside two overlapping orbs
    /// takes the earlier type.
    pub fn classify(&self, separation: f64) -> Option<(AspectType, f64)> {
        AspectType::ALL.iter().find_map(|&aspect| {
            let deviation = (separation - aspect.angle()).abs();
            (deviation <= self.orbs.max_orb(aspect)).then_some((aspect, deviation))
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Aspect between two positions under the given orbs.
pub fn aspect_between(p1: &Position, p2: &Position, orbs: &Orbs) -> Option<Aspect> {
    AspectCalculator::with_orbs(*orbs).aspect_between(p1, p2)
}
