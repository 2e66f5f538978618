//! Kepler's equation and the in-plane orbit solution shared by every body.

use super::elements::ComputedElements;

/// Newton-Raphson iteration cap.
pub const KEPLER_MAX_ITERATIONS: usize = 15;

/// Convergence threshold on the eccentric anomaly step, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Solve `M = E - e·sin(E)` for the eccentric anomaly `E`.
///
/// `mean_anomaly` and the result are in radians. Valid for the elliptic,
/// low-eccentricity orbits in the element table; nothing guards against
/// divergence as `e` approaches 1, and hitting the iteration cap only logs
/// a warning.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    let mut ecc_anomaly =
        mean_anomaly + e * mean_anomaly.sin() * (1.0 + e * mean_anomaly.cos());

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly;
        let step = residual / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= step;
        if step.abs() < KEPLER_TOLERANCE {
            return ecc_anomaly;
        }
    }

    log::warn!(
        "Kepler solver stopped after {} iterations (M={:.6} rad, e={:.6})",
        KEPLER_MAX_ITERATIONS,
        mean_anomaly,
        eccentricity
    );
    ecc_anomaly
}

/// Position of a body within its own orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    /// True anomaly in radians
    pub true_anomaly: f64,
    /// Distance from the focus, in the units of the semi-major axis
    pub radius: f64,
}

impl OrbitPoint {
    /// Solve the orbit described by `elements` at their mean anomaly.
    pub fn solve(elements: &ComputedElements) -> Self {
        let a = elements.semi_major_axis;
        let e = elements.eccentricity;
        let ecc_anomaly = solve_kepler(elements.mean_anomaly.to_radians(), e);

        let xv = a * (ecc_anomaly.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        Self {
            true_anomaly: yv.atan2(xv),
            radius: xv.hypot(yv),
        }
    }

    /// Rotate into ecliptic rectangular coordinates using the node,
    /// inclination and argument of perihelion of `elements`.
    pub fn to_ecliptic(&self, elements: &ComputedElements) -> [f64; 3] {
        let node = elements.ascending_node.to_radians();
        let incl = elements.inclination.to_radians();
        let arg = self.true_anomaly + elements.perihelion_argument.to_radians();
        let r = self.radius;

        [
            r * (node.cos() * arg.cos() - node.sin() * arg.sin() * incl.cos()),
            r * (node.sin() * arg.cos() + node.cos() * arg.sin() * incl.cos()),
            r * arg.sin() * incl.sin(),
        ]
    }
}
