//! Keplerian orbital elements at J2000.0 with linear secular rates.
//!
//! Values follow Paul Schlyter's "How to compute planetary positions" plus
//! JPL approximate elements for Pluto, Chiron and the asteroids. The model
//! is a single linear term per element, so accuracy degrades away from the
//! current centuries.

use super::types::CelestialBody;
use crate::time::normalize_angle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Orbital elements at epoch and their rates of change per day.
///
/// Angles are in degrees, the semi-major axis in AU (Earth radii for the
/// Moon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub ascending_node: f64,
    pub ascending_node_rate: f64,
    pub inclination: f64,
    pub inclination_rate: f64,
    pub perihelion_argument: f64,
    pub perihelion_argument_rate: f64,
    pub semi_major_axis: f64,
    pub semi_major_axis_rate: f64,
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    pub mean_anomaly: f64,
    /// Mean daily motion
    pub mean_anomaly_rate: f64,
}

/// Elements evaluated at a particular day number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedElements {
    pub ascending_node: f64,
    pub inclination: f64,
    pub perihelion_argument: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    /// Advance every element linearly to day `d` since J2000.0.
    ///
    /// The angular elements (node, perihelion argument, mean anomaly) are
    /// wrapped into `[0, 360)`.
    pub fn at_day(&self, d: f64) -> ComputedElements {
        ComputedElements {
            ascending_node: normalize_angle(self.ascending_node + self.ascending_node_rate * d),
            inclination: self.inclination + self.inclination_rate * d,
            perihelion_argument: normalize_angle(
                self.perihelion_argument + self.perihelion_argument_rate * d,
            ),
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * d,
            eccentricity: self.eccentricity + self.eccentricity_rate * d,
            mean_anomaly: normalize_angle(self.mean_anomaly + self.mean_anomaly_rate * d),
        }
    }
}

/// Build elements from `[value at epoch, rate per day]` pairs.
const fn elements(
    node: [f64; 2],
    inclination: [f64; 2],
    perihelion: [f64; 2],
    axis: [f64; 2],
    eccentricity: [f64; 2],
    mean_anomaly: [f64; 2],
) -> OrbitalElements {
    OrbitalElements {
        ascending_node: node[0],
        ascending_node_rate: node[1],
        inclination: inclination[0],
        inclination_rate: inclination[1],
        perihelion_argument: perihelion[0],
        perihelion_argument_rate: perihelion[1],
        semi_major_axis: axis[0],
        semi_major_axis_rate: axis[1],
        eccentricity: eccentricity[0],
        eccentricity_rate: eccentricity[1],
        mean_anomaly: mean_anomaly[0],
        mean_anomaly_rate: mean_anomaly[1],
    }
}

// Rows: N, i, w, a, e, M, each as [value, rate]
const ELEMENT_TABLE: &[(CelestialBody, OrbitalElements)] = &[
    // Earth's orbit as seen from the Sun
    (
        CelestialBody::Sun,
        elements(
            [0.0, 0.0],
            [0.0, 0.0],
            [282.9404, 4.70935e-5],
            [1.0, 0.0],
            [0.016709, -1.151e-9],
            [356.0470, 0.9856002585],
        ),
    ),
    // Semi-major axis in Earth radii
    (
        CelestialBody::Moon,
        elements(
            [125.1228, -0.0529538083],
            [5.1454, 0.0],
            [318.0634, 0.1643573223],
            [60.2666, 0.0],
            [0.054900, 0.0],
            [115.3654, 13.0649929509],
        ),
    ),
    (
        CelestialBody::Mercury,
        elements(
            [48.3313, 3.24587e-5],
            [7.0047, 5.00e-8],
            [29.1241, 1.01444e-5],
            [0.387098, 0.0],
            [0.205635, 5.59e-10],
            [168.6562, 4.0923344368],
        ),
    ),
    (
        CelestialBody::Venus,
        elements(
            [76.6799, 2.46590e-5],
            [3.3946, 2.75e-8],
            [54.8910, 1.38374e-5],
            [0.723330, 0.0],
            [0.006773, -1.302e-9],
            [48.0052, 1.6021302244],
        ),
    ),
    (
        CelestialBody::Mars,
        elements(
            [49.5574, 2.11081e-5],
            [1.8497, -1.78e-8],
            [286.5016, 2.92961e-5],
            [1.523688, 0.0],
            [0.093405, 2.516e-9],
            [18.6021, 0.5240207766],
        ),
    ),
    (
        CelestialBody::Jupiter,
        elements(
            [100.4542, 2.76854e-5],
            [1.3030, -1.557e-7],
            [273.8777, 1.64505e-5],
            [5.20256, 0.0],
            [0.048498, 4.469e-9],
            [19.8950, 0.0830853001],
        ),
    ),
    (
        CelestialBody::Saturn,
        elements(
            [113.6634, 2.38980e-5],
            [2.4886, -1.081e-7],
            [339.3939, 2.97661e-5],
            [9.55475, 0.0],
            [0.055546, -9.499e-9],
            [316.9670, 0.0334442282],
        ),
    ),
    (
        CelestialBody::Uranus,
        elements(
            [74.0005, 1.3978e-5],
            [0.7733, 1.9e-8],
            [96.6612, 3.0565e-5],
            [19.18171, -1.55e-8],
            [0.047318, 7.45e-9],
            [142.5905, 0.011725806],
        ),
    ),
    (
        CelestialBody::Neptune,
        elements(
            [131.7806, 3.0173e-5],
            [1.7700, -2.55e-7],
            [272.8461, -6.027e-6],
            [30.05826, 3.313e-8],
            [0.008606, 2.15e-9],
            [260.2471, 0.005995147],
        ),
    ),
    (
        CelestialBody::Pluto,
        elements(
            [110.30347, 0.0],
            [17.14175, 0.0],
            [224.06676, 0.0],
            [39.48168677, 0.0],
            [0.24880766, 0.0],
            [238.92881, 0.003971354],
        ),
    ),
    (
        CelestialBody::Chiron,
        elements(
            [209.3851, 0.0],
            [6.9311, 0.0],
            [339.5574, 0.0],
            [13.6697, 0.0],
            [0.3792, 0.0],
            [72.3100, 0.01953663],
        ),
    ),
    (
        CelestialBody::Ceres,
        elements(
            [80.3932, 0.0],
            [10.5935, 0.0],
            [73.5968, 0.0],
            [2.7658, 0.0],
            [0.0758, 0.0],
            [113.4104, 0.21408169],
        ),
    ),
    (
        CelestialBody::Pallas,
        elements(
            [173.0962, 0.0],
            [34.8413, 0.0],
            [310.0474, 0.0],
            [2.7716, 0.0],
            [0.2313, 0.0],
            [78.2287, 0.21343011],
        ),
    ),
    (
        CelestialBody::Juno,
        elements(
            [169.8712, 0.0],
            [12.9717, 0.0],
            [248.4100, 0.0],
            [2.6691, 0.0],
            [0.2562, 0.0],
            [18.2795, 0.22610627],
        ),
    ),
    (
        CelestialBody::Vesta,
        elements(
            [103.8513, 0.0],
            [7.1340, 0.0],
            [151.1983, 0.0],
            [2.3615, 0.0],
            [0.0887, 0.0],
            [169.1467, 0.27154186],
        ),
    ),
];

lazy_static::lazy_static! {
    /// Process-wide element table; the nodes have no entry of their own.
    pub static ref ORBITAL_ELEMENTS: HashMap<CelestialBody, OrbitalElements> =
        ELEMENT_TABLE.iter().copied().collect();
}

/// Elements for `body`, if the table has them.
pub fn elements_for(body: CelestialBody) -> Option<&'static OrbitalElements> {
    ORBITAL_ELEMENTS.get(&body)
}
