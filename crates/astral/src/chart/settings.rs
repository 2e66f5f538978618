use crate::aspects::Orbs;
use crate::ephemeris::CelestialBody;
use crate::houses::HouseSystem;
use serde::{Deserialize, Serialize};

/// What to compute for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub house_system: HouseSystem,
    pub orbs: Orbs,
    /// Bodies to place, in output order
    pub bodies: Vec<CelestialBody>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            orbs: Orbs::DEFAULT,
            bodies: CelestialBody::ALL.to_vec(),
        }
    }
}

impl ChartSettings {
    /// Copy with a different house system
    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    /// Copy with different orbs
    pub fn with_orbs(mut self, orbs: Orbs) -> Self {
        self.orbs = orbs;
        self
    }

    /// Copy computing only `bodies`, in that order
    pub fn with_bodies(mut self, bodies: &[CelestialBody]) -> Self {
        self.bodies = bodies.to_vec();
        self
    }
}
