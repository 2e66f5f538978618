pub mod calculator;
pub mod elements;
pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod types;

pub use calculator::{
    calculate, calculate_all, calculate_at_day, calculate_bodies, is_retrograde,
    is_retrograde_motion, planet_position, sun_position, RETROGRADE_WINDOW_DAYS,
};
pub use elements::{elements_for, ComputedElements, OrbitalElements, ORBITAL_ELEMENTS};
pub use kepler::{solve_kepler, OrbitPoint};
pub use moon::{moon_phase, moon_position, MoonPhase};
pub use nodes::{north_node, south_node, true_north_node};
pub use types::{BodyModel, CelestialBody, Position, RETROGRADE_SYMBOL};
