//! Major aspects between placed bodies.

pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, aspect_between, AspectCalculator};
pub use types::{Aspect, AspectType, Orbs};
