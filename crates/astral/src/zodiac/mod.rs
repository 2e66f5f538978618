//! Tropical zodiac placement of ecliptic longitudes.

pub mod position;
pub mod signs;

pub use position::{longitude_to_zodiac, ZodiacPosition};
pub use signs::{Element, Modality, ZodiacSign};
