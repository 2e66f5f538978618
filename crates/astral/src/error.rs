use thiserror::Error;

/// Errors raised by the textual and serialization surfaces of the engine.
///
/// The numeric routines themselves never fail; these cover parsing names
/// supplied by callers and rendering charts for collaborators.
#[derive(Error, Debug)]
pub enum AstralError {
    #[error("Unknown celestial body: {name}. Valid bodies: {valid:?}")]
    UnknownBody { name: String, valid: Vec<String> },
    #[error("Invalid house system: {name}. Valid systems: {valid:?}")]
    UnknownHouseSystem { name: String, valid: Vec<String> },
    #[error("Unknown aspect type: {name}. Valid aspects: {valid:?}")]
    UnknownAspect { name: String, valid: Vec<String> },
    #[error("Unknown orb preset: {name}. Valid presets: {valid:?}")]
    UnknownOrbPreset { name: String, valid: Vec<String> },
    #[error("Julian Day {jd} does not map to a representable civil date")]
    InvalidJulianDay { jd: f64 },
    #[error("Failed to serialize chart: {0}")]
    Serialization(#[from] serde_json::Error),
}
