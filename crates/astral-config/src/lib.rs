use astral::aspects::{AspectType, Orbs};
use astral::chart::ChartSettings;
use astral::ephemeris::CelestialBody;
use astral::houses::HouseSystem;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_PATHS: [&str; 2] = ["configs/astral.toml", "../../configs/astral.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
struct OrbOverridesToml {
    #[serde(default)]
    conjunction: Option<f64>,
    #[serde(default)]
    sextile: Option<f64>,
    #[serde(default)]
    square: Option<f64>,
    #[serde(default)]
    trine: Option<f64>,
    #[serde(default)]
    opposition: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default = "default_orb_preset")]
    orb_preset: String,
    #[serde(default)]
    bodies: Option<Vec<String>>,
    #[serde(default)]
    orbs: OrbOverridesToml,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_orb_preset() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
}

/// Try the usual relative locations of `configs/astral.toml`, from the
/// workspace root or from a crate directory.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::info!("Loaded chart configuration from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load astral.toml from {:?}", CONFIG_PATHS);
}

/// Parse config text into chart settings. A missing `[chart]` table yields
/// the defaults.
pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse astral.toml: {e}"))?;
    let Some(chart) = root.chart else {
        return Ok(ChartSettings::default());
    };

    let house_system: HouseSystem = chart
        .house_system
        .parse()
        .map_err(|e| anyhow::anyhow!("chart.house_system: {e}"))?;

    let mut orbs = Orbs::preset(&chart.orb_preset)
        .map_err(|e| anyhow::anyhow!("chart.orb_preset: {e}"))?;
    let overrides = [
        (AspectType::Conjunction, chart.orbs.conjunction),
        (AspectType::Sextile, chart.orbs.sextile),
        (AspectType::Square, chart.orbs.square),
        (AspectType::Trine, chart.orbs.trine),
        (AspectType::Opposition, chart.orbs.opposition),
    ];
    for (aspect, value) in overrides {
        if let Some(degrees) = value {
            if !(0.0..=180.0).contains(&degrees) {
                anyhow::bail!(
                    "chart.orbs.{}: {} is outside 0..=180 degrees",
                    aspect.name().to_lowercase(),
                    degrees
                );
            }
            orbs = orbs.with(aspect, degrees);
        }
    }

    let bodies = match chart.bodies {
        Some(names) => names
            .iter()
            .map(|name| {
                name.parse::<CelestialBody>()
                    .map_err(|e| anyhow::anyhow!("chart.bodies: {e}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?,
        None => CelestialBody::ALL.to_vec(),
    };

    Ok(ChartSettings {
        house_system,
        orbs,
        bodies,
    })
}

/// Settings from `configs/astral.toml`.
pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    parse_chart_settings(&read_config_toml_text()?)
}

/// Settings from an explicit file.
pub fn load_chart_settings_from(path: impl AsRef<Path>) -> anyhow::Result<ChartSettings> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    log::info!("Loaded chart configuration from {}", path.display());
    parse_chart_settings(&text)
}
