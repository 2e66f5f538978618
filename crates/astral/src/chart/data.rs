use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::settings::ChartSettings;
use crate::ephemeris::{calculate_bodies, CelestialBody, Position};
use crate::error::AstralError;
use crate::houses::HouseCusps;
use crate::zodiac::{longitude_to_zodiac, ZodiacPosition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A computed chart: body positions, houses and aspects for one instant
/// and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub date_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form place label, as supplied by the caller
    pub location: String,
    pub positions: Vec<Position>,
    pub houses: HouseCusps,
    pub aspects: Vec<Aspect>,
}

impl Chart {
    /// Compute positions, houses and aspects for one instant and place
    pub fn calculate(
        date_time: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        location: impl Into<String>,
        settings: &ChartSettings,
    ) -> Self {
        let positions = calculate_bodies(&settings.bodies, &date_time);
        let houses = settings.house_system.compute(latitude, longitude, &date_time);
        let aspects = AspectCalculator::with_orbs(settings.orbs).calculate_aspects(&positions);

        log::debug!(
            "Chart for {} at ({:.4}, {:.4}): {} bodies, {} system, {} aspects",
            date_time,
            latitude,
            longitude,
            positions.len(),
            settings.house_system,
            aspects.len()
        );

        Self {
            date_time,
            latitude,
            longitude,
            location: location.into(),
            positions,
            houses,
            aspects,
        }
    }

    /// Position of a body, if it was placed in this chart
    pub fn position(&self, body: CelestialBody) -> Option<&Position> {
        self.positions.iter().find(|pos| pos.body == body)
    }

    /// Zodiac placement of a body in this chart
    pub fn zodiac_position(&self, body: CelestialBody) -> Option<ZodiacPosition> {
        self.position(body).map(|pos| longitude_to_zodiac(pos.ecliptic_longitude))
    }

    /// House number (1..=12) of a body placed in this chart.
    pub fn body_in_house(&self, body: CelestialBody) -> Option<u8> {
        self.position(body).map(|pos| self.houses.house_of(pos.ecliptic_longitude))
    }

    /// Aspects that involve `body`
    pub fn aspects_for(&self, body: CelestialBody) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.involves(body)).collect()
    }

    /// Render the chart as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, AstralError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::HouseSystem;
    use chrono::TimeZone;

    fn paris_chart() -> Chart {
        let dt = Utc.with_ymd_and_hms(1990, 6, 15, 12, 0, 0).unwrap();
        Chart::calculate(dt, 48.8566, 2.3522, "Paris", &ChartSettings::default())
    }

    #[test]
    fn test_positions_follow_settings_order() {
        let chart = paris_chart();
        let bodies: Vec<_> = chart.positions.iter().map(|p| p.body).collect();
        assert_eq!(bodies, CelestialBody::ALL.to_vec());
        assert_eq!(chart.houses.system, HouseSystem::Placidus);
    }

    #[test]
    fn test_queries_on_missing_body() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let settings =
            ChartSettings::default().with_bodies(&[CelestialBody::Sun, CelestialBody::Moon]);
        let chart = Chart::calculate(dt, 0.0, 0.0, "", &settings);

        assert!(chart.position(CelestialBody::Mars).is_none());
        assert!(chart.zodiac_position(CelestialBody::Mars).is_none());
        assert!(chart.body_in_house(CelestialBody::Mars).is_none());
        assert!(chart.aspects_for(CelestialBody::Mars).is_empty());

        let house = chart.body_in_house(CelestialBody::Sun).unwrap();
        assert!((1..=12).contains(&house));
    }

    #[test]
    fn test_aspects_for_involves_body() {
        let chart = paris_chart();
        for aspect in chart.aspects_for(CelestialBody::Sun) {
            assert!(aspect.body1 == CelestialBody::Sun || aspect.body2 == CelestialBody::Sun);
        }
    }

    #[test]
    fn test_to_json() {
        let json = paris_chart().to_json().unwrap();
        assert!(json.contains("\"location\": \"Paris\""));
        assert!(json.contains("\"placidus\""));
    }
}
