use super::{HouseCusps, HouseSystem};
use crate::angles::ChartAngles;
use crate::time::normalize_angle;

/// Equal houses: each cusp sits 30° past the previous, starting at the
/// Ascendant.
pub fn equal_cusps(angles: &ChartAngles) -> HouseCusps {
    let cusps = std::array::from_fn(|i| normalize_angle(angles.ascendant + 30.0 * i as f64));
    HouseCusps::from_parts(HouseSystem::Equal, cusps, angles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_spacing() {
        let angles = ChartAngles::from_sidereal_time(200.0, 40.0);
        let cusps = equal_cusps(&angles);
        for (i, house) in cusps.houses.iter().enumerate() {
            assert_eq!(house.number as usize, i + 1);
            assert_eq!(house.cusp, normalize_angle(angles.ascendant + 30.0 * i as f64));
        }
        assert_eq!(cusps.system, HouseSystem::Equal);
    }
}
