//! Proximity scanner: which body, if any, is the ship close enough to scan.

use solar_core::components::CelestialBody;
use solar_core::constants::PROXIMITY_SCAN_RANGE;
use solar_core::types::Position;

/// Nearest body whose distance is under `PROXIMITY_SCAN_RANGE + radius`.
pub fn closest_body<'a>(ship: &Position, bodies: &'a [CelestialBody]) -> Option<&'a CelestialBody> {
    bodies
        .iter()
        .map(|body| (body, ship.distance_to(&body.position())))
        .filter(|(body, dist)| *dist < PROXIMITY_SCAN_RANGE + body.radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(body, _)| body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, radius: f64, x: f64) -> CelestialBody {
        CelestialBody {
            name: name.into(),
            color: "#fff".into(),
            radius,
            orbit_radius: x,
            orbit_speed: 0.0,
            angle: 0.0,
        }
    }

    #[test]
    fn test_nearest_in_range_wins() {
        let bodies = [body("Sun", 60.0, 0.0), body("Mercury", 8.0, 140.0)];
        let hit = closest_body(&Position::new(150.0, 0.0), &bodies).unwrap();
        assert_eq!(hit.name, "Mercury");
    }

    #[test]
    fn test_radius_extends_range() {
        let bodies = [body("Jupiter", 35.0, 680.0)];
        assert!(closest_body(&Position::new(680.0 + 330.0, 0.0), &bodies).is_some());
        assert!(closest_body(&Position::new(680.0 + 340.0, 0.0), &bodies).is_none());
    }
}
