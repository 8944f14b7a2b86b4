//! Solar system setup: planets, the decorative belt and the starfield.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{BeltAsteroid, CelestialBody, Star};
use solar_core::constants::*;

/// (name, colour, radius, orbit radius, orbit speed)
const BODY_TABLE: [(&str, &str, f64, f64, f64); 14] = [
    ("Sun", "#FDB813", 60.0, 0.0, 0.0),
    ("Mercury", "#A5A5A5", 8.0, 140.0, 0.02),
    ("Venus", "#E3BB76", 12.0, 220.0, 0.015),
    ("Earth", "#22A6B3", 13.0, 320.0, 0.01),
    ("Mars", "#EB4D4B", 10.0, 420.0, 0.008),
    ("Ceres", "#8c8c8c", 4.0, 520.0, 0.007),
    ("Jupiter", "#D980FA", 35.0, 680.0, 0.004),
    ("Saturn", "#F7D794", 30.0, 950.0, 0.003),
    ("Uranus", "#7ED6DF", 20.0, 1200.0, 0.002),
    ("Neptune", "#30336B", 19.0, 1400.0, 0.0015),
    ("Pluto", "#D4A373", 5.0, 1600.0, 0.0012),
    ("Haumea", "#EEEEEE", 5.0, 1800.0, 0.001),
    ("Makemake", "#BC6C25", 5.0, 2000.0, 0.0009),
    ("Eris", "#F4F4F9", 6.0, 2200.0, 0.0008),
];

/// Build the body table with random starting angles. The Sun stays at 0.
pub fn initial_bodies(rng: &mut ChaCha8Rng) -> Vec<CelestialBody> {
    BODY_TABLE
        .iter()
        .map(|&(name, color, radius, orbit_radius, orbit_speed)| CelestialBody {
            name: name.to_owned(),
            color: color.to_owned(),
            radius,
            orbit_radius,
            orbit_speed,
            angle: if orbit_radius > 0.0 {
                rng.gen_range(0.0..TAU)
            } else {
                0.0
            },
        })
        .collect()
}

/// Generate the main belt between Mars and Jupiter.
pub fn generate_belt(rng: &mut ChaCha8Rng) -> Vec<BeltAsteroid> {
    (0..BELT_ASTEROID_COUNT)
        .map(|_| {
            let orbit_radius = rng.gen_range(BELT_INNER_RADIUS..BELT_OUTER_RADIUS);
            let angle = rng.gen_range(0.0..TAU);
            let points = rng.gen_range(5..=9);
            BeltAsteroid {
                x: angle.cos() * orbit_radius,
                y: angle.sin() * orbit_radius,
                size: rng.gen_range(1.5..4.5),
                orbit_radius,
                orbit_speed: rng.gen_range(0.003..0.007),
                angle,
                rotation: rng.gen_range(0.0..TAU),
                rotation_speed: rng.gen_range(-0.05..0.05),
                shape: (0..points).map(|_| rng.gen_range(0.7..1.3)).collect(),
            }
        })
        .collect()
}

/// Generate the static background starfield.
pub fn generate_starfield(rng: &mut ChaCha8Rng) -> Vec<Star> {
    let half = STARFIELD_EXTENT / 2.0;
    (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.gen_range(-half..half),
            y: rng.gen_range(-half..half),
            size: rng.gen_range(0.5..2.5),
            opacity: rng.gen_range(0.0..1.0),
        })
        .collect()
}

/// Advance every body one tick along its orbit.
pub fn advance_bodies(bodies: &mut [CelestialBody]) {
    for body in bodies {
        body.angle += body.orbit_speed;
    }
}

/// Advance the belt: orbit and spin.
pub fn advance_belt(belt: &mut [BeltAsteroid]) {
    for rock in belt {
        rock.angle += rock.orbit_speed;
        rock.rotation += rock.rotation_speed;
        rock.x = rock.angle.cos() * rock.orbit_radius;
        rock.y = rock.angle.sin() * rock.orbit_radius;
    }
}
