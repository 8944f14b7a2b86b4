//! Asteroid and bullet spawn factories for the arcade world.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{ArcadeAsteroid, ArcadeBullet, Outline, Spin};
use solar_core::constants::*;
use solar_core::enums::AsteroidTier;
use solar_core::types::{Playfield, Position, Velocity};

/// Rejection attempts before accepting a point inside the safe zone.
/// Only matters for playfields smaller than the zone itself.
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Spawn `count` large asteroids away from the playfield centre.
pub fn spawn_asteroids(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    count: u32,
    playfield: Playfield,
) {
    for _ in 0..count {
        let pos = random_spawn_point(rng, playfield);
        spawn_asteroid(world, rng, next_id, pos, AsteroidTier::Large);
    }
}

/// Uniform point on the playfield outside the central safe square.
pub fn random_spawn_point(rng: &mut ChaCha8Rng, playfield: Playfield) -> Position {
    let center = playfield.center();
    let mut pos = center;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        pos = Position::new(
            rng.gen_range(0.0..playfield.width.max(f64::EPSILON)),
            rng.gen_range(0.0..playfield.height.max(f64::EPSILON)),
        );
        if !in_safe_zone(pos, center) {
            break;
        }
    }
    pos
}

pub fn in_safe_zone(pos: Position, center: Position) -> bool {
    (pos.x - center.x).abs() < ASTEROID_SAFE_ZONE && (pos.y - center.y).abs() < ASTEROID_SAFE_ZONE
}

/// Spawn one asteroid of `tier` at `pos`, drifting in a random direction.
pub fn spawn_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    pos: Position,
    tier: AsteroidTier,
) -> Entity {
    let points = rng.gen_range(7..=11);
    let shape = (0..points).map(|_| rng.gen_range(0.8..1.2)).collect();
    let heading = rng.gen_range(0.0..TAU);
    let speed = tier.speed();

    let id = *next_id;
    *next_id += 1;

    world.spawn((
        ArcadeAsteroid {
            id,
            tier,
            size: tier.size(),
        },
        pos,
        Velocity::new(heading.cos() * speed, heading.sin() * speed),
        Spin {
            rotation: rng.gen_range(0.0..TAU),
            rotation_speed: (rng.gen::<f64>() - 0.5) * 0.1,
        },
        Outline { shape },
    ))
}

/// Spawn a bullet at the ship's nose, inheriting the ship's velocity.
pub fn spawn_bullet(
    world: &mut World,
    next_id: &mut u32,
    ship_pos: Position,
    ship_vel: Velocity,
    rotation: f64,
) -> Entity {
    let (sin, cos) = rotation.sin_cos();
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        ArcadeBullet {
            id,
            life: BULLET_LIFE_TICKS,
        },
        Position::new(
            ship_pos.x + cos * BULLET_NOSE_OFFSET,
            ship_pos.y + sin * BULLET_NOSE_OFFSET,
        ),
        Velocity::new(
            cos * BULLET_MUZZLE_SPEED + ship_vel.x,
            sin * BULLET_MUZZLE_SPEED + ship_vel.y,
        ),
    ))
}
