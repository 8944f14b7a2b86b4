//! Spawn factories for shooter entities.

use std::f64::consts::TAU;

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{Enemy, Particle, PowerUp, Projectile};
use solar_core::constants::*;
use solar_core::enums::*;
use solar_core::types::{Playfield, Position, Velocity};

const ENEMY_ROSTER: [EnemyKind; 4] = [
    EnemyKind::Scout,
    EnemyKind::Scout,
    EnemyKind::Interceptor,
    EnemyKind::Heavy,
];

const POWERUP_KINDS: [PowerUpKind; 4] = [
    PowerUpKind::Health,
    PowerUpKind::Spread,
    PowerUpKind::Speed,
    PowerUpKind::Shield,
];

fn take_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}

/// Pick an enemy kind; scouts are twice as common as the others.
pub fn pick_enemy_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    *ENEMY_ROSTER.choose(rng).unwrap_or(&EnemyKind::Scout)
}

/// Spawn an enemy of `kind` just above the top edge.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    kind: EnemyKind,
    playfield: Playfield,
) -> Entity {
    let hi = (playfield.width - RAIDEN_SPAWN_MARGIN).max(RAIDEN_SPAWN_MARGIN + 1.0);
    let x = rng.gen_range(RAIDEN_SPAWN_MARGIN..hi);

    let (hp, size, vel) = match kind {
        EnemyKind::Scout => (1, 30.0, Velocity::new(0.0, 5.0)),
        EnemyKind::Interceptor => {
            let vx = if rng.gen_bool(0.5) { 2.0 } else { -2.0 };
            (2, 30.0, Velocity::new(vx, 2.5))
        }
        EnemyKind::Heavy => (5, 50.0, Velocity::new(0.0, 1.0)),
    };

    world.spawn((
        Enemy {
            id: take_id(next_id),
            kind,
            hp,
            max_hp: hp,
            width: size,
            height: size,
            cooldown: 0,
        },
        Position::new(x, RAIDEN_SPAWN_Y),
        vel,
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    owner: ProjectileOwner,
    pos: Position,
    vel: Velocity,
    damage: f64,
) -> Entity {
    world.spawn((
        Projectile {
            id: take_id(next_id),
            owner,
            damage,
        },
        pos,
        vel,
    ))
}

/// Drop a random pickup at `pos`.
pub fn spawn_powerup(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32, pos: Position) -> Entity {
    let kind = *POWERUP_KINDS.choose(rng).unwrap_or(&PowerUpKind::Health);
    world.spawn((
        PowerUp {
            id: take_id(next_id),
            kind,
        },
        pos,
        Velocity::new(0.0, POWERUP_DRIFT_SPEED),
    ))
}

/// Burst of `count` particles flying out from `pos`.
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    pos: Position,
    kind: ParticleKind,
    count: usize,
) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(0.0..PARTICLE_MAX_SPEED);
        world.spawn((
            Particle {
                id: take_id(next_id),
                kind,
                life: rng.gen_range(PARTICLE_MIN_LIFE..PARTICLE_MAX_LIFE),
                max_life: PARTICLE_MAX_LIFE,
                size: rng.gen_range(2.0..6.0),
            },
            pos,
            Velocity::new(angle.cos() * speed, angle.sin() * speed),
        ));
    }
}
