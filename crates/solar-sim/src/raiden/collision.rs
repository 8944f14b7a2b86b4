//! Shooter collision passes. All tests are axis-aligned boxes except
//! pickups, which use a radius.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{Enemy, PowerUp, Projectile, RaidenPlayer};
use solar_core::constants::*;
use solar_core::enums::{ParticleKind, ProjectileOwner};
use solar_core::types::Position;

use super::{player, spawn};

/// Tally of one tick's collisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionTally {
    pub hits: u32,
    pub kills: u32,
    pub score: u32,
    pub damage_taken: u32,
    pub pickups: u32,
}

fn overlaps(a: Position, b: Position, half_w: f64, half_h: f64) -> bool {
    (a.x - b.x).abs() < half_w && (a.y - b.y).abs() < half_h
}

/// Player collects any pickup within `POWERUP_PICKUP_RADIUS`.
pub fn collect_powerups(
    world: &mut World,
    player: &mut RaidenPlayer,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();
    let at = Position::new(player.x, player.y);
    let mut collected = 0;
    for (entity, (pos, pickup)) in world.query_mut::<(&Position, &PowerUp)>() {
        if at.distance_to(pos) < POWERUP_PICKUP_RADIUS {
            player::apply_powerup(player, pickup.kind);
            despawn_buffer.push(entity);
            collected += 1;
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    collected
}

/// Player bullets against enemies. A bullet is spent on its first hit.
pub fn player_bullets_vs_enemies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    tally: &mut CollisionTally,
) {
    despawn_buffer.clear();

    let mut enemies: Vec<(Entity, Position, Enemy)> = world
        .query_mut::<(&Position, &Enemy)>()
        .into_iter()
        .map(|(e, (pos, enemy))| (e, *pos, *enemy))
        .collect();

    let mut sparks: Vec<Position> = Vec::new();
    let mut wrecks: Vec<Position> = Vec::new();

    for (bullet_entity, (pos, shot)) in world.query_mut::<(&Position, &Projectile)>() {
        if shot.owner != ProjectileOwner::Player {
            continue;
        }
        let target = enemies.iter_mut().find(|(_, enemy_pos, enemy)| {
            enemy.hp > 0
                && overlaps(
                    *pos,
                    *enemy_pos,
                    enemy.width / 2.0 + ENEMY_HITBOX_PADDING,
                    enemy.height / 2.0 + ENEMY_HITBOX_PADDING,
                )
        });
        let Some((enemy_entity, enemy_pos, enemy)) = target else {
            continue;
        };

        despawn_buffer.push(bullet_entity);
        tally.hits += 1;
        sparks.push(*pos);

        enemy.hp -= shot.damage.ceil() as i32;
        if enemy.hp <= 0 {
            despawn_buffer.push(*enemy_entity);
            tally.kills += 1;
            tally.score += enemy.kind.score();
            wrecks.push(*enemy_pos);
        }
    }

    // Write back damage on survivors.
    for (entity, _, state) in &enemies {
        if state.hp > 0 {
            if let Ok(mut enemy) = world.get::<&mut Enemy>(*entity) {
                enemy.hp = state.hp;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for pos in sparks {
        spawn::spawn_particles(world, rng, next_id, pos, ParticleKind::Spark, PARTICLES_PER_HIT);
    }
    for pos in wrecks {
        spawn::spawn_particles(world, rng, next_id, pos, ParticleKind::Explosion, PARTICLES_PER_KILL);
        if rng.gen_bool(POWERUP_DROP_CHANCE) {
            spawn::spawn_powerup(world, rng, next_id, pos);
        }
    }
}

/// Enemy hulls and enemy bullets against the player.
pub fn hazards_vs_player(
    world: &mut World,
    player: &mut RaidenPlayer,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    tally: &mut CollisionTally,
) {
    despawn_buffer.clear();
    let at = Position::new(player.x, player.y);
    let mut damage: Vec<f64> = Vec::new();

    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if overlaps(
            at,
            *pos,
            PLAYER_HULL_HALF + enemy.width / 2.0,
            PLAYER_HULL_HALF + enemy.height / 2.0,
        ) {
            damage.push(CONTACT_DAMAGE);
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, shot)) in world.query_mut::<(&Position, &Projectile)>() {
        if shot.owner == ProjectileOwner::Enemy
            && overlaps(at, *pos, PLAYER_BULLET_HITBOX, PLAYER_BULLET_HITBOX)
        {
            damage.push(shot.damage);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for amount in damage {
        player::apply_damage(player, amount);
        tally.damage_taken += 1;
        spawn::spawn_particles(world, rng, next_id, at, ParticleKind::Damage, PARTICLES_PER_DAMAGE);
    }
}
