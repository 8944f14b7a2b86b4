//! Cleanup system: prunes off-screen shooter entities and dead particles.

use hecs::{Entity, World};

use solar_core::components::{Enemy, Particle, PowerUp, Projectile};
use solar_core::constants::{RAIDEN_ENEMY_PRUNE_MARGIN, RAIDEN_PRUNE_MARGIN};
use solar_core::enums::ProjectileOwner;
use solar_core::types::{Playfield, Position};

/// Remove everything that has left the playfield for good.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, playfield: Playfield, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let bottom = playfield.height + RAIDEN_PRUNE_MARGIN;

    for (entity, (pos, shot)) in world.query_mut::<(&Position, &Projectile)>() {
        let gone = match shot.owner {
            ProjectileOwner::Player => pos.y < -RAIDEN_PRUNE_MARGIN,
            ProjectileOwner::Enemy => pos.y > bottom,
        };
        if gone {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _pickup)) in world.query_mut::<(&Position, &PowerUp)>() {
        if pos.y > bottom {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if pos.y > playfield.height + RAIDEN_ENEMY_PRUNE_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use solar_core::enums::{EnemyKind, ParticleKind, PowerUpKind};
    use solar_core::types::Velocity;

    use super::*;

    #[test]
    fn test_prunes_by_owner_and_kind() {
        let field = Playfield::new(800.0, 600.0);
        let mut world = World::new();
        let shot = |owner, y| {
            (
                Projectile {
                    id: 0,
                    owner,
                    damage: 1.0,
                },
                Position::new(100.0, y),
                Velocity::default(),
            )
        };
        let keep_player = world.spawn(shot(ProjectileOwner::Player, -40.0));
        world.spawn(shot(ProjectileOwner::Player, -60.0));
        let keep_enemy = world.spawn(shot(ProjectileOwner::Enemy, 640.0));
        world.spawn(shot(ProjectileOwner::Enemy, 660.0));
        world.spawn((
            PowerUp {
                id: 1,
                kind: PowerUpKind::Health,
            },
            Position::new(0.0, 700.0),
        ));
        let keep_enemy_ship = world.spawn((
            Enemy {
                id: 2,
                kind: EnemyKind::Scout,
                hp: 1,
                max_hp: 1,
                width: 30.0,
                height: 30.0,
                cooldown: 0,
            },
            Position::new(0.0, 690.0),
        ));
        world.spawn((
            Particle {
                id: 3,
                kind: ParticleKind::Spark,
                life: 0.0,
                max_life: 50.0,
                size: 2.0,
            },
            Position::default(),
        ));

        let mut buffer = Vec::new();
        run(&mut world, field, &mut buffer);

        assert_eq!(world.len(), 3);
        assert!(world.contains(keep_player));
        assert!(world.contains(keep_enemy));
        assert!(world.contains(keep_enemy_ship));
    }
}
