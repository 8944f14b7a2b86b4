//! Enemy behaviour: movement, interceptor weaving and heavy gunfire.

use hecs::World;

use solar_core::components::Enemy;
use solar_core::constants::*;
use solar_core::enums::{EnemyKind, ProjectileOwner};
use solar_core::types::{Playfield, Position, Velocity};

use super::spawn;

/// Move every enemy, bounce interceptors and let heavies fire at `player`.
/// Returns the number of shots fired.
pub fn run(world: &mut World, next_id: &mut u32, player: Position, playfield: Playfield) -> usize {
    let mut shots: Vec<(Position, Velocity)> = Vec::new();

    for (_entity, (pos, vel, enemy)) in world.query_mut::<(&mut Position, &mut Velocity, &mut Enemy)>() {
        pos.x += vel.x;
        pos.y += vel.y;

        if enemy.kind == EnemyKind::Interceptor
            && (pos.x < INTERCEPTOR_BOUNCE_MARGIN || pos.x > playfield.width - INTERCEPTOR_BOUNCE_MARGIN)
        {
            vel.x = -vel.x;
        }

        enemy.cooldown -= 1;
        if enemy.kind == EnemyKind::Heavy
            && enemy.cooldown <= 0
            && pos.y > 0.0
            && pos.y < playfield.height - HEAVY_FIRE_FLOOR
        {
            let aim = pos.bearing_to(&player);
            shots.push((
                Position::new(pos.x, pos.y + 20.0),
                Velocity::new(aim.cos() * HEAVY_SHOT_SPEED, aim.sin() * HEAVY_SHOT_SPEED),
            ));
            enemy.cooldown = HEAVY_FIRE_INTERVAL;
        }
    }

    let fired = shots.len();
    for (pos, vel) in shots {
        spawn::spawn_projectile(world, next_id, ProjectileOwner::Enemy, pos, vel, HEAVY_SHOT_DAMAGE);
    }
    fired
}
