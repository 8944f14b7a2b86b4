//! Kinematics for projectiles, pickups and particles.

use hecs::World;

use solar_core::components::{Particle, PowerUp, Projectile};
use solar_core::types::{Position, Velocity};

pub fn move_projectiles(world: &mut World) {
    for (_entity, (pos, vel, _shot)) in world.query_mut::<(&mut Position, &Velocity, &Projectile)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

pub fn move_powerups(world: &mut World) {
    for (_entity, (pos, vel, _pickup)) in world.query_mut::<(&mut Position, &Velocity, &PowerUp)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Move particles and burn one tick of life.
pub fn update_particles(world: &mut World) {
    for (_entity, (pos, vel, particle)) in world.query_mut::<(&mut Position, &Velocity, &mut Particle)>() {
        pos.x += vel.x;
        pos.y += vel.y;
        particle.life -= 1.0;
    }
}
