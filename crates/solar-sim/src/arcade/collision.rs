//! Arcade collision passes.

use hecs::{Entity, World};

use solar_core::components::{ArcadeAsteroid, ArcadeBullet};
use solar_core::constants::SHIP_HIT_RADIUS;
use solar_core::enums::AsteroidTier;
use solar_core::types::Position;

/// Result of the bullet pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulletHits {
    pub destroyed: u32,
    pub score: u32,
    /// Children to spawn once the pass is over: (position, tier).
    pub fragments: Vec<(Position, AsteroidTier)>,
}

/// Bullets against asteroids. Each live bullet destroys at most one asteroid
/// (the first in iteration order it overlaps). Spent bullets get `life = 0`
/// and destroyed asteroids are pushed to `despawn_buffer`.
pub fn bullets_vs_asteroids(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> BulletHits {
    let mut hits = BulletHits::default();

    let mut asteroids: Vec<(Entity, Position, ArcadeAsteroid, bool)> = world
        .query_mut::<(&Position, &ArcadeAsteroid)>()
        .into_iter()
        .map(|(e, (pos, roid))| (e, *pos, *roid, false))
        .collect();

    for (_entity, (pos, bullet)) in world.query_mut::<(&Position, &mut ArcadeBullet)>() {
        if bullet.life <= 0 {
            continue;
        }
        let hit = asteroids
            .iter_mut()
            .find(|(_, roid_pos, roid, dead)| !*dead && pos.distance_to(roid_pos) < roid.size);
        if let Some((roid_entity, roid_pos, roid, dead)) = hit {
            *dead = true;
            bullet.life = 0;
            despawn_buffer.push(*roid_entity);
            hits.destroyed += 1;
            hits.score += roid.tier.score();
            if let Some(child) = roid.tier.split() {
                hits.fragments.push((*roid_pos, child));
                hits.fragments.push((*roid_pos, child));
            }
        }
    }

    hits
}

/// True when the ship overlaps any asteroid.
pub fn ship_hits_asteroid(world: &mut World, ship: Position) -> bool {
    world
        .query_mut::<(&Position, &ArcadeAsteroid)>()
        .into_iter()
        .any(|(_, (pos, roid))| ship.distance_to(pos) < roid.size + SHIP_HIT_RADIUS)
}
