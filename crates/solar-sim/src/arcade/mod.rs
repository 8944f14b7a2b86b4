//! Arcade mode: toroidal asteroid combat on the host playfield.
//!
//! `ArcadeEngine` owns a hecs world holding asteroids and bullets. The ship
//! lives outside the world because there is exactly one.

pub mod collision;
pub mod spawn;

use std::f64::consts::FRAC_PI_2;

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{ArcadeAsteroid, ArcadeBullet, Ship, Spin};
use solar_core::constants::*;
use solar_core::types::{Playfield, Position, Velocity};

use crate::config::Tuning;
use crate::input::Intent;
use crate::solar::ship::{apply_friction, apply_thrust, steer};

/// What happened during one arcade tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArcadeOutcome {
    /// The ship touched an asteroid this tick.
    pub collision: bool,
    pub destroyed: u32,
    pub score_gained: u32,
    /// Engine hum level, 0 when coasting.
    pub thrust: f64,
}

/// Arcade state. Exclusively owns its asteroids and bullets.
pub struct ArcadeEngine {
    world: World,
    ship: Ship,
    score: u32,
    game_over: bool,
    last_shot_ms: Option<f64>,
    next_id: u32,
    despawn_buffer: Vec<Entity>,
    tuning: Tuning,
}

impl ArcadeEngine {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            world: World::new(),
            ship: Ship::default(),
            score: 0,
            game_over: false,
            last_shot_ms: None,
            next_id: 0,
            despawn_buffer: Vec::new(),
            tuning,
        }
    }

    /// Clear the field, centre the ship pointing up and spawn the opening wave.
    pub fn reset(&mut self, playfield: Playfield, rng: &mut ChaCha8Rng) {
        self.world.clear();
        self.ship = Ship {
            position: playfield.center(),
            velocity: Velocity::default(),
            rotation: -FRAC_PI_2,
            fuel: FUEL_MAX,
            ..Default::default()
        };
        self.score = 0;
        self.game_over = false;
        self.last_shot_ms = None;
        self.next_id = 0;
        spawn::spawn_asteroids(
            &mut self.world,
            rng,
            &mut self.next_id,
            ARCADE_WAVE_BASE,
            playfield,
        );
    }

    /// Fire from the ship's nose, rate-limited by wall-clock time.
    /// Returns false when refused.
    pub fn fire_bullet(&mut self, now_ms: f64) -> bool {
        if self.game_over {
            return false;
        }
        if let Some(last) = self.last_shot_ms {
            if now_ms - last < BULLET_COOLDOWN_MS {
                return false;
            }
        }
        self.last_shot_ms = Some(now_ms);
        spawn::spawn_bullet(
            &mut self.world,
            &mut self.next_id,
            self.ship.position,
            self.ship.velocity,
            self.ship.rotation,
        );
        true
    }

    /// Advance the arcade by one tick.
    pub fn tick(&mut self, intent: &Intent, playfield: Playfield, rng: &mut ChaCha8Rng) -> ArcadeOutcome {
        let mut outcome = ArcadeOutcome::default();

        if !self.game_over {
            outcome.thrust = self.fly_ship(intent, playfield);
        }

        self.move_bullets(playfield);
        self.move_asteroids(playfield);

        self.despawn_buffer.clear();
        let hits = collision::bullets_vs_asteroids(&mut self.world, &mut self.despawn_buffer);
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        for (pos, tier) in hits.fragments {
            spawn::spawn_asteroid(&mut self.world, rng, &mut self.next_id, pos, tier);
        }
        self.score += hits.score;
        outcome.destroyed = hits.destroyed;
        outcome.score_gained = hits.score;

        if !self.game_over && collision::ship_hits_asteroid(&mut self.world, self.ship.position) {
            outcome.collision = true;
        }

        self.remove_spent_bullets();

        if !self.game_over && !outcome.collision && self.asteroid_count() == 0 {
            let count = ARCADE_WAVE_BASE + self.score / ARCADE_WAVE_SCORE_STEP;
            debug!("arcade wave cleared, spawning {count} asteroids");
            spawn::spawn_asteroids(&mut self.world, rng, &mut self.next_id, count, playfield);
        }

        outcome
    }

    /// Freeze the ship and stop accepting fire. One-way until `reset`.
    pub fn mark_game_over(&mut self) {
        self.game_over = true;
        self.ship.thrusting = false;
    }

    fn fly_ship(&mut self, intent: &Intent, playfield: Playfield) -> f64 {
        let ship = &mut self.ship;
        let mut thrust = 0.0;
        ship.thrusting = false;
        if intent.is_active() {
            steer(&mut ship.rotation, intent.heading(), MANUAL_TURN_EASING);
            apply_thrust(
                &mut ship.velocity,
                ship.rotation,
                self.tuning.ship_acceleration * intent.magnitude,
            );
            ship.thrusting = true;
            thrust = intent.magnitude;
        }
        ship.position.x += ship.velocity.x;
        ship.position.y += ship.velocity.y;
        wrap_exact(&mut ship.position, playfield);
        // Uncapped: drag alone bounds the top speed.
        apply_friction(&mut ship.velocity, ARCADE_SHIP_FRICTION);
        thrust
    }

    fn move_bullets(&mut self, playfield: Playfield) {
        for (_entity, (pos, vel, bullet)) in
            self.world
                .query_mut::<(&mut Position, &Velocity, &mut ArcadeBullet)>()
        {
            pos.x += vel.x;
            pos.y += vel.y;
            bullet.life -= 1;
            wrap_exact(pos, playfield);
        }
    }

    fn move_asteroids(&mut self, playfield: Playfield) {
        for (_entity, (pos, vel, spin, _roid)) in self
            .world
            .query_mut::<(&mut Position, &Velocity, &mut Spin, &ArcadeAsteroid)>()
        {
            pos.x += vel.x;
            pos.y += vel.y;
            spin.rotation += spin.rotation_speed;
            wrap_with_margin(pos, playfield, ASTEROID_WRAP_MARGIN);
        }
    }

    fn remove_spent_bullets(&mut self) {
        self.despawn_buffer.clear();
        for (entity, bullet) in self.world.query_mut::<&ArcadeBullet>() {
            if bullet.life <= 0 {
                self.despawn_buffer.push(entity);
            }
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&ArcadeAsteroid>().iter().count()
    }

    pub fn bullet_count(&self) -> usize {
        self.world.query::<&ArcadeBullet>().iter().count()
    }
}

/// Wrap at the exact playfield edge.
pub fn wrap_exact(pos: &mut Position, playfield: Playfield) {
    if pos.x < 0.0 {
        pos.x = playfield.width;
    } else if pos.x > playfield.width {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = playfield.height;
    } else if pos.y > playfield.height {
        pos.y = 0.0;
    }
}

/// Wrap once the position is `margin` outside the playfield.
pub fn wrap_with_margin(pos: &mut Position, playfield: Playfield, margin: f64) {
    if pos.x < -margin {
        pos.x = playfield.width + margin;
    } else if pos.x > playfield.width + margin {
        pos.x = -margin;
    }
    if pos.y < -margin {
        pos.y = playfield.height + margin;
    } else if pos.y > playfield.height + margin {
        pos.y = -margin;
    }
}
