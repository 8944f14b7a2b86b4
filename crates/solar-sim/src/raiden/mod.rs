//! Raiden mode: vertical-scrolling shooter.
//!
//! `RaidenEngine` owns a hecs world for enemies, projectiles, particles and
//! pickups. Systems run in a fixed order each tick:
//!
//! 1. scroll and player movement
//! 2. player fire (cooldown gated)
//! 3. wave spawner
//! 4. pickups drift and collect
//! 5. enemy movement and heavy fire
//! 6. projectile movement
//! 7. player bullets vs enemies, then hazards vs player
//! 8. particles and cleanup

pub mod cleanup;
pub mod collision;
pub mod enemies;
pub mod movement;
pub mod player;
pub mod spawn;
pub mod wave_spawner;

use hecs::{Entity, World};
use log::info;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{Enemy, Particle, PowerUp, Projectile, RaidenPlayer};
use solar_core::constants::*;
use solar_core::enums::ProjectileOwner;
use solar_core::types::{Playfield, Position};

use crate::input::Intent;
use collision::CollisionTally;
use wave_spawner::WaveTimer;

/// What happened during one shooter tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaidenOutcome {
    pub fired: bool,
    pub collisions: CollisionTally,
    /// The player's hull reached zero this tick.
    pub game_over: bool,
}

pub struct RaidenEngine {
    world: World,
    player: RaidenPlayer,
    score: u32,
    game_over: bool,
    scroll: f64,
    wave_timer: WaveTimer,
    next_id: u32,
    despawn_buffer: Vec<Entity>,
}

impl Default for RaidenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RaidenEngine {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            player: RaidenPlayer::default(),
            score: 0,
            game_over: false,
            scroll: 0.0,
            wave_timer: WaveTimer::default(),
            next_id: 0,
            despawn_buffer: Vec::new(),
        }
    }

    /// Fresh run sized to `playfield`.
    pub fn reset(&mut self, playfield: Playfield) {
        self.world.clear();
        self.player = player::spawn_player(playfield);
        self.score = 0;
        self.game_over = false;
        self.scroll = 0.0;
        self.wave_timer = WaveTimer::default();
        self.next_id = 0;
    }

    /// Advance one tick. A finished run does nothing.
    pub fn tick(
        &mut self,
        intent: &Intent,
        fire_held: bool,
        playfield: Playfield,
        rng: &mut ChaCha8Rng,
    ) -> RaidenOutcome {
        let mut outcome = RaidenOutcome::default();
        if self.game_over {
            return outcome;
        }

        self.scroll += RAIDEN_SCROLL_SPEED;
        player::move_player(&mut self.player, intent, playfield);

        self.player.cooldown -= 1;
        let wants_fire = fire_held || intent.magnitude > RAIDEN_AUTOFIRE_INPUT;
        if wants_fire && self.player.cooldown <= 0 {
            for (pos, vel) in player::volley(&self.player) {
                spawn::spawn_projectile(
                    &mut self.world,
                    &mut self.next_id,
                    ProjectileOwner::Player,
                    pos,
                    vel,
                    1.0,
                );
            }
            self.player.cooldown = RAIDEN_FIRE_COOLDOWN;
            outcome.fired = true;
        }

        wave_spawner::run(
            &mut self.world,
            rng,
            &mut self.next_id,
            &mut self.wave_timer,
            playfield,
        );

        let mut tally = CollisionTally::default();

        movement::move_powerups(&mut self.world);
        tally.pickups =
            collision::collect_powerups(&mut self.world, &mut self.player, &mut self.despawn_buffer);

        let player_pos = Position::new(self.player.x, self.player.y);
        enemies::run(&mut self.world, &mut self.next_id, player_pos, playfield);
        movement::move_projectiles(&mut self.world);

        collision::player_bullets_vs_enemies(
            &mut self.world,
            rng,
            &mut self.next_id,
            &mut self.despawn_buffer,
            &mut tally,
        );
        collision::hazards_vs_player(
            &mut self.world,
            &mut self.player,
            rng,
            &mut self.next_id,
            &mut self.despawn_buffer,
            &mut tally,
        );
        self.score += tally.score;
        outcome.collisions = tally;

        if self.player.hp <= 0.0 {
            self.player.hp = 0.0;
            self.game_over = true;
            outcome.game_over = true;
            info!("raiden game over, score {}", self.score);
        }

        movement::update_particles(&mut self.world);
        cleanup::run(&mut self.world, playfield, &mut self.despawn_buffer);

        outcome
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &RaidenPlayer {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut RaidenPlayer {
        &mut self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn wave_timer(&self) -> u32 {
        self.wave_timer.ticks()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self, owner: ProjectileOwner) -> usize {
        self.world
            .query::<&Projectile>()
            .iter()
            .filter(|(_, p)| p.owner == owner)
            .count()
    }

    pub fn particle_count(&self) -> usize {
        self.world.query::<&Particle>().iter().count()
    }

    pub fn powerup_count(&self) -> usize {
        self.world.query::<&PowerUp>().iter().count()
    }
}
