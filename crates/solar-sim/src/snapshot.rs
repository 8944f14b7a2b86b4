//! Snapshot builder: reads the active mode's engine and assembles a
//! `FrameSnapshot`.
//!
//! This module is read-only. It never modifies engine state.

use hecs::World;

use solar_core::components::*;
use solar_core::enums::GameMode;
use solar_core::events::{AudioCue, ScanRequest, SimEvent};
use solar_core::state::*;
use solar_core::types::{Playfield, Position, SimTime, Velocity};

use crate::camera::Camera;
use crate::mode::ModeController;

/// Per-tick outputs that are not engine state.
pub struct FrameOutputs {
    pub audio_cues: Vec<AudioCue>,
    pub events: Vec<SimEvent>,
    pub scan_request: Option<ScanRequest>,
    pub hud: Option<HudView>,
}

pub fn build_snapshot(
    modes: &ModeController,
    time: SimTime,
    camera: &Camera,
    playfield: Playfield,
    outputs: FrameOutputs,
) -> FrameSnapshot {
    FrameSnapshot {
        time,
        mode: modes.mode(),
        camera: camera.position,
        shake: camera.shake,
        playfield,
        view: build_mode_view(modes),
        audio_cues: outputs.audio_cues,
        events: outputs.events,
        scan_request: outputs.scan_request,
        hud: outputs.hud,
    }
}

/// Entity view of the active mode only.
pub fn build_mode_view(modes: &ModeController) -> ModeView {
    match modes.mode() {
        GameMode::Solar => {
            let solar = modes.solar();
            ModeView::Solar(SolarView {
                ship: solar.ship().clone(),
                bodies: solar.bodies().to_vec(),
                belt: solar.belt().to_vec(),
                autopilot: AutopilotView {
                    active: solar.autopilot().is_active(),
                    target: solar.autopilot().target().map(str::to_owned),
                },
            })
        }
        GameMode::Arcade => {
            let arcade = modes.arcade();
            ModeView::Arcade(ArcadeView {
                ship: arcade.ship().clone(),
                bullets: build_bullets(arcade.world()),
                asteroids: build_asteroids(arcade.world()),
                score: arcade.score(),
                game_over: arcade.is_game_over(),
            })
        }
        GameMode::Orbit => {
            let orbit = modes.orbit();
            ModeView::Orbit(OrbitView {
                satellite: orbit.satellite(),
                trail: orbit.trail().iter().copied().collect(),
                status: orbit.status(),
                params: orbit.params(),
                zoom: orbit.zoom(),
                central_mass: orbit.central_mass(),
            })
        }
        GameMode::Raiden => {
            let raiden = modes.raiden();
            let world = raiden.world();
            ModeView::Raiden(RaidenView {
                player: *raiden.player(),
                enemies: build_enemies(world),
                bullets: build_projectiles(world),
                particles: build_particles(world),
                powerups: build_powerups(world),
                score: raiden.score(),
                game_over: raiden.is_game_over(),
                scroll: raiden.scroll(),
                wave_timer: raiden.wave_timer(),
            })
        }
    }
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&ArcadeBullet, &Position, &Velocity)>()
        .iter()
        .map(|(_, (b, pos, vel))| BulletView {
            id: b.id,
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
            life: b.life,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut asteroids: Vec<AsteroidView> = world
        .query::<(&ArcadeAsteroid, &Position, &Velocity, &Spin, &Outline)>()
        .iter()
        .map(|(_, (a, pos, vel, spin, outline))| AsteroidView {
            id: a.id,
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
            size: a.size,
            tier: a.tier,
            shape: outline.shape.clone(),
            rotation: spin.rotation,
            rotation_speed: spin.rotation_speed,
        })
        .collect();
    asteroids.sort_by_key(|a| a.id);
    asteroids
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Velocity)>()
        .iter()
        .map(|(_, (e, pos, vel))| EnemyView {
            id: e.id,
            x: pos.x,
            y: pos.y,
            kind: e.kind,
            hp: e.hp,
            max_hp: e.max_hp,
            width: e.width,
            height: e.height,
            vx: vel.x,
            vy: vel.y,
            cooldown: e.cooldown,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut shots: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (p, pos, vel))| ProjectileView {
            id: p.id,
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
            owner: p.owner,
            damage: p.damage,
        })
        .collect();
    shots.sort_by_key(|p| p.id);
    shots
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut particles: Vec<ParticleView> = world
        .query::<(&Particle, &Position, &Velocity)>()
        .iter()
        .map(|(_, (p, pos, vel))| ParticleView {
            id: p.id,
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
            life: p.life,
            max_life: p.max_life,
            size: p.size,
            kind: p.kind,
        })
        .collect();
    particles.sort_by_key(|p| p.id);
    particles
}

fn build_powerups(world: &World) -> Vec<PowerUpView> {
    let mut powerups: Vec<PowerUpView> = world
        .query::<(&PowerUp, &Position, &Velocity)>()
        .iter()
        .map(|(_, (p, pos, vel))| PowerUpView {
            id: p.id,
            x: pos.x,
            y: pos.y,
            vy: vel.y,
            kind: p.kind,
        })
        .collect();
    powerups.sort_by_key(|p| p.id);
    powerups
}
