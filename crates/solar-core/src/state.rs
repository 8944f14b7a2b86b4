//! Frame snapshot: the read-only state handed to the renderer after each tick.

use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::enums::*;
use crate::events::{AudioCue, ScanRequest, SimEvent};
use crate::types::{Playfield, Position, SimTime};

/// Everything the renderer and HUD need after one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    /// Solar camera centre in world coordinates.
    pub camera: Position,
    /// Camera shake magnitude.
    pub shake: f64,
    pub playfield: Playfield,
    /// Entity state of the active mode only.
    pub view: ModeView,
    pub audio_cues: Vec<AudioCue>,
    pub events: Vec<SimEvent>,
    /// Description lookup that came due this tick, if any.
    pub scan_request: Option<ScanRequest>,
    /// Presentation state, present only on HUD sync ticks.
    pub hud: Option<HudView>,
}

/// Per-mode entity snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum ModeView {
    Solar(SolarView),
    Arcade(ArcadeView),
    Orbit(OrbitView),
    Raiden(RaidenView),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarView {
    pub ship: Ship,
    pub bodies: Vec<CelestialBody>,
    pub belt: Vec<BeltAsteroid>,
    pub autopilot: AutopilotView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutopilotView {
    pub active: bool,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeView {
    pub ship: Ship,
    pub bullets: Vec<BulletView>,
    pub asteroids: Vec<AsteroidView>,
    pub score: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub tier: AsteroidTier,
    pub shape: Vec<f64>,
    pub rotation: f64,
    pub rotation_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitView {
    pub satellite: Satellite,
    pub trail: Vec<Position>,
    pub status: OrbitStatus,
    pub params: OrbitParams,
    pub zoom: f64,
    pub central_mass: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidenView {
    pub player: RaidenPlayer,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub powerups: Vec<PowerUpView>,
    pub score: u32,
    pub game_over: bool,
    pub scroll: f64,
    pub wave_timer: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
    pub width: f64,
    pub height: f64,
    pub vx: f64,
    pub vy: f64,
    pub cooldown: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub owner: ProjectileOwner,
    pub damage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
    pub kind: ParticleKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub vy: f64,
    pub kind: PowerUpKind,
}

/// Presentation state for the HUD, projected at a throttled rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub mode: GameMode,
    pub fuel: f64,
    pub closest_body: Option<String>,
    pub description: Option<String>,
    pub scanning: bool,
    pub autopilot: AutopilotView,
    pub arcade: ArcadeHud,
    pub raiden: RaidenHud,
    pub orbit: OrbitHud,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcadeHud {
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaidenHud {
    pub score: u32,
    pub high_score: u32,
    pub hp: f64,
    pub shield: f64,
    pub weapon_level: u8,
    pub speed_level: u8,
    pub game_over: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitHud {
    pub params: OrbitParams,
    pub status: OrbitStatus,
    pub zoom: f64,
    /// Current distance from the central body.
    pub altitude: f64,
    pub speed: f64,
}
