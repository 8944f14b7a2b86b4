//! Simulation components.
//!
//! Components are plain data structs with no game logic. The arcade and
//! shooter engines store theirs in hecs worlds; the solar and orbit engines
//! own single instances directly. Game logic lives in systems.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{Position, Velocity};

// --- Solar ---

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: Position,
    pub velocity: Velocity,
    /// Heading in radians, `atan2` convention.
    pub rotation: f64,
    pub thrusting: bool,
    /// Remaining fuel, always within `[0, FUEL_MAX]`.
    pub fuel: f64,
    /// Recent positions, oldest first, at most `SHIP_TRAIL_MAX`.
    pub trail: VecDeque<Position>,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            position: Position::new(SHIP_START_POSITION.0, SHIP_START_POSITION.1),
            velocity: Velocity::new(SHIP_START_VELOCITY.0, SHIP_START_VELOCITY.1),
            rotation: 0.0,
            thrusting: false,
            fuel: FUEL_MAX,
            trail: VecDeque::with_capacity(SHIP_TRAIL_MAX),
        }
    }
}

/// A planet, dwarf planet, or the Sun on a circular orbit around the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    /// CSS colour for the renderer.
    pub color: String,
    pub radius: f64,
    pub orbit_radius: f64,
    /// Radians per tick.
    pub orbit_speed: f64,
    /// Current orbit angle in radians.
    pub angle: f64,
}

impl CelestialBody {
    /// Current world position.
    pub fn position(&self) -> Position {
        Position::new(
            self.angle.cos() * self.orbit_radius,
            self.angle.sin() * self.orbit_radius,
        )
    }

    /// Current orbital velocity (tangent to the orbit).
    pub fn orbital_velocity(&self) -> Velocity {
        let tangential = self.orbit_radius * self.orbit_speed;
        Velocity::new(-self.angle.sin() * tangential, self.angle.cos() * tangential)
    }
}

/// Decorative asteroid in the main belt. Never collides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeltAsteroid {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub angle: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    /// Radius multipliers for the irregular outline.
    pub shape: Vec<f64>,
}

/// Background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

// --- Arcade (hecs components) ---

/// Arcade asteroid identity and size class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArcadeAsteroid {
    pub id: u32,
    pub tier: AsteroidTier,
    /// Collision radius.
    pub size: f64,
}

/// Arcade bullet identity and remaining lifetime in ticks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArcadeBullet {
    pub id: u32,
    pub life: i32,
}

/// Cosmetic rotation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub rotation: f64,
    pub rotation_speed: f64,
}

/// Irregular outline as radius multipliers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    pub shape: Vec<f64>,
}

// --- Orbit sandbox ---

/// The single satellite of the orbit sandbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Launch parameters, live-editable while the sandbox is `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    /// Launch distance from the central body.
    pub distance: f64,
    /// Launch speed.
    pub speed: f64,
    /// Launch direction in degrees; 0 launches along +y.
    pub angle_degrees: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            distance: ORBIT_DEFAULT_DISTANCE,
            speed: ORBIT_DEFAULT_SPEED,
            angle_degrees: 0.0,
        }
    }
}

// --- Raiden ---

/// Shooter player state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaidenPlayer {
    pub x: f64,
    pub y: f64,
    pub hp: f64,
    pub max_hp: f64,
    /// Ticks until the next shot; counts below zero while idle.
    pub cooldown: i32,
    /// 1 = single, 2 = double stream, 3 = spread.
    pub weapon_level: u8,
    pub speed_level: u8,
    pub shield: f64,
}

impl Default for RaidenPlayer {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            hp: RAIDEN_MAX_HP,
            max_hp: RAIDEN_MAX_HP,
            cooldown: 0,
            weapon_level: 1,
            speed_level: 1,
            shield: 0.0,
        }
    }
}

/// Shooter enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
    pub width: f64,
    pub height: f64,
    pub cooldown: i32,
}

/// Shooter bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: ProjectileOwner,
    pub damage: f64,
}

/// Short-lived visual particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub kind: ParticleKind,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
}

/// Collectible pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
}
