//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Active simulation mode (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Open-world navigation around the solar system.
    #[default]
    Solar,
    /// Toroidal asteroid-combat minigame.
    Arcade,
    /// Two-body orbital mechanics sandbox.
    Orbit,
    /// Vertical-scrolling shooter.
    Raiden,
}

/// Held input keys, already mapped from browser key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a lower-cased browser `KeyboardEvent.key` value.
    pub fn from_browser_key(key: &str) -> Option<Self> {
        match key {
            "w" | "arrowup" => Some(Self::Up),
            "s" | "arrowdown" => Some(Self::Down),
            "a" | "arrowleft" => Some(Self::Left),
            "d" | "arrowright" => Some(Self::Right),
            " " | "f" | "enter" => Some(Self::Fire),
            _ => None,
        }
    }
}

/// Autopilot control phase for the tick just simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotPhase {
    /// Open-loop thrust along the heading, closing distance.
    Approach,
    /// Closed-loop velocity matching near the target.
    Rendezvous,
}

/// Arcade asteroid size class. Larger tiers are slower and split on destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Small,
    Medium,
    Large,
}

impl AsteroidTier {
    /// Numeric tier (1 = small, 3 = large).
    pub fn level(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// Collision radius.
    pub fn size(self) -> f64 {
        match self {
            Self::Small => ASTEROID_SIZE_SMALL,
            Self::Medium => ASTEROID_SIZE_MEDIUM,
            Self::Large => ASTEROID_SIZE_LARGE,
        }
    }

    /// Drift speed per tick.
    pub fn speed(self) -> f64 {
        match self {
            Self::Small => ASTEROID_SPEED_SMALL,
            Self::Medium => ASTEROID_SPEED_MEDIUM,
            Self::Large => ASTEROID_SPEED_LARGE,
        }
    }

    /// Points for destroying an asteroid of this tier. Smaller is worth more.
    pub fn score(self) -> u32 {
        match self {
            Self::Small => 100,
            Self::Medium => 50,
            Self::Large => 20,
        }
    }

    /// Tier of the children produced on destruction, if any.
    pub fn split(self) -> Option<Self> {
        match self {
            Self::Small => None,
            Self::Medium => Some(Self::Small),
            Self::Large => Some(Self::Medium),
        }
    }
}

/// Shooter enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast straight descent, no attack.
    Scout,
    /// Slow, armoured, fires aimed shots.
    Heavy,
    /// Weaves horizontally between the side margins.
    Interceptor,
}

impl EnemyKind {
    /// Points awarded for a kill.
    pub fn score(self) -> u32 {
        match self {
            Self::Heavy => 50,
            Self::Interceptor => 20,
            Self::Scout => 10,
        }
    }
}

/// Shooter pickup type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Spread,
    Speed,
    Shield,
}

/// Which side fired a shooter projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Visual class of a particle burst; the renderer picks the colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Bullet impact on an enemy.
    Spark,
    /// Enemy destroyed.
    Explosion,
    /// Player took damage.
    Damage,
}

/// Orbit sandbox lifecycle.
///
/// Transitions only `Ready -> Running -> {Crashed | Escaped}`; an explicit
/// reset is the only way back to `Ready`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitStatus {
    #[default]
    Ready,
    Running,
    Crashed,
    Escaped,
}

impl OrbitStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Crashed | Self::Escaped)
    }
}

/// Canned launch parameters for the orbit sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitPreset {
    Circular,
    Elliptical,
    Escape,
    Crash,
}
