//! Engine configuration.
//!
//! [`SimConfig`] defaults to the compile-time constants in
//! `solar_core::constants`. A host may overlay a partial TOML document with
//! [`SimConfig::from_toml_str`]; missing keys keep their defaults.
//!
//! ```toml
//! seed = 7
//!
//! [tuning]
//! max_speed = 10.0
//! ```

use serde::{Deserialize, Serialize};

use solar_core::constants::*;
use solar_core::types::Playfield;

use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same entity spawns.
    pub seed: u64,
    /// Initial playfield; the host resizes it as the viewport changes.
    pub playfield: Playfield,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
            tuning: Tuning::default(),
        }
    }
}

/// Per-tick physics constants a host may override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship_acceleration: f64,
    pub ship_friction: f64,
    pub max_speed: f64,
    /// Gravitational parameter of the orbit sandbox's central body.
    pub central_mass: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_acceleration: SHIP_ACCELERATION,
            ship_friction: SHIP_FRICTION,
            max_speed: MAX_SPEED,
            central_mass: CENTRAL_MASS,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the integrators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield.width", self.playfield.width)?;
        positive("playfield.height", self.playfield.height)?;
        positive("tuning.ship_acceleration", self.tuning.ship_acceleration)?;
        positive("tuning.max_speed", self.tuning.max_speed)?;
        positive("tuning.central_mass", self.tuning.central_mass)?;

        let friction = self.tuning.ship_friction;
        if !(friction.is_finite() && friction > 0.0 && friction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                name: "tuning.ship_friction",
                value: friction,
                expected: "a value in (0, 1]",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value,
            expected: "a finite positive number",
        })
    }
}
