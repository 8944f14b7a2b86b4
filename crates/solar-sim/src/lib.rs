//! Simulation engine for Solar Explorer.
//!
//! Runs the solar, arcade, orbit and shooter modes one tick per host frame
//! and produces `FrameSnapshot`s for the renderer. No browser dependency.

pub mod arcade;
pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod hud;
pub mod input;
pub mod mode;
pub mod orbit;
pub mod ports;
pub mod raiden;
pub mod scan;
pub mod snapshot;
pub mod solar;

pub use config::{SimConfig, Tuning};
pub use engine::SimulationEngine;
pub use error::ConfigError;
pub use solar_core as core;

#[cfg(test)]
mod tests;
