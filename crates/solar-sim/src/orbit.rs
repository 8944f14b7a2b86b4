//! Two-body orbit sandbox.
//!
//! A satellite is launched from `(distance, 0)` around a fixed central mass
//! at the origin and integrated with semi-implicit Euler until it crashes or
//! escapes. Status only moves forward: `Ready -> Running -> Crashed|Escaped`.

use std::collections::VecDeque;

use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{OrbitParams, Satellite};
use solar_core::constants::*;
use solar_core::enums::{OrbitPreset, OrbitStatus};
use solar_core::types::Position;

#[derive(Debug, Clone)]
pub struct OrbitEngine {
    satellite: Satellite,
    trail: VecDeque<Position>,
    status: OrbitStatus,
    params: OrbitParams,
    zoom: f64,
    central_mass: f64,
}

impl OrbitEngine {
    pub fn new(central_mass: f64) -> Self {
        let mut engine = Self {
            satellite: Satellite::default(),
            trail: VecDeque::with_capacity(ORBIT_TRAIL_MAX),
            status: OrbitStatus::Ready,
            params: OrbitParams::default(),
            zoom: ORBIT_DEFAULT_ZOOM,
            central_mass,
        };
        engine.pin_satellite();
        engine
    }

    /// Back to `Ready` with the current parameters; clears the trail.
    pub fn reset(&mut self) {
        self.status = OrbitStatus::Ready;
        self.trail.clear();
        self.pin_satellite();
    }

    /// Update any subset of the launch parameters. While `Ready` the pinned
    /// satellite follows the new distance.
    pub fn set_params(&mut self, distance: Option<f64>, speed: Option<f64>, angle_degrees: Option<f64>) {
        if let Some(d) = distance.filter(|d| d.is_finite()) {
            self.params.distance = d.max(0.0);
        }
        if let Some(s) = speed.filter(|s| s.is_finite()) {
            self.params.speed = s;
        }
        if let Some(a) = angle_degrees.filter(|a| a.is_finite()) {
            self.params.angle_degrees = a;
        }
        if self.status == OrbitStatus::Ready {
            self.pin_satellite();
        }
    }

    /// Load canned parameters and return to `Ready`.
    pub fn apply_preset(&mut self, preset: OrbitPreset) {
        self.params = preset_params(preset, self.central_mass);
        self.reset();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ORBIT_ZOOM_MIN, ORBIT_ZOOM_MAX);
        }
    }

    /// Launch from `Ready`. Returns false in any other state.
    pub fn launch(&mut self) -> bool {
        if self.status != OrbitStatus::Ready {
            return false;
        }
        let theta = self.params.angle_degrees.to_radians();
        self.satellite = Satellite {
            x: self.params.distance,
            y: 0.0,
            vx: self.params.speed * theta.sin(),
            vy: self.params.speed * theta.cos(),
        };
        self.trail.clear();
        self.status = OrbitStatus::Running;
        info!(
            "orbit launched: distance {}, speed {}, angle {}",
            self.params.distance, self.params.speed, self.params.angle_degrees
        );
        true
    }

    /// Advance one tick. Returns the new status if it turned terminal.
    pub fn tick(&mut self, rng: &mut ChaCha8Rng) -> Option<OrbitStatus> {
        if self.status != OrbitStatus::Running {
            return None;
        }

        let sat = &mut self.satellite;
        let r = sat.x.hypot(sat.y);
        if r < ORBIT_CRASH_RADIUS {
            return Some(self.finish(OrbitStatus::Crashed));
        }
        if r > ORBIT_ESCAPE_RADIUS {
            return Some(self.finish(OrbitStatus::Escaped));
        }

        let accel = self.central_mass / (r * r);
        sat.vx -= accel * sat.x / r;
        sat.vy -= accel * sat.y / r;
        sat.x += sat.vx;
        sat.y += sat.vy;

        if rng.gen_bool(ORBIT_TRAIL_PROBABILITY) {
            self.trail.push_back(Position::new(sat.x, sat.y));
            while self.trail.len() > ORBIT_TRAIL_MAX {
                self.trail.pop_front();
            }
        }
        None
    }

    fn finish(&mut self, status: OrbitStatus) -> OrbitStatus {
        info!("orbit ended: {status:?}");
        self.status = status;
        status
    }

    fn pin_satellite(&mut self) {
        self.satellite = Satellite {
            x: self.params.distance,
            ..Default::default()
        };
    }

    pub fn satellite(&self) -> Satellite {
        self.satellite
    }

    pub fn trail(&self) -> &VecDeque<Position> {
        &self.trail
    }

    pub fn status(&self) -> OrbitStatus {
        self.status
    }

    pub fn params(&self) -> OrbitParams {
        self.params
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn central_mass(&self) -> f64 {
        self.central_mass
    }

    #[cfg(test)]
    pub fn satellite_mut(&mut self) -> &mut Satellite {
        &mut self.satellite
    }
}

/// Launch parameters for a canned scenario. Speeds are rounded to 2 decimals.
pub fn preset_params(preset: OrbitPreset, central_mass: f64) -> OrbitParams {
    let (distance, speed, angle_degrees) = match preset {
        OrbitPreset::Circular => (250.0, (central_mass / 250.0).sqrt(), 0.0),
        OrbitPreset::Elliptical => (200.0, 1.15 * (central_mass / 200.0).sqrt(), 0.0),
        OrbitPreset::Escape => (200.0, (2.0 * central_mass / 200.0).sqrt() + 0.5, 0.0),
        OrbitPreset::Crash => (300.0, 1.0, -45.0),
    };
    OrbitParams {
        distance,
        speed: (speed * 100.0).round() / 100.0,
        angle_degrees,
    }
}
