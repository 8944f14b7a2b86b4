//! Open-world solar mode: ship flight, autopilot and proximity scanning.

pub mod autopilot;
pub mod bodies;
pub mod proximity;
pub mod ship;

use log::debug;
use rand_chacha::ChaCha8Rng;

use solar_core::components::{BeltAsteroid, CelestialBody, Ship, Star};
use solar_core::enums::AutopilotPhase;

use crate::config::Tuning;
use crate::input::Intent;

pub use autopilot::{Autopilot, AutopilotStep};

/// Result of one solar tick for the engine to turn into cues and events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolarOutcome {
    /// Set when the closest body changed this tick.
    pub closest_changed: Option<Option<String>>,
    /// Manual input took over from the autopilot.
    pub autopilot_disengaged: bool,
    pub autopilot_phase: Option<AutopilotPhase>,
    /// Engine hum level, 0 when coasting.
    pub thrust: f64,
}

/// Solar-mode state. Owns the ship, bodies, belt and starfield.
#[derive(Debug)]
pub struct SolarEngine {
    ship: Ship,
    bodies: Vec<CelestialBody>,
    belt: Vec<BeltAsteroid>,
    stars: Vec<Star>,
    autopilot: Autopilot,
    closest: Option<String>,
    tuning: Tuning,
}

impl SolarEngine {
    pub fn new(rng: &mut ChaCha8Rng, tuning: Tuning) -> Self {
        Self {
            ship: Ship::default(),
            bodies: bodies::initial_bodies(rng),
            belt: bodies::generate_belt(rng),
            stars: bodies::generate_starfield(rng),
            autopilot: Autopilot::default(),
            closest: None,
            tuning,
        }
    }

    /// Advance the solar system and the ship by one tick.
    pub fn tick(&mut self, intent: &Intent) -> SolarOutcome {
        let mut outcome = SolarOutcome::default();

        bodies::advance_bodies(&mut self.bodies);
        bodies::advance_belt(&mut self.belt);

        let manual = intent.is_active();
        if manual && self.autopilot.is_active() {
            self.autopilot.disengage();
            outcome.autopilot_disengaged = true;
        }

        if self.autopilot.is_active() {
            match self.autopilot.step(&mut self.ship, &self.bodies, &self.tuning) {
                Some(step) => {
                    outcome.autopilot_phase = Some(step.phase);
                    outcome.thrust = step.thrust;
                }
                None => self.ship.thrusting = false,
            }
        } else {
            outcome.thrust = ship::manual_control(&mut self.ship, intent, &self.tuning);
            if !manual {
                ship::apply_friction(&mut self.ship.velocity, self.tuning.ship_friction);
            }
        }

        ship::integrate(&mut self.ship, &self.tuning);
        ship::recharge(&mut self.ship);

        let closest = proximity::closest_body(&self.ship.position, &self.bodies)
            .map(|body| body.name.clone());
        if closest != self.closest {
            debug!("closest body: {:?} -> {:?}", self.closest, closest);
            self.closest = closest.clone();
            outcome.closest_changed = Some(closest);
        }

        outcome
    }

    pub fn engage_autopilot(&mut self, target: &str) {
        self.autopilot.engage(target);
    }

    pub fn disengage_autopilot(&mut self) {
        self.autopilot.disengage();
        self.ship.thrusting = false;
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    #[cfg(test)]
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn belt(&self) -> &[BeltAsteroid] {
        &self.belt
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn autopilot(&self) -> &Autopilot {
        &self.autopilot
    }

    pub fn closest_body(&self) -> Option<&str> {
        self.closest.as_deref()
    }
}
