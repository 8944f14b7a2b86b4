//! Autopilot: approach a named body, then match its orbital velocity.

use glam::DVec2;

use solar_core::components::{CelestialBody, Ship};
use solar_core::constants::*;
use solar_core::enums::AutopilotPhase;

use super::ship::{apply_thrust, steer};
use crate::config::Tuning;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autopilot {
    active: bool,
    target: Option<String>,
}

/// What the controller did on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotStep {
    pub phase: AutopilotPhase,
    /// Thrust level for the engine hum, 0 when coasting.
    pub thrust: f64,
}

impl Autopilot {
    pub fn engage(&mut self, target: impl Into<String>) {
        self.active = true;
        self.target = Some(target.into());
    }

    pub fn disengage(&mut self) {
        self.active = false;
        self.target = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Run one control tick. Returns `None` when inactive or the target name
    /// does not resolve; the autopilot stays engaged in that case.
    pub fn step(
        &self,
        ship: &mut Ship,
        bodies: &[CelestialBody],
        tuning: &Tuning,
    ) -> Option<AutopilotStep> {
        if !self.active {
            return None;
        }
        let name = self.target.as_deref()?;
        let target = bodies.iter().find(|b| b.name == name)?;

        let target_pos = target.position();
        steer(
            &mut ship.rotation,
            ship.position.bearing_to(&target_pos),
            AUTOPILOT_TURN_EASING,
        );

        let distance = ship.position.distance_to(&target_pos);
        if distance > target.radius + AUTOPILOT_RENDEZVOUS_MARGIN {
            let thrust = if ship.fuel > 0.0 {
                apply_thrust(
                    &mut ship.velocity,
                    ship.rotation,
                    tuning.ship_acceleration * AUTOPILOT_APPROACH_THRUST,
                );
                ship.fuel = (ship.fuel - AUTOPILOT_APPROACH_FUEL).max(0.0);
                ship.thrusting = true;
                AUTOPILOT_APPROACH_HUM
            } else {
                ship.thrusting = false;
                0.0
            };
            return Some(AutopilotStep {
                phase: AutopilotPhase::Approach,
                thrust,
            });
        }

        // Station-keeping: steer the velocity toward the body's own velocity
        // plus a pull that closes the remaining offset.
        let offset = target_pos.as_dvec2() - ship.position.as_dvec2();
        let ideal = target.orbital_velocity().as_dvec2() + offset * AUTOPILOT_POSITION_GAIN;
        let correction: DVec2 = (ideal - ship.velocity.as_dvec2()) * AUTOPILOT_VELOCITY_GAIN;
        ship.velocity = (ship.velocity.as_dvec2() + correction).into();

        let magnitude = correction.length();
        let thrust = if magnitude > AUTOPILOT_THRUST_THRESHOLD && ship.fuel > 0.0 {
            ship.fuel = (ship.fuel - AUTOPILOT_STATION_FUEL * magnitude).max(0.0);
            ship.thrusting = true;
            (magnitude * AUTOPILOT_STATION_HUM_GAIN).min(AUTOPILOT_STATION_HUM_MAX)
        } else {
            ship.thrusting = false;
            0.0
        };

        Some(AutopilotStep {
            phase: AutopilotPhase::Rendezvous,
            thrust,
        })
    }
}
