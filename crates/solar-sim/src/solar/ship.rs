//! Ship kinematics: steering, thrust, friction, speed clamp, trail and fuel.
//!
//! The arcade engine reuses the steering and thrust helpers without fuel.

use solar_core::components::Ship;
use solar_core::constants::*;
use solar_core::types::{wrap_angle, Velocity};

use crate::config::Tuning;
use crate::input::Intent;

/// Ease `rotation` toward `heading` by `easing` of the shortest-path error.
pub fn steer(rotation: &mut f64, heading: f64, easing: f64) {
    *rotation += wrap_angle(heading - *rotation) * easing;
}

/// Push `velocity` along `rotation` by `amount`.
pub fn apply_thrust(velocity: &mut Velocity, rotation: f64, amount: f64) {
    velocity.x += rotation.cos() * amount;
    velocity.y += rotation.sin() * amount;
}

pub fn apply_friction(velocity: &mut Velocity, friction: f64) {
    velocity.x *= friction;
    velocity.y *= friction;
}

/// Rescale `velocity` down to `limit` if it is faster.
pub fn clamp_speed(velocity: &mut Velocity, limit: f64) {
    let speed = velocity.speed();
    if speed > limit {
        velocity.x = velocity.x / speed * limit;
        velocity.y = velocity.y / speed * limit;
    }
}

/// Manual steering and fuel-limited thrust. Returns the thrust level applied.
pub fn manual_control(ship: &mut Ship, intent: &Intent, tuning: &Tuning) -> f64 {
    if !intent.is_active() {
        ship.thrusting = false;
        return 0.0;
    }

    steer(&mut ship.rotation, intent.heading(), MANUAL_TURN_EASING);

    if ship.fuel > 0.0 {
        apply_thrust(
            &mut ship.velocity,
            ship.rotation,
            tuning.ship_acceleration * intent.magnitude,
        );
        ship.fuel = (ship.fuel - FUEL_BURN_MANUAL * intent.magnitude).max(0.0);
        ship.thrusting = true;
        intent.magnitude
    } else {
        ship.thrusting = false;
        0.0
    }
}

/// Clamp speed, move, and record the trail.
pub fn integrate(ship: &mut Ship, tuning: &Tuning) {
    clamp_speed(&mut ship.velocity, tuning.max_speed * MAX_SPEED_CLAMP_FACTOR);

    ship.position.x += ship.velocity.x;
    ship.position.y += ship.velocity.y;

    if ship.velocity.speed() > SHIP_TRAIL_MIN_SPEED {
        ship.trail.push_back(ship.position);
        while ship.trail.len() > SHIP_TRAIL_MAX {
            ship.trail.pop_front();
        }
    }
}

/// Fuel recharge per tick at `distance` from the Sun.
pub fn recharge_rate(distance: f64) -> f64 {
    if distance < FUEL_SOLAR_RADIUS {
        ((FUEL_SOLAR_RADIUS - distance) / FUEL_SOLAR_DIVISOR).max(FUEL_SOLAR_MIN_RATE)
    } else {
        FUEL_RECHARGE_BASE
    }
}

/// Apply solar recharge and keep fuel within `[0, FUEL_MAX]`.
pub fn recharge(ship: &mut Ship) {
    let rate = recharge_rate(ship.position.distance_from_origin());
    ship.fuel = (ship.fuel + rate).clamp(0.0, FUEL_MAX);
}
