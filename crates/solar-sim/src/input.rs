//! Input aggregation: keys, virtual joystick and pointer steering merged
//! into a single normalized intent vector.

use std::collections::HashSet;

use solar_core::constants::POINTER_DEAD_ZONE;
use solar_core::enums::Key;
use solar_core::types::{Position, Vector2};

/// Normalized steering intent for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    pub x: f64,
    pub y: f64,
    /// Length of `(x, y)`, never above 1.
    pub magnitude: f64,
}

impl Intent {
    /// True when the player is steering this tick.
    pub fn is_active(&self) -> bool {
        self.magnitude > 0.0
    }

    /// Heading of the intent in radians (`atan2` convention).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Held keys, joystick vector and pointer target.
#[derive(Debug, Default)]
pub struct InputAggregator {
    held: HashSet<Key>,
    joystick: Vector2,
    pointer: Option<Position>,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn set_joystick(&mut self, x: f64, y: f64) {
        self.joystick = Vector2::new(x, y);
    }

    /// Set the pointer steering target in world coordinates.
    pub fn set_pointer_target(&mut self, target: Position) {
        self.pointer = Some(target);
    }

    pub fn clear_pointer_target(&mut self) {
        self.pointer = None;
    }

    pub fn pointer_target(&self) -> Option<Position> {
        self.pointer
    }

    /// Release every key, the joystick and the pointer.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.joystick = Vector2::ZERO;
        self.pointer = None;
    }

    /// Combine all sources into one intent.
    ///
    /// `ship` enables pointer steering; pass `None` in modes where the pointer
    /// does not steer. A pointer inside the dead zone is ignored.
    pub fn intent(&self, ship: Option<Position>) -> Intent {
        let axis = |neg: Key, pos: Key| -> f64 {
            let mut v = 0.0;
            if self.is_held(neg) {
                v -= 1.0;
            }
            if self.is_held(pos) {
                v += 1.0;
            }
            v
        };

        let mut x = axis(Key::Left, Key::Right) + self.joystick.x;
        let mut y = axis(Key::Up, Key::Down) + self.joystick.y;

        if let (Some(target), Some(ship)) = (self.pointer, ship) {
            let dist = ship.distance_to(&target);
            if dist > POINTER_DEAD_ZONE {
                x = (target.x - ship.x) / dist;
                y = (target.y - ship.y) / dist;
            }
        }

        let mut magnitude = x.hypot(y);
        if magnitude > 1.0 {
            x /= magnitude;
            y /= magnitude;
            magnitude = 1.0;
        }

        Intent { x, y, magnitude }
    }
}
