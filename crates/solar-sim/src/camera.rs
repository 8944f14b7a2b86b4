//! Solar camera: eased follow, impact shake and pointer unprojection.

use solar_core::constants::*;
use solar_core::types::{Playfield, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position at the centre of the viewport.
    pub position: Position,
    /// Shake magnitude in pixels; 0 when settled.
    pub shake: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Position::new(SHIP_START_POSITION.0, SHIP_START_POSITION.1),
            shake: 0.0,
        }
    }
}

impl Camera {
    /// Ease toward `target` by `CAMERA_FOLLOW_EASING` of the remaining gap.
    pub fn follow(&mut self, target: Position) {
        self.position.x += (target.x - self.position.x) * CAMERA_FOLLOW_EASING;
        self.position.y += (target.y - self.position.y) * CAMERA_FOLLOW_EASING;
    }

    /// Kick the shake to `amount`.
    pub fn shake(&mut self, amount: f64) {
        self.shake = amount;
    }

    /// Per-tick shake decay.
    pub fn decay(&mut self) {
        self.shake *= CAMERA_SHAKE_DECAY;
        if self.shake < CAMERA_SHAKE_FLOOR {
            self.shake = 0.0;
        }
    }

    /// Convert a viewport pixel into world coordinates.
    pub fn screen_to_world(&self, screen: Position, viewport: Playfield) -> Position {
        Position::new(
            screen.x - viewport.width / 2.0 + self.position.x,
            screen.y - viewport.height / 2.0 + self.position.y,
        )
    }
}
