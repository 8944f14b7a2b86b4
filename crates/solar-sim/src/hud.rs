//! HUD projection: a throttled, read-only view of engine state for the UI.

use solar_core::constants::HUD_SYNC_INTERVAL;
use solar_core::state::{ArcadeHud, AutopilotView, HudView, OrbitHud, RaidenHud};

use crate::mode::ModeController;
use crate::scan::ScanScheduler;

/// Decides on which ticks a fresh `HudView` is projected.
#[derive(Debug, Clone, Default)]
pub struct HudProjector {
    ticks_since_sync: u32,
    dirty: bool,
}

impl HudProjector {
    /// Force a projection on the next tick (after player commands).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Count a tick; true when a projection is due.
    pub fn due(&mut self) -> bool {
        self.ticks_since_sync += 1;
        if self.dirty || self.ticks_since_sync >= HUD_SYNC_INTERVAL {
            self.dirty = false;
            self.ticks_since_sync = 0;
            true
        } else {
            false
        }
    }
}

/// Build the HUD view from the engines. Never mutates them.
pub fn project(modes: &ModeController, scan: &ScanScheduler) -> HudView {
    let solar = modes.solar();
    let arcade = modes.arcade();
    let raiden = modes.raiden();
    let orbit = modes.orbit();
    let high = modes.high_scores();
    let player = raiden.player();
    let sat = orbit.satellite();

    HudView {
        mode: modes.mode(),
        fuel: solar.ship().fuel,
        closest_body: solar.closest_body().map(str::to_owned),
        description: scan.description().map(str::to_owned),
        scanning: scan.is_scanning(),
        autopilot: AutopilotView {
            active: solar.autopilot().is_active(),
            target: solar.autopilot().target().map(str::to_owned),
        },
        arcade: ArcadeHud {
            score: arcade.score(),
            high_score: high.arcade.max(arcade.score()),
            game_over: arcade.is_game_over(),
        },
        raiden: RaidenHud {
            score: raiden.score(),
            high_score: high.raiden.max(raiden.score()),
            hp: player.hp,
            shield: player.shield,
            weapon_level: player.weapon_level,
            speed_level: player.speed_level,
            game_over: raiden.is_game_over(),
        },
        orbit: OrbitHud {
            params: orbit.params(),
            status: orbit.status(),
            zoom: orbit.zoom(),
            altitude: sat.x.hypot(sat.y),
            speed: sat.vx.hypot(sat.vy),
        },
    }
}
