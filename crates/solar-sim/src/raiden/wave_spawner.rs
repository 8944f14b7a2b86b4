//! Wave spawner: one enemy every `RAIDEN_WAVE_INTERVAL` ticks.

use hecs::World;
use log::debug;
use rand_chacha::ChaCha8Rng;

use solar_core::constants::RAIDEN_WAVE_INTERVAL;
use solar_core::enums::EnemyKind;
use solar_core::types::Playfield;

use super::spawn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveTimer {
    ticks: u32,
}

impl WaveTimer {
    /// Count one tick. Returns true (and restarts) when a spawn is due.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= RAIDEN_WAVE_INTERVAL {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Advance the timer and spawn an enemy when it fires.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    timer: &mut WaveTimer,
    playfield: Playfield,
) -> Option<EnemyKind> {
    if !timer.advance() {
        return None;
    }
    let kind = spawn::pick_enemy_kind(rng);
    spawn::spawn_enemy(world, rng, next_id, kind, playfield);
    debug!("raiden spawned {kind:?}");
    Some(kind)
}
