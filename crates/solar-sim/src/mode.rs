//! Mode controller: owns the four mode engines and switches between them.
//!
//! Only the active mode's engine is ticked; the others keep their state
//! frozen until re-entered (entering a minigame always resets it).

use log::info;
use rand_chacha::ChaCha8Rng;

use solar_core::enums::GameMode;
use solar_core::types::Playfield;

use crate::arcade::ArcadeEngine;
use crate::config::Tuning;
use crate::orbit::OrbitEngine;
use crate::ports::ProgressStore;
use crate::raiden::RaidenEngine;
use crate::solar::SolarEngine;

/// Best scores seen this session (seeded from the progress store).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScores {
    pub arcade: u32,
    pub raiden: u32,
}

impl HighScores {
    /// Raise the stored best for `mode` if `score` beats it.
    pub fn record(&mut self, mode: GameMode, score: u32) {
        match mode {
            GameMode::Arcade => self.arcade = self.arcade.max(score),
            GameMode::Raiden => self.raiden = self.raiden.max(score),
            GameMode::Solar | GameMode::Orbit => {}
        }
    }
}

pub struct ModeController {
    mode: GameMode,
    solar: SolarEngine,
    arcade: ArcadeEngine,
    orbit: OrbitEngine,
    raiden: RaidenEngine,
    high_scores: HighScores,
}

impl ModeController {
    pub fn new(rng: &mut ChaCha8Rng, tuning: Tuning, high_scores: HighScores) -> Self {
        Self {
            mode: GameMode::Solar,
            solar: SolarEngine::new(rng, tuning),
            arcade: ArcadeEngine::new(tuning),
            orbit: OrbitEngine::new(tuning.central_mass),
            raiden: RaidenEngine::new(),
            high_scores,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Switch the active mode without touching any engine state.
    /// Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if self.mode == mode {
            return false;
        }
        info!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        true
    }

    pub fn reset_arcade(&mut self, playfield: Playfield, rng: &mut ChaCha8Rng) {
        self.arcade.reset(playfield, rng);
    }

    pub fn reset_raiden(&mut self, playfield: Playfield) {
        self.raiden.reset(playfield);
    }

    /// Enter `mode`, resetting its engine. Leaving solar mode drops the
    /// autopilot. Returns true if the mode changed.
    pub fn enter_mode(&mut self, mode: GameMode, playfield: Playfield, rng: &mut ChaCha8Rng) -> bool {
        let leaving_solar = self.mode == GameMode::Solar && mode != GameMode::Solar;
        let changed = self.set_mode(mode);

        match mode {
            GameMode::Solar => {}
            GameMode::Arcade => self.reset_arcade(playfield, rng),
            GameMode::Orbit => self.orbit.reset(),
            GameMode::Raiden => self.reset_raiden(playfield),
        }

        if leaving_solar {
            self.solar.disengage_autopilot();
        }
        changed
    }

    /// Save the minigame score (if any) and return to solar mode.
    pub fn exit_to_solar(&mut self, store: &mut dyn ProgressStore) -> bool {
        let finished = match self.mode {
            GameMode::Arcade => Some(self.arcade.score()),
            GameMode::Raiden => Some(self.raiden.score()),
            GameMode::Solar | GameMode::Orbit => None,
        };
        if let Some(score) = finished {
            self.high_scores.record(self.mode, score);
            store.save_high_score(self.mode, score);
        }
        self.set_mode(GameMode::Solar)
    }

    pub fn high_scores(&self) -> HighScores {
        self.high_scores
    }

    pub fn high_scores_mut(&mut self) -> &mut HighScores {
        &mut self.high_scores
    }

    pub fn solar(&self) -> &SolarEngine {
        &self.solar
    }

    pub fn solar_mut(&mut self) -> &mut SolarEngine {
        &mut self.solar
    }

    pub fn arcade(&self) -> &ArcadeEngine {
        &self.arcade
    }

    pub fn arcade_mut(&mut self) -> &mut ArcadeEngine {
        &mut self.arcade
    }

    pub fn orbit(&self) -> &OrbitEngine {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitEngine {
        &mut self.orbit
    }

    pub fn raiden(&self) -> &RaidenEngine {
        &self.raiden
    }

    pub fn raiden_mut(&mut self) -> &mut RaidenEngine {
        &mut self.raiden
    }
}
