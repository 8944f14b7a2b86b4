//! Frame-driven host: owns the engine and advances it once per animation
//! frame.
//!
//! The page calls `tick` from `requestAnimationFrame` with its wall clock;
//! there is no fixed timestep because every rate in the simulation is per
//! tick. Input arrives as JSON commands or raw pointer/key events and is
//! queued until the next tick.

use log::warn;

use solar_core::commands::PlayerCommand;
use solar_core::enums::Key;
use solar_core::state::FrameSnapshot;
use solar_core::types::Position;
use solar_sim::{SimConfig, SimulationEngine};

use crate::error::HostError;
use crate::state::{CueBuffer, ProgressRecord, SharedProgress};

pub struct FrameHost {
    engine: SimulationEngine,
    progress: SharedProgress,
    audio: CueBuffer,
}

impl FrameHost {
    pub fn new(config: SimConfig, record: ProgressRecord) -> Self {
        let progress = SharedProgress::new(record);
        let audio = CueBuffer::new(progress.clone());
        let engine = SimulationEngine::with_ports(
            config,
            Box::new(audio.clone()),
            Box::new(progress.clone()),
        );
        Self {
            engine,
            progress,
            audio,
        }
    }

    /// Build a host from an optional TOML config overlay and stored progress
    /// JSON. Empty strings select the defaults.
    pub fn from_sources(config_toml: &str, progress_json: &str) -> Result<Self, HostError> {
        let config = if config_toml.trim().is_empty() {
            SimConfig::default()
        } else {
            SimConfig::from_toml_str(config_toml)?
        };
        let record = ProgressRecord::from_json(progress_json)?;
        Ok(Self::new(config, record))
    }

    pub fn push_command(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    /// Queue a `PlayerCommand` given as tagged JSON.
    pub fn push_command_json(&mut self, json: &str) -> Result<(), HostError> {
        match serde_json::from_str::<PlayerCommand>(json) {
            Ok(command) => {
                self.engine.queue_command(command);
                Ok(())
            }
            Err(e) => {
                warn!("dropping unparseable command {json:?}: {e}");
                Err(HostError::Command(e))
            }
        }
    }

    /// Browser key event. Returns false for keys the game does not use.
    pub fn key(&mut self, browser_key: &str, down: bool) -> bool {
        let Some(key) = Key::from_browser_key(&browser_key.to_lowercase()) else {
            return false;
        };
        self.engine.queue_command(if down {
            PlayerCommand::KeyDown { key }
        } else {
            PlayerCommand::KeyUp { key }
        });
        true
    }

    /// Pointer held at a viewport pixel. Converted to the active mode's
    /// coordinates before it is queued.
    pub fn pointer(&mut self, screen_x: f64, screen_y: f64) {
        let world = self.engine.pointer_to_world(Position::new(screen_x, screen_y));
        self.engine.queue_command(PlayerCommand::SetPointerTarget {
            x: world.x,
            y: world.y,
        });
    }

    pub fn pointer_released(&mut self) {
        self.engine.queue_command(PlayerCommand::ClearPointerTarget);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.queue_command(PlayerCommand::Resize { width, height });
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameSnapshot {
        self.engine.tick(now_ms)
    }

    /// Advance one tick and serialize the snapshot for the renderer.
    pub fn tick_json(&mut self, now_ms: f64) -> Result<String, HostError> {
        let snapshot = self.engine.tick(now_ms);
        serde_json::to_string(&snapshot).map_err(HostError::Serialize)
    }

    /// Audio cues played since the last call, as a JSON array.
    pub fn drain_audio_json(&self) -> Result<String, HostError> {
        serde_json::to_string(&self.audio.drain()).map_err(HostError::Serialize)
    }

    pub fn progress_json(&self) -> Result<String, HostError> {
        self.progress.snapshot().to_json()
    }

    pub fn stars_json(&self) -> Result<String, HostError> {
        serde_json::to_string(self.engine.stars()).map_err(HostError::Serialize)
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.progress.set_muted(muted);
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }
}
