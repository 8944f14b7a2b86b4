//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns every mode engine (through the `ModeController`),
//! processes player commands, ticks the active mode and produces
//! `FrameSnapshot`s. Completely headless; side effects leave through the
//! audio and progress ports.

use std::collections::VecDeque;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use solar_core::commands::PlayerCommand;
use solar_core::components::Star;
use solar_core::constants::*;
use solar_core::enums::{GameMode, Key, OrbitStatus};
use solar_core::events::{AudioCue, SimEvent};
use solar_core::state::{FrameSnapshot, HudView};
use solar_core::types::{Playfield, Position, SimTime};

use crate::arcade::ArcadeEngine;
use crate::camera::Camera;
use crate::config::SimConfig;
use crate::hud::{self, HudProjector};
use crate::input::InputAggregator;
use crate::mode::{HighScores, ModeController};
use crate::orbit::OrbitEngine;
use crate::ports::{AudioPort, MutedAudio, NullStore, ProgressStore};
use crate::raiden::RaidenEngine;
use crate::scan::ScanScheduler;
use crate::snapshot::{self, FrameOutputs};
use crate::solar::SolarEngine;

/// The simulation engine. Owns all mode state and the outbound ports.
pub struct SimulationEngine {
    time: SimTime,
    rng: ChaCha8Rng,
    playfield: Playfield,
    modes: ModeController,
    input: InputAggregator,
    camera: Camera,
    scan: ScanScheduler,
    hud: HudProjector,
    command_queue: VecDeque<PlayerCommand>,
    audio: Box<dyn AudioPort>,
    store: Box<dyn ProgressStore>,
    audio_cues: Vec<AudioCue>,
    events: Vec<SimEvent>,
    thrust_level: f64,
    now_ms: f64,
}

impl SimulationEngine {
    /// Create an engine with muted audio and no persistence.
    pub fn new(config: SimConfig) -> Self {
        Self::with_ports(config, Box::new(MutedAudio), Box::new(NullStore))
    }

    /// Create an engine wired to host-provided ports.
    pub fn with_ports(
        config: SimConfig,
        audio: Box<dyn AudioPort>,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let high_scores = HighScores {
            arcade: store.high_score(GameMode::Arcade),
            raiden: store.high_score(GameMode::Raiden),
        };
        let modes = ModeController::new(&mut rng, config.tuning, high_scores);
        info!(
            "simulation engine created (seed {}, playfield {}x{})",
            config.seed, config.playfield.width, config.playfield.height
        );

        Self {
            time: SimTime::default(),
            rng,
            playfield: config.playfield,
            modes,
            input: InputAggregator::new(),
            camera: Camera::default(),
            scan: ScanScheduler::new(),
            hud: HudProjector::default(),
            command_queue: VecDeque::new(),
            audio,
            store,
            audio_cues: Vec::new(),
            events: Vec::new(),
            thrust_level: 0.0,
            now_ms: 0.0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `now_ms` is the host's wall clock; it drives the arcade fire limiter
    /// and the scan debounce, never the physics.
    pub fn tick(&mut self, now_ms: f64) -> FrameSnapshot {
        self.now_ms = now_ms;

        if !self.command_queue.is_empty() {
            self.hud.mark_dirty();
        }
        self.process_commands();

        self.run_active_mode();
        self.camera.decay();
        self.time.advance();

        for cue in &self.audio_cues {
            self.audio.play(*cue);
        }

        let scan_request = if self.modes.mode() == GameMode::Solar {
            self.scan.poll(now_ms)
        } else {
            None
        };
        let hud = if self.hud.due() {
            Some(hud::project(&self.modes, &self.scan))
        } else {
            None
        };

        snapshot::build_snapshot(
            &self.modes,
            self.time,
            &self.camera,
            self.playfield,
            FrameOutputs {
                audio_cues: std::mem::take(&mut self.audio_cues),
                events: std::mem::take(&mut self.events),
                scan_request,
                hud,
            },
        )
    }

    /// Convert a viewport pixel to the coordinates the active mode steers in.
    pub fn pointer_to_world(&self, screen: Position) -> Position {
        match self.modes.mode() {
            GameMode::Solar => self.camera.screen_to_world(screen, self.playfield),
            GameMode::Arcade | GameMode::Orbit | GameMode::Raiden => screen,
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn mode(&self) -> GameMode {
        self.modes.mode()
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    pub fn solar(&self) -> &SolarEngine {
        self.modes.solar()
    }

    pub fn arcade(&self) -> &ArcadeEngine {
        self.modes.arcade()
    }

    pub fn orbit(&self) -> &OrbitEngine {
        self.modes.orbit()
    }

    pub fn raiden(&self) -> &RaidenEngine {
        self.modes.raiden()
    }

    /// Static background stars, generated once.
    pub fn stars(&self) -> &[Star] {
        self.modes.solar().stars()
    }

    pub fn scan(&self) -> &ScanScheduler {
        &self.scan
    }

    /// Project the HUD outside the regular cadence.
    pub fn hud_view(&self) -> HudView {
        hud::project(&self.modes, &self.scan)
    }

    #[cfg(test)]
    pub fn modes_mut(&mut self) -> &mut ModeController {
        &mut self.modes
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => self.input.key_down(key),
            PlayerCommand::KeyUp { key } => self.input.key_up(key),
            PlayerCommand::SetJoystick { x, y } => self.input.set_joystick(x, y),
            PlayerCommand::SetPointerTarget { x, y } => {
                self.input.set_pointer_target(Position::new(x, y));
            }
            PlayerCommand::ClearPointerTarget => self.input.clear_pointer_target(),
            PlayerCommand::Resize { width, height } => {
                if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
                    self.playfield = Playfield::new(width, height);
                } else {
                    warn!("ignoring resize to {width}x{height}");
                }
            }
            PlayerCommand::EnterMode { mode } => {
                self.input.clear_pointer_target();
                let from = self.modes.mode();
                if self.modes.enter_mode(mode, self.playfield, &mut self.rng) {
                    self.mode_changed(from, mode);
                }
            }
            PlayerCommand::ExitToSolar => {
                self.input.clear_pointer_target();
                let from = self.modes.mode();
                if self.modes.exit_to_solar(self.store.as_mut()) {
                    self.mode_changed(from, GameMode::Solar);
                }
            }
            PlayerCommand::EngageAutopilot { target } => {
                if self.modes.solar().body(&target).is_none() {
                    warn!("autopilot target {target:?} is not a known body");
                }
                self.modes.solar_mut().engage_autopilot(&target);
            }
            PlayerCommand::DisengageAutopilot => self.modes.solar_mut().disengage_autopilot(),
            PlayerCommand::DeepScan => {
                if self.modes.mode() == GameMode::Solar {
                    self.scan.request_deep(self.now_ms);
                }
            }
            PlayerCommand::ScanResult { generation, text } => {
                self.scan.apply(generation, text);
            }
            PlayerCommand::FireArcade => {
                if self.modes.mode() == GameMode::Arcade
                    && self.modes.arcade_mut().fire_bullet(self.now_ms)
                {
                    self.audio_cues.push(AudioCue::LaserFired);
                }
            }
            PlayerCommand::SetOrbitParams {
                distance,
                speed,
                angle_degrees,
            } => self.modes.orbit_mut().set_params(distance, speed, angle_degrees),
            PlayerCommand::ApplyOrbitPreset { preset } => {
                self.modes.orbit_mut().apply_preset(preset);
            }
            PlayerCommand::LaunchOrbit => {
                if self.modes.orbit_mut().launch() {
                    self.audio_cues.push(AudioCue::LaserFired);
                }
            }
            PlayerCommand::ResetOrbit => self.modes.orbit_mut().reset(),
            PlayerCommand::SetOrbitZoom { zoom } => self.modes.orbit_mut().set_zoom(zoom),
        }
    }

    /// Held input never carries over into another mode. The scanner only
    /// runs in solar mode: leaving cancels it and returning re-arms it for
    /// the body still in range.
    fn mode_changed(&mut self, from: GameMode, to: GameMode) {
        self.input.release_all();
        if from == GameMode::Solar {
            self.scan.cancel();
        }
        if to == GameMode::Solar {
            let closest = self.modes.solar().closest_body().map(str::to_owned);
            if let Some(body) = closest.as_deref() {
                self.audio_cues.push(AudioCue::Alert);
                self.store.mark_visited(body, self.now_ms);
            }
            self.scan.target_changed(closest.as_deref(), self.now_ms);
        }
        self.events.push(SimEvent::ModeChanged { mode: to });
    }

    /// Tick exactly one mode engine.
    fn run_active_mode(&mut self) {
        let thrust = match self.modes.mode() {
            GameMode::Solar => self.run_solar(),
            GameMode::Arcade => self.run_arcade(),
            GameMode::Orbit => {
                self.run_orbit();
                0.0
            }
            GameMode::Raiden => {
                self.run_raiden();
                0.0
            }
        };
        self.update_thrust_cue(thrust);
    }

    fn run_solar(&mut self) -> f64 {
        let ship_pos = self.modes.solar().ship().position;
        let intent = self.input.intent(Some(ship_pos));
        let outcome = self.modes.solar_mut().tick(&intent);

        if outcome.autopilot_disengaged {
            self.events.push(SimEvent::AutopilotDisengaged);
        }

        if let Some(closest) = outcome.closest_changed {
            if let Some(body) = closest.as_deref() {
                self.audio_cues.push(AudioCue::Alert);
                self.store.mark_visited(body, self.now_ms);
            }
            self.scan.target_changed(closest.as_deref(), self.now_ms);
            self.events.push(SimEvent::ClosestBodyChanged { body: closest });
        }

        self.camera.follow(self.modes.solar().ship().position);
        outcome.thrust
    }

    fn run_arcade(&mut self) -> f64 {
        let ship_pos = self.modes.arcade().ship().position;
        let intent = self.input.intent(Some(ship_pos));

        if self.input.is_held(Key::Fire) && self.modes.arcade_mut().fire_bullet(self.now_ms) {
            self.audio_cues.push(AudioCue::LaserFired);
        }

        let playfield = self.playfield;
        let outcome = self.modes.arcade_mut().tick(&intent, playfield, &mut self.rng);

        if outcome.destroyed > 0 {
            self.audio_cues.push(AudioCue::Explosion);
        }
        if outcome.score_gained > 0 {
            self.camera.shake(SHAKE_ASTEROID_DESTROYED);
        }
        if outcome.collision {
            let arcade = self.modes.arcade_mut();
            arcade.mark_game_over();
            let score = arcade.score();
            self.modes.high_scores_mut().record(GameMode::Arcade, score);
            self.camera.shake(SHAKE_SHIP_DESTROYED);
            self.audio_cues.push(AudioCue::Explosion);
            self.events.push(SimEvent::ArcadeGameOver { score });
            info!("arcade game over, score {score}");
        }
        outcome.thrust
    }

    fn run_orbit(&mut self) {
        if let Some(status) = self.modes.orbit_mut().tick(&mut self.rng) {
            if status == OrbitStatus::Crashed {
                self.audio_cues.push(AudioCue::Explosion);
            }
            self.events.push(SimEvent::OrbitEnded { status });
        }
    }

    fn run_raiden(&mut self) {
        let intent = self.input.intent(None);
        let fire_held = self.input.is_held(Key::Fire);
        let playfield = self.playfield;
        let outcome = self
            .modes
            .raiden_mut()
            .tick(&intent, fire_held, playfield, &mut self.rng);

        if outcome.fired {
            self.audio_cues.push(AudioCue::LaserFired);
        }
        let hits = outcome.collisions;
        if hits.kills > 0 || hits.damage_taken > 0 || outcome.game_over {
            self.audio_cues.push(AudioCue::Explosion);
        }
        if hits.pickups > 0 {
            self.audio_cues.push(AudioCue::Alert);
        }
        if outcome.game_over {
            let score = self.modes.raiden().score();
            self.modes.high_scores_mut().record(GameMode::Raiden, score);
            self.events.push(SimEvent::RaidenGameOver { score });
        }
    }

    /// Emit a thrust cue only when the (quantized) hum level changes.
    fn update_thrust_cue(&mut self, thrust: f64) {
        let level = (thrust.clamp(0.0, 1.0) * 10.0).round() / 10.0;
        if level != self.thrust_level {
            self.thrust_level = level;
            self.audio_cues.push(AudioCue::Thrust { level });
        }
    }
}
