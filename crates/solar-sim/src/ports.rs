//! Outbound ports for side effects the simulation triggers but never waits on.
//!
//! The engine holds boxed trait objects so hosts can plug in a browser
//! audio bridge or a persistent progress record. Tests use recording stubs.

use solar_core::enums::GameMode;
use solar_core::events::AudioCue;

/// Sink for fire-and-forget audio cues.
pub trait AudioPort {
    fn play(&mut self, cue: AudioCue);
}

/// Persistent player progress (high scores, visited bodies).
pub trait ProgressStore {
    /// Record a finished score. Implementations keep the maximum per mode.
    fn save_high_score(&mut self, mode: GameMode, score: u32);

    /// Record that the scanner locked onto `body` at wall-clock `now_ms`.
    fn mark_visited(&mut self, body: &str, now_ms: f64);

    /// Best score recorded so far for `mode`.
    fn high_score(&self, _mode: GameMode) -> u32 {
        0
    }
}

/// Audio port that drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutedAudio;

impl AudioPort for MutedAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Progress store that remembers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl ProgressStore for NullStore {
    fn save_high_score(&mut self, _mode: GameMode, _score: u32) {}

    fn mark_visited(&mut self, _body: &str, _now_ms: f64) {}
}
