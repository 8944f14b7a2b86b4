//! Host-side state shared between the simulation ports and the page.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use solar_core::enums::GameMode;
use solar_core::events::AudioCue;
use solar_sim::ports::{AudioPort, ProgressStore};

use crate::error::HostError;

/// Visits to one body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub count: u32,
    pub last_visited_ms: f64,
}

/// Everything persisted between sessions. The page stores the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub arcade_high_score: u32,
    pub raiden_high_score: u32,
    pub visits: BTreeMap<String, VisitRecord>,
    pub muted: bool,
}

impl ProgressRecord {
    /// Parse stored progress. An empty string is a fresh record.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(HostError::Progress)
    }

    pub fn to_json(&self) -> Result<String, HostError> {
        serde_json::to_string(self).map_err(HostError::Serialize)
    }

    pub fn high_score(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Arcade => self.arcade_high_score,
            GameMode::Raiden => self.raiden_high_score,
            GameMode::Solar | GameMode::Orbit => 0,
        }
    }

    /// Keep the best score per mode. Returns true on a new record.
    pub fn record_score(&mut self, mode: GameMode, score: u32) -> bool {
        let slot = match mode {
            GameMode::Arcade => &mut self.arcade_high_score,
            GameMode::Raiden => &mut self.raiden_high_score,
            GameMode::Solar | GameMode::Orbit => return false,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    pub fn visit(&mut self, body: &str, now_ms: f64) {
        let entry = self.visits.entry(body.to_owned()).or_default();
        entry.count += 1;
        entry.last_visited_ms = now_ms;
    }

    pub fn visit_count(&self, body: &str) -> u32 {
        self.visits.get(body).map_or(0, |v| v.count)
    }
}

/// The progress record, shared by the engine's store port and the host.
#[derive(Debug, Clone, Default)]
pub struct SharedProgress(Rc<RefCell<ProgressRecord>>);

impl SharedProgress {
    pub fn new(record: ProgressRecord) -> Self {
        Self(Rc::new(RefCell::new(record)))
    }

    pub fn snapshot(&self) -> ProgressRecord {
        self.0.borrow().clone()
    }

    pub fn is_muted(&self) -> bool {
        self.0.borrow().muted
    }

    pub fn set_muted(&self, muted: bool) {
        self.0.borrow_mut().muted = muted;
    }
}

impl ProgressStore for SharedProgress {
    fn save_high_score(&mut self, mode: GameMode, score: u32) {
        if self.0.borrow_mut().record_score(mode, score) {
            log::info!("new {mode:?} high score: {score}");
        }
    }

    fn mark_visited(&mut self, body: &str, now_ms: f64) {
        self.0.borrow_mut().visit(body, now_ms);
    }

    fn high_score(&self, mode: GameMode) -> u32 {
        self.0.borrow().high_score(mode)
    }
}

/// Audio port that buffers cues for the page's synthesizer. Cues are
/// dropped while the player has muted the game.
#[derive(Debug, Clone)]
pub struct CueBuffer {
    cues: Rc<RefCell<Vec<AudioCue>>>,
    progress: SharedProgress,
}

impl CueBuffer {
    pub fn new(progress: SharedProgress) -> Self {
        Self {
            cues: Rc::default(),
            progress,
        }
    }

    /// Take every cue buffered since the last drain.
    pub fn drain(&self) -> Vec<AudioCue> {
        std::mem::take(&mut *self.cues.borrow_mut())
    }
}

impl AudioPort for CueBuffer {
    fn play(&mut self, cue: AudioCue) {
        if !self.progress.is_muted() {
            self.cues.borrow_mut().push(cue);
        }
    }
}
