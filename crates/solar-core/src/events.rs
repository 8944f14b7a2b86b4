//! Events emitted by the simulation for audio, persistence and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fire-and-forget audio cues. The simulation never waits on or branches
/// on their outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// A shot was fired (also used for orbit launches).
    LaserFired,
    /// Something blew up.
    Explosion,
    /// Proximity contact or pickup collected.
    Alert,
    /// Engine hum level changed (0.0 = silent).
    Thrust { level: f64 },
}

/// Notable state transitions for the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The active mode changed.
    ModeChanged { mode: GameMode },
    /// The closest body in scanner range changed (edge-triggered).
    ClosestBodyChanged { body: Option<String> },
    /// Manual input took the controls back from the autopilot.
    AutopilotDisengaged,
    /// The arcade ship collided with an asteroid.
    ArcadeGameOver { score: u32 },
    /// The shooter player ran out of hull.
    RaidenGameOver { score: u32 },
    /// The orbit sandbox reached a terminal status.
    OrbitEnded { status: OrbitStatus },
}

/// A description lookup the host should perform asynchronously.
///
/// The result must be returned with the same `generation`; results for any
/// older generation are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub generation: u64,
    pub body: String,
    /// Detailed scan requested explicitly by the player.
    pub deep: bool,
}
