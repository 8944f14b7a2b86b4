//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player and host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// A mapped key was pressed.
    KeyDown { key: Key },
    /// A mapped key was released.
    KeyUp { key: Key },
    /// Virtual joystick vector, already normalized by the widget.
    SetJoystick { x: f64, y: f64 },
    /// Pointer/touch steering target in world coordinates.
    SetPointerTarget { x: f64, y: f64 },
    /// Pointer/touch released.
    ClearPointerTarget,
    /// Host viewport changed size.
    Resize { width: f64, height: f64 },

    // --- Modes ---
    /// Enter a mode, resetting that mode's engine.
    EnterMode { mode: GameMode },
    /// Leave the current minigame, saving its score, and return to solar mode.
    ExitToSolar,

    // --- Solar ---
    /// Engage the autopilot toward a named body.
    EngageAutopilot { target: String },
    /// Disengage the autopilot.
    DisengageAutopilot,
    /// Request an immediate detailed scan of the closest body.
    DeepScan,
    /// Description text returned by the scan service for a request.
    ScanResult { generation: u64, text: String },

    // --- Arcade ---
    /// On-screen fire button.
    FireArcade,

    // --- Orbit ---
    /// Update any subset of the launch parameters.
    SetOrbitParams {
        #[serde(default)]
        distance: Option<f64>,
        #[serde(default)]
        speed: Option<f64>,
        #[serde(default)]
        angle_degrees: Option<f64>,
    },
    /// Load canned launch parameters.
    ApplyOrbitPreset { preset: OrbitPreset },
    /// Launch the satellite.
    LaunchOrbit,
    /// Return the sandbox to `Ready`.
    ResetOrbit,
    /// Orbit view zoom.
    SetOrbitZoom { zoom: f64 },
}
