//! Engine-level tests: determinism, command handling, ports, and the
//! cross-mode wiring of events, cues, scans and HUD projection.

use std::cell::RefCell;
use std::rc::Rc;

use solar_core::commands::PlayerCommand;
use solar_core::components::{ArcadeAsteroid, Outline, Spin};
use solar_core::constants::*;
use solar_core::enums::*;
use solar_core::events::{AudioCue, SimEvent};
use solar_core::state::{FrameSnapshot, ModeView};
use solar_core::types::{Playfield, Position, Velocity};

use crate::config::SimConfig;
use crate::engine::SimulationEngine;
use crate::ports::{AudioPort, ProgressStore};

// ---- Test ports ----

#[derive(Clone, Default)]
struct RecordingAudio(Rc<RefCell<Vec<AudioCue>>>);

impl AudioPort for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.0.borrow_mut().push(cue);
    }
}

#[derive(Default)]
struct Progress {
    scores: Vec<(GameMode, u32)>,
    visited: Vec<String>,
    seeded_arcade: u32,
}

#[derive(Clone, Default)]
struct RecordingStore(Rc<RefCell<Progress>>);

impl ProgressStore for RecordingStore {
    fn save_high_score(&mut self, mode: GameMode, score: u32) {
        self.0.borrow_mut().scores.push((mode, score));
    }

    fn mark_visited(&mut self, body: &str, _now_ms: f64) {
        self.0.borrow_mut().visited.push(body.to_owned());
    }

    fn high_score(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Arcade => self.0.borrow().seeded_arcade,
            _ => 0,
        }
    }
}

fn engine_with_ports() -> (SimulationEngine, RecordingAudio, RecordingStore) {
    let audio = RecordingAudio::default();
    let store = RecordingStore::default();
    let engine = SimulationEngine::with_ports(
        SimConfig::default(),
        Box::new(audio.clone()),
        Box::new(store.clone()),
    );
    (engine, audio, store)
}

/// Park the solar ship at the Sun so the scanner locks on.
fn park_at_sun(engine: &mut SimulationEngine) {
    let ship = engine.modes_mut().solar_mut().ship_mut();
    ship.position = Position::new(0.0, 0.0);
    ship.velocity = Velocity::new(0.0, 0.0);
}

fn thrust_cues(snap: &FrameSnapshot) -> Vec<f64> {
    snap.audio_cues
        .iter()
        .filter_map(|c| match c {
            AudioCue::Thrust { level } => Some(*level),
            _ => None,
        })
        .collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::EnterMode {
            mode: GameMode::Raiden,
        });
        engine.queue_command(PlayerCommand::KeyDown { key: Key::Fire });
    }

    for i in 0..300 {
        let now = f64::from(i) * 16.0;
        let json_a = serde_json::to_string(&engine_a.tick(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(now)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    engine_a.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine_b.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });

    let json_a = serde_json::to_string(&engine_a.tick(0.0)).unwrap();
    let json_b = serde_json::to_string(&engine_b.tick(0.0)).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should place asteroids differently");
}

// ---- Modes ----

#[test]
fn test_enter_mode_emits_event_once() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Orbit,
    });
    let snap = engine.tick(0.0);
    assert_eq!(snap.mode, GameMode::Orbit);
    assert!(snap.events.contains(&SimEvent::ModeChanged {
        mode: GameMode::Orbit
    }));
    assert!(matches!(snap.view, ModeView::Orbit(_)));

    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Orbit,
    });
    let snap = engine.tick(16.0);
    assert!(snap.events.is_empty(), "re-entering is a reset, not a change");
}

#[test]
fn test_only_active_mode_advances() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let before: Vec<f64> = engine.solar().bodies().iter().map(|b| b.angle).collect();

    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Raiden,
    });
    for i in 0..30 {
        engine.tick(f64::from(i) * 16.0);
    }
    let after: Vec<f64> = engine.solar().bodies().iter().map(|b| b.angle).collect();
    assert_eq!(before, after, "solar system is frozen while away");
    assert!(engine.raiden().scroll() > 0.0);
}

#[test]
fn test_exit_saves_high_score() {
    let (mut engine, _audio, store) = engine_with_ports();
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(0.0);
    engine.queue_command(PlayerCommand::ExitToSolar);
    let snap = engine.tick(16.0);

    assert_eq!(snap.mode, GameMode::Solar);
    assert_eq!(store.0.borrow().scores, vec![(GameMode::Arcade, 0)]);
}

#[test]
fn test_high_score_seeded_from_store() {
    let audio = RecordingAudio::default();
    let store = RecordingStore::default();
    store.0.borrow_mut().seeded_arcade = 4200;
    let engine = SimulationEngine::with_ports(
        SimConfig::default(),
        Box::new(audio),
        Box::new(store),
    );
    assert_eq!(engine.hud_view().arcade.high_score, 4200);
}

// ---- Audio ----

#[test]
fn test_thrust_cue_is_edge_triggered() {
    let (mut engine, audio, _store) = engine_with_ports();
    engine.queue_command(PlayerCommand::KeyDown { key: Key::Up });
    let first = engine.tick(0.0);
    assert_eq!(thrust_cues(&first), vec![1.0]);

    let second = engine.tick(16.0);
    assert!(thrust_cues(&second).is_empty());

    engine.queue_command(PlayerCommand::KeyUp { key: Key::Up });
    let third = engine.tick(32.0);
    assert_eq!(thrust_cues(&third), vec![0.0]);

    // Every snapshot cue also reached the port.
    let played = audio.0.borrow();
    assert!(played.contains(&AudioCue::Thrust { level: 1.0 }));
    assert!(played.contains(&AudioCue::Thrust { level: 0.0 }));
}

#[test]
fn test_arcade_fire_is_rate_limited() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(0.0);

    engine.queue_command(PlayerCommand::FireArcade);
    let snap = engine.tick(1000.0);
    assert!(snap.audio_cues.contains(&AudioCue::LaserFired));

    engine.queue_command(PlayerCommand::FireArcade);
    let snap = engine.tick(1100.0);
    assert!(!snap.audio_cues.contains(&AudioCue::LaserFired));
    assert_eq!(engine.arcade().bullet_count(), 1);
}

#[test]
fn test_fire_arcade_ignored_outside_arcade() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::FireArcade);
    let snap = engine.tick(0.0);
    assert!(!snap.audio_cues.contains(&AudioCue::LaserFired));
}

// ---- Arcade game over ----

#[test]
fn test_arcade_collision_ends_game() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(0.0);

    let ship = engine.arcade().ship().position;
    engine.modes_mut().arcade_mut().world_mut().spawn((
        ArcadeAsteroid {
            id: 999,
            tier: AsteroidTier::Large,
            size: AsteroidTier::Large.size(),
        },
        ship,
        Velocity::default(),
        Spin::default(),
        Outline::default(),
    ));

    let snap = engine.tick(16.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ArcadeGameOver { .. })));
    assert!(engine.arcade().is_game_over());
    assert!((snap.shake - SHAKE_SHIP_DESTROYED * CAMERA_SHAKE_DECAY).abs() < 1e-9);
    assert!(engine.hud_view().arcade.game_over);
}

// ---- Scanner ----

#[test]
fn test_proximity_scan_round_trip() {
    let (mut engine, audio, store) = engine_with_ports();
    park_at_sun(&mut engine);

    let snap = engine.tick(0.0);
    assert!(snap.events.contains(&SimEvent::ClosestBodyChanged {
        body: Some("Sun".into())
    }));
    assert!(snap.audio_cues.contains(&AudioCue::Alert));
    assert!(snap.scan_request.is_none(), "debounced");
    assert_eq!(store.0.borrow().visited, vec!["Sun".to_owned()]);
    assert!(audio.0.borrow().contains(&AudioCue::Alert));

    let snap = engine.tick(SCAN_DEBOUNCE_MS);
    let request = snap.scan_request.expect("scan due after debounce");
    assert_eq!(request.body, "Sun");

    engine.queue_command(PlayerCommand::ScanResult {
        generation: request.generation,
        text: "A G-type main-sequence star.".into(),
    });
    let snap = engine.tick(SCAN_DEBOUNCE_MS + 16.0);
    let hud = snap.hud.expect("commands force a HUD projection");
    assert_eq!(hud.description.as_deref(), Some("A G-type main-sequence star."));
    assert!(!hud.scanning);
    assert_eq!(hud.closest_body.as_deref(), Some("Sun"));
}

#[test]
fn test_stale_scan_result_rejected() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    park_at_sun(&mut engine);
    engine.tick(0.0);
    let request = engine.tick(SCAN_DEBOUNCE_MS).scan_request.unwrap();

    engine.queue_command(PlayerCommand::DeepScan);
    engine.queue_command(PlayerCommand::ScanResult {
        generation: request.generation,
        text: "stale".into(),
    });
    let snap = engine.tick(SCAN_DEBOUNCE_MS + 16.0);
    let deep = snap.scan_request.expect("deep scan is immediate");
    assert!(deep.deep);
    assert!(deep.generation > request.generation);
    assert_eq!(engine.scan().description(), None);
}

#[test]
fn test_scan_result_stale_after_leaving_solar() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    park_at_sun(&mut engine);
    engine.tick(0.0);
    let request = engine.tick(SCAN_DEBOUNCE_MS).scan_request.unwrap();

    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(SCAN_DEBOUNCE_MS + 16.0);
    assert!(engine.scan().generation() > request.generation);

    engine.queue_command(PlayerCommand::ScanResult {
        generation: request.generation,
        text: "late".into(),
    });
    engine.tick(SCAN_DEBOUNCE_MS + 32.0);
    assert_eq!(engine.scan().description(), None);
    assert!(!engine.scan().is_scanning());
}

#[test]
fn test_returning_to_solar_rearms_scan() {
    let (mut engine, _audio, store) = engine_with_ports();
    park_at_sun(&mut engine);
    engine.tick(0.0);

    // The debounced lookup never comes due while away.
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Orbit,
    });
    engine.tick(100.0);
    assert!(engine.tick(SCAN_DEBOUNCE_MS).scan_request.is_none());

    engine.queue_command(PlayerCommand::ExitToSolar);
    let back = engine.tick(2000.0);
    assert!(back.audio_cues.contains(&AudioCue::Alert));
    assert!(back.scan_request.is_none());
    assert_eq!(store.0.borrow().visited, vec!["Sun".to_owned(), "Sun".to_owned()]);

    assert!(engine.tick(2000.0 + SCAN_DEBOUNCE_MS - 16.0).scan_request.is_none());
    let request = engine
        .tick(2000.0 + SCAN_DEBOUNCE_MS)
        .scan_request
        .expect("fresh scan after the debounce");
    assert_eq!(request.body, "Sun");
    assert!(!request.deep);
}

#[test]
fn test_held_keys_released_on_mode_change() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::KeyDown { key: Key::Up });
    engine.tick(0.0);
    assert!(engine.solar().ship().thrusting);

    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(16.0);
    assert!(!engine.arcade().ship().thrusting);
    assert_eq!(engine.arcade().ship().velocity, Velocity::new(0.0, 0.0));
}

// ---- HUD ----

#[test]
fn test_hud_cadence() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let projected: Vec<bool> = (0..10)
        .map(|i| engine.tick(f64::from(i) * 16.0).hud.is_some())
        .collect();
    assert_eq!(projected.iter().filter(|p| **p).count(), 2);

    engine.queue_command(PlayerCommand::DisengageAutopilot);
    assert!(engine.tick(500.0).hud.is_some(), "commands force a projection");
}

// ---- Orbit ----

#[test]
fn test_orbit_launch_and_crash_events() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::EnterMode {
            mode: GameMode::Orbit,
        },
        PlayerCommand::ApplyOrbitPreset {
            preset: OrbitPreset::Crash,
        },
        PlayerCommand::LaunchOrbit,
    ]);
    let snap = engine.tick(0.0);
    assert!(snap.audio_cues.contains(&AudioCue::LaserFired));

    let mut ended = None;
    for i in 1..5000 {
        let snap = engine.tick(f64::from(i) * 16.0);
        if let Some(SimEvent::OrbitEnded { status }) = snap
            .events
            .iter()
            .find(|e| matches!(e, SimEvent::OrbitEnded { .. }))
        {
            ended = Some(*status);
            assert!(snap.audio_cues.contains(&AudioCue::Explosion));
            break;
        }
    }
    assert_eq!(ended, Some(OrbitStatus::Crashed));
}

#[test]
fn test_orbit_params_partial_update() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::SetOrbitParams {
        distance: Some(320.0),
        speed: None,
        angle_degrees: None,
    });
    engine.tick(0.0);
    let params = engine.orbit().params();
    assert_eq!(params.distance, 320.0);
    assert_eq!(params.speed, ORBIT_DEFAULT_SPEED);
    assert_eq!(engine.orbit().satellite().x, 320.0);
}

// ---- Input plumbing ----

#[test]
fn test_pointer_unprojection_depends_on_mode() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let screen = Position::new(400.0, 300.0);
    // Solar: viewport centre is the camera position.
    assert_eq!(engine.pointer_to_world(screen), engine.camera().position);

    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(0.0);
    assert_eq!(engine.pointer_to_world(screen), screen);
}

#[test]
fn test_bad_resize_is_ignored() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::Resize {
        width: -5.0,
        height: f64::NAN,
    });
    let snap = engine.tick(0.0);
    assert_eq!(snap.playfield, engine.playfield());
    assert_eq!(engine.playfield().width, 800.0);

    engine.queue_command(PlayerCommand::Resize {
        width: 1024.0,
        height: 768.0,
    });
    engine.tick(16.0);
    assert_eq!(engine.playfield().width, 1024.0);
}

#[test]
fn test_manual_input_disengages_autopilot_event() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EngageAutopilot {
        target: "Earth".into(),
    });
    engine.tick(0.0);
    assert!(engine.solar().autopilot().is_active());

    engine.queue_command(PlayerCommand::SetJoystick { x: 0.5, y: 0.0 });
    let snap = engine.tick(16.0);
    assert!(snap.events.contains(&SimEvent::AutopilotDisengaged));
    assert!(!engine.solar().autopilot().is_active());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(0.0);
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"mode\":\"Solar\""));
    assert_eq!(engine.stars().len(), STAR_COUNT);
}

// ---- Scenarios ----

#[test]
fn test_arcade_asteroid_wraps_past_margin() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    });
    engine.tick(0.0);
    assert_eq!(engine.playfield(), Playfield::default());

    let world = engine.modes_mut().arcade_mut().world_mut();
    world.clear();
    world.spawn((
        ArcadeAsteroid {
            id: 500,
            tier: AsteroidTier::Small,
            size: AsteroidTier::Small.size(),
        },
        Position::new(-60.0, 300.0),
        Velocity::new(0.0, 0.0),
        Spin::default(),
        Outline::default(),
    ));

    let snap = engine.tick(16.0);
    let ModeView::Arcade(view) = snap.view else {
        panic!("expected the arcade view");
    };
    assert_eq!(view.asteroids.len(), 1);
    assert_eq!(view.asteroids[0].x, 850.0);
    assert_eq!(view.asteroids[0].y, 300.0);
}

#[test]
fn test_orbit_launch_inside_crash_radius() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::EnterMode {
            mode: GameMode::Orbit,
        },
        PlayerCommand::SetOrbitParams {
            distance: Some(40.0),
            speed: Some(0.0),
            angle_degrees: None,
        },
        PlayerCommand::LaunchOrbit,
    ]);
    let snap = engine.tick(0.0);
    assert!(snap.events.contains(&SimEvent::OrbitEnded {
        status: OrbitStatus::Crashed
    }));
    assert_eq!(engine.orbit().status(), OrbitStatus::Crashed);
}

#[test]
fn test_raiden_spread_volley() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::EnterMode {
        mode: GameMode::Raiden,
    });
    engine.tick(0.0);
    engine.modes_mut().raiden_mut().player_mut().weapon_level = 3;

    engine.queue_command(PlayerCommand::KeyDown { key: Key::Fire });
    let snap = engine.tick(16.0);
    assert!(snap.audio_cues.contains(&AudioCue::LaserFired));
    assert_eq!(engine.raiden().projectile_count(ProjectileOwner::Player), 5);
}

#[test]
fn test_fuel_recharge_capped_at_sun() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    park_at_sun(&mut engine);
    engine.modes_mut().solar_mut().ship_mut().fuel = 10.0;
    engine.tick(0.0);
    let fuel = engine.solar().ship().fuel;
    assert!((fuel - 10.5).abs() < 1e-9, "fuel {fuel}");
}
