use std::f64::consts::PI;

use crate::commands::PlayerCommand;
use crate::components::{CelestialBody, Ship};
use crate::constants::*;
use crate::enums::*;
use crate::events::{AudioCue, SimEvent};
use crate::types::{wrap_angle, Position, Velocity};

#[test]
fn test_command_json_is_tagged() {
    let cmd = PlayerCommand::EnterMode {
        mode: GameMode::Arcade,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert_eq!(json, r#"{"type":"EnterMode","mode":"Arcade"}"#);

    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmd);
}

#[test]
fn test_orbit_params_command_accepts_partial_update() {
    let cmd: PlayerCommand =
        serde_json::from_str(r#"{"type":"SetOrbitParams","speed":4.5}"#).unwrap();
    assert_eq!(
        cmd,
        PlayerCommand::SetOrbitParams {
            distance: None,
            speed: Some(4.5),
            angle_degrees: None,
        }
    );
}

#[test]
fn test_audio_and_sim_events_serialize() {
    let json = serde_json::to_string(&AudioCue::Thrust { level: 0.5 }).unwrap();
    assert_eq!(json, r#"{"type":"Thrust","level":0.5}"#);

    let json = serde_json::to_string(&SimEvent::ClosestBodyChanged {
        body: Some("Mars".into()),
    })
    .unwrap();
    assert!(json.contains("ClosestBodyChanged"));
    assert!(json.contains("Mars"));
}

#[test]
fn test_tier_split_chain() {
    assert_eq!(AsteroidTier::Large.split(), Some(AsteroidTier::Medium));
    assert_eq!(AsteroidTier::Medium.split(), Some(AsteroidTier::Small));
    assert_eq!(AsteroidTier::Small.split(), None);

    // Tier strictly decreases on split.
    for tier in [AsteroidTier::Large, AsteroidTier::Medium] {
        let child = tier.split().unwrap();
        assert!(child.level() < tier.level());
        assert!(child.size() < tier.size());
        assert!(child.speed() > tier.speed());
    }
}

#[test]
fn test_tier_scores_favor_small_targets() {
    assert_eq!(AsteroidTier::Large.score(), 20);
    assert_eq!(AsteroidTier::Medium.score(), 50);
    assert_eq!(AsteroidTier::Small.score(), 100);
}

#[test]
fn test_enemy_scores() {
    assert_eq!(EnemyKind::Heavy.score(), 50);
    assert_eq!(EnemyKind::Interceptor.score(), 20);
    assert_eq!(EnemyKind::Scout.score(), 10);
}

#[test]
fn test_browser_key_mapping() {
    assert_eq!(Key::from_browser_key("w"), Some(Key::Up));
    assert_eq!(Key::from_browser_key("arrowleft"), Some(Key::Left));
    assert_eq!(Key::from_browser_key(" "), Some(Key::Fire));
    assert_eq!(Key::from_browser_key("enter"), Some(Key::Fire));
    assert_eq!(Key::from_browser_key("q"), None);
}

#[test]
fn test_wrap_angle_takes_short_path() {
    assert!((wrap_angle(0.5) - 0.5).abs() < 1e-12);
    assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
    assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
    for a in [-10.0, -PI, 0.0, PI, 7.0, 100.0] {
        let w = wrap_angle(a);
        assert!((-PI..=PI).contains(&w), "{a} wrapped to {w}");
    }
}

#[test]
fn test_body_position_and_orbital_velocity() {
    let body = CelestialBody {
        name: "Earth".into(),
        color: "#22A6B3".into(),
        radius: 13.0,
        orbit_radius: 320.0,
        orbit_speed: 0.01,
        angle: 0.0,
    };
    let pos = body.position();
    assert!((pos.x - 320.0).abs() < 1e-12);
    assert!(pos.y.abs() < 1e-12);

    // Tangent to the orbit, magnitude R * omega.
    let vel = body.orbital_velocity();
    assert!(vel.x.abs() < 1e-12);
    assert!((vel.y - 3.2).abs() < 1e-12);
}

#[test]
fn test_ship_defaults() {
    let ship = Ship::default();
    assert_eq!(ship.position, Position::new(800.0, 0.0));
    assert_eq!(ship.velocity, Velocity::new(0.0, 2.0));
    assert_eq!(ship.fuel, FUEL_MAX);
    assert!(ship.trail.is_empty());
}

#[test]
fn test_orbit_status_terminality() {
    assert!(!OrbitStatus::Ready.is_terminal());
    assert!(!OrbitStatus::Running.is_terminal());
    assert!(OrbitStatus::Crashed.is_terminal());
    assert!(OrbitStatus::Escaped.is_terminal());
}
