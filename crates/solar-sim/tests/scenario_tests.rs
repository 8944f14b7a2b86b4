use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use solar_sim::arcade::{collision, spawn};
use solar_sim::core::commands::PlayerCommand;
use solar_sim::core::components::{CelestialBody, RaidenPlayer, Ship};
use solar_sim::core::enums::*;
use solar_sim::core::types::{Position, Velocity};
use solar_sim::raiden::player;
use solar_sim::solar::ship;
use solar_sim::solar::Autopilot;
use solar_sim::{ConfigError, SimConfig, SimulationEngine, Tuning};

fn mars() -> CelestialBody {
    CelestialBody {
        name: "Mars".into(),
        color: "#EB4D4B".into(),
        radius: 10.0,
        orbit_radius: 420.0,
        orbit_speed: 0.008,
        angle: 0.0,
    }
}

// --- Autopilot ---

#[test]
fn autopilot_hands_off_to_rendezvous_inside_margin() {
    let body = mars();
    let mut ship = Ship {
        position: Position::new(420.0 - (body.radius + 140.0), 0.0),
        velocity: Velocity::new(0.0, 0.0),
        ..Default::default()
    };
    let mut pilot = Autopilot::default();
    pilot.engage("Mars");

    let step = pilot
        .step(&mut ship, std::slice::from_ref(&body), &Tuning::default())
        .unwrap();
    assert_eq!(step.phase, AutopilotPhase::Rendezvous);
}

#[test]
fn autopilot_approaches_from_far_away() {
    let body = mars();
    let mut ship = Ship {
        position: Position::new(-400.0, 0.0),
        velocity: Velocity::new(0.0, 0.0),
        ..Default::default()
    };
    let mut pilot = Autopilot::default();
    pilot.engage("Mars");

    let step = pilot
        .step(&mut ship, std::slice::from_ref(&body), &Tuning::default())
        .unwrap();
    assert_eq!(step.phase, AutopilotPhase::Approach);
    assert!(ship.fuel < 100.0);
}

// --- Arcade ---

fn shoot_at(world: &mut World, next_id: &mut u32, target: Position) {
    spawn::spawn_bullet(
        world,
        next_id,
        Position::new(target.x - 15.0, target.y),
        Velocity::default(),
        0.0,
    );
}

#[test]
fn large_asteroid_splits_into_two_mediums() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut next_id = 0;
    let at = Position::new(100.0, 100.0);
    spawn::spawn_asteroid(&mut world, &mut rng, &mut next_id, at, AsteroidTier::Large);
    shoot_at(&mut world, &mut next_id, at);

    let mut despawn = Vec::new();
    let hits = collision::bullets_vs_asteroids(&mut world, &mut despawn);
    assert_eq!(hits.destroyed, 1);
    assert_eq!(hits.score, 20);
    assert_eq!(hits.fragments, vec![(at, AsteroidTier::Medium); 2]);
    assert_eq!(despawn.len(), 1);
}

#[test]
fn small_asteroid_leaves_no_fragments() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut next_id = 0;
    let at = Position::new(300.0, 200.0);
    spawn::spawn_asteroid(&mut world, &mut rng, &mut next_id, at, AsteroidTier::Small);
    shoot_at(&mut world, &mut next_id, at);

    let mut despawn = Vec::new();
    let hits = collision::bullets_vs_asteroids(&mut world, &mut despawn);
    assert_eq!(hits.score, 100);
    assert!(hits.fragments.is_empty());
}

// --- Raiden ---

#[test]
fn shield_absorbs_before_hull() {
    let mut p = RaidenPlayer {
        shield: 30.0,
        ..Default::default()
    };
    player::apply_damage(&mut p, 50.0);
    assert_eq!(p.shield, 0.0);
    assert_eq!(p.hp, 80.0);

    player::apply_damage(&mut p, 500.0);
    assert_eq!(p.hp, 0.0);
}

#[test]
fn raiden_long_run_keeps_hull_and_shield_non_negative() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 9,
        ..Default::default()
    });
    engine.queue_commands([
        PlayerCommand::EnterMode {
            mode: GameMode::Raiden,
        },
        PlayerCommand::KeyDown { key: Key::Fire },
    ]);

    let mut was_over = false;
    for i in 0..3000 {
        engine.tick(f64::from(i) * 16.0);
        let p = engine.raiden().player();
        assert!(p.hp >= 0.0 && p.shield >= 0.0);
        if was_over {
            assert!(engine.raiden().is_game_over(), "game over is sticky");
        }
        was_over = engine.raiden().is_game_over();
    }
}

// --- Solar ---

#[test]
fn recharge_near_sun_is_capped() {
    assert_eq!(ship::recharge_rate(0.0), 0.5);
    assert_eq!(ship::recharge_rate(190.0), 0.1);
    assert_eq!(ship::recharge_rate(1000.0), 0.02);
}

#[test]
fn fuel_stays_in_bounds_under_full_thrust() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::KeyDown { key: Key::Right });

    for i in 0..1500 {
        engine.tick(f64::from(i) * 16.0);
        let fuel = engine.solar().ship().fuel;
        assert!((0.0..=100.0).contains(&fuel), "fuel {fuel} at tick {i}");
    }
    assert!(engine.solar().ship().fuel < 100.0);
}

// --- Orbit ---

#[test]
fn orbit_status_never_leaves_terminal() {
    for preset in [
        OrbitPreset::Circular,
        OrbitPreset::Elliptical,
        OrbitPreset::Escape,
        OrbitPreset::Crash,
    ] {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_commands([
            PlayerCommand::EnterMode {
                mode: GameMode::Orbit,
            },
            PlayerCommand::ApplyOrbitPreset { preset },
            PlayerCommand::LaunchOrbit,
        ]);

        let mut terminal = None;
        for i in 0..4000 {
            engine.tick(f64::from(i) * 16.0);
            let status = engine.orbit().status();
            assert_ne!(status, OrbitStatus::Ready, "{preset:?}");
            match terminal {
                Some(t) => assert_eq!(status, t, "{preset:?}"),
                None if status.is_terminal() => terminal = Some(status),
                None => {}
            }
        }
    }
}

// --- Configuration ---

#[test]
fn partial_toml_overlays_defaults() {
    let config = SimConfig::from_toml_str("seed = 7\n[tuning]\nmax_speed = 10.0\n").unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.tuning.max_speed, 10.0);
    assert_eq!(config.tuning.ship_friction, Tuning::default().ship_friction);
}

#[test]
fn invalid_friction_is_rejected() {
    let err = SimConfig::from_toml_str("[tuning]\nship_friction = 1.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
