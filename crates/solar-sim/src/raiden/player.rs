//! Shooter player: movement, weapon patterns, damage and pickups.

use solar_core::components::RaidenPlayer;
use solar_core::constants::*;
use solar_core::enums::PowerUpKind;
use solar_core::types::{Playfield, Position, Velocity};

use crate::input::Intent;

/// Place a fresh player near the bottom centre.
pub fn spawn_player(playfield: Playfield) -> RaidenPlayer {
    RaidenPlayer {
        x: playfield.width / 2.0,
        y: playfield.height - RAIDEN_PLAYER_START_OFFSET,
        ..Default::default()
    }
}

/// Movement speed for the current speed level.
pub fn speed(player: &RaidenPlayer) -> f64 {
    RAIDEN_BASE_SPEED + f64::from(player.speed_level.saturating_sub(1)) * RAIDEN_SPEED_PER_LEVEL
}

/// Move by intent and keep the player inside the playfield margin.
pub fn move_player(player: &mut RaidenPlayer, intent: &Intent, playfield: Playfield) {
    let speed = speed(player);
    player.x += intent.x * speed;
    player.y += intent.y * speed;
    player.x = clamp_axis(player.x, playfield.width);
    player.y = clamp_axis(player.y, playfield.height);
}

fn clamp_axis(value: f64, extent: f64) -> f64 {
    let hi = (extent - RAIDEN_PLAYER_MARGIN).max(RAIDEN_PLAYER_MARGIN);
    value.clamp(RAIDEN_PLAYER_MARGIN, hi)
}

/// Muzzle positions and velocities for one volley at the current weapon level.
pub fn volley(player: &RaidenPlayer) -> Vec<(Position, Velocity)> {
    let (x, y) = (player.x, player.y);
    let mut shots = vec![(
        Position::new(x, y - 20.0),
        Velocity::new(0.0, -RAIDEN_BULLET_SPEED),
    )];

    if player.weapon_level >= 2 {
        for dx in [-10.0, 10.0] {
            shots.push((
                Position::new(x + dx, y - 15.0),
                Velocity::new(0.0, -RAIDEN_BULLET_SPEED),
            ));
        }
    }

    if player.weapon_level >= 3 {
        for vx in [-RAIDEN_SPREAD_VX, RAIDEN_SPREAD_VX] {
            shots.push((
                Position::new(x, y - 15.0),
                Velocity::new(vx, -RAIDEN_BULLET_SPEED * 0.9),
            ));
        }
    }

    shots
}

/// Shield absorbs first; the overflow hits the hull, which never drops below 0.
pub fn apply_damage(player: &mut RaidenPlayer, amount: f64) {
    let mut remaining = amount;
    if player.shield > 0.0 {
        let absorbed = player.shield.min(remaining);
        player.shield -= absorbed;
        remaining -= absorbed;
    }
    player.hp = (player.hp - remaining).max(0.0);
}

pub fn apply_powerup(player: &mut RaidenPlayer, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Health => player.hp = (player.hp + POWERUP_HEALTH).min(player.max_hp),
        PowerUpKind::Spread => player.weapon_level = (player.weapon_level + 1).min(RAIDEN_MAX_LEVEL),
        PowerUpKind::Speed => player.speed_level = (player.speed_level + 1).min(RAIDEN_MAX_LEVEL),
        PowerUpKind::Shield => player.shield = (player.shield + POWERUP_SHIELD).min(RAIDEN_MAX_SHIELD),
    }
}
