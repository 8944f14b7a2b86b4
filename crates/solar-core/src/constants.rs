//! Simulation constants and tuning parameters.
//!
//! Every rate here is applied once per tick. The host ticks once per
//! animation frame, so game feel is tuned for a roughly constant frame rate.

// --- Ship ---

/// Thrust acceleration per tick at full input.
pub const SHIP_ACCELERATION: f64 = 0.2;

/// Velocity multiplier applied each idle tick.
pub const SHIP_FRICTION: f64 = 0.98;

/// Nominal top speed; the hard clamp is `MAX_SPEED * MAX_SPEED_CLAMP_FACTOR`.
pub const MAX_SPEED: f64 = 8.0;

/// Multiplier on `MAX_SPEED` for the hard velocity clamp.
pub const MAX_SPEED_CLAMP_FACTOR: f64 = 1.5;

/// Fraction of the heading error removed per tick under manual control.
pub const MANUAL_TURN_EASING: f64 = 0.15;

/// Initial ship placement in solar mode.
pub const SHIP_START_POSITION: (f64, f64) = (800.0, 0.0);
pub const SHIP_START_VELOCITY: (f64, f64) = (0.0, 2.0);

// --- Fuel ---

pub const FUEL_MAX: f64 = 100.0;

/// Fuel burned per tick at full manual thrust.
pub const FUEL_BURN_MANUAL: f64 = 0.1;

/// Ambient recharge per tick anywhere in the system.
pub const FUEL_RECHARGE_BASE: f64 = 0.02;

/// Distance from the Sun inside which solar recharge is boosted.
pub const FUEL_SOLAR_RADIUS: f64 = 200.0;

/// Divisor of the linear boost: rate = (radius - d) / divisor, so 0.5 at d = 0.
pub const FUEL_SOLAR_DIVISOR: f64 = 400.0;

/// Floor of the boosted recharge rate inside the solar radius.
pub const FUEL_SOLAR_MIN_RATE: f64 = 0.1;

// --- Trail ---

pub const SHIP_TRAIL_MAX: usize = 100;

/// Minimum speed before a trail point is recorded.
pub const SHIP_TRAIL_MIN_SPEED: f64 = 0.5;

// --- Proximity scan ---

/// Base scan range; a body's own radius is added on top.
pub const PROXIMITY_SCAN_RANGE: f64 = 300.0;

/// Delay between a proximity change and the description lookup (ms).
pub const SCAN_DEBOUNCE_MS: f64 = 1500.0;

// --- Autopilot ---

/// Fraction of the bearing error removed per tick.
pub const AUTOPILOT_TURN_EASING: f64 = 0.1;

/// Approach ends this far outside the target's radius.
pub const AUTOPILOT_RENDEZVOUS_MARGIN: f64 = 150.0;

/// Approach thrust as a fraction of `SHIP_ACCELERATION`.
pub const AUTOPILOT_APPROACH_THRUST: f64 = 0.8;

/// Fuel burned per approach tick.
pub const AUTOPILOT_APPROACH_FUEL: f64 = 0.08;

/// Gain on positional offset when forming the ideal rendezvous velocity.
pub const AUTOPILOT_POSITION_GAIN: f64 = 0.05;

/// Fraction of the velocity error corrected per tick.
pub const AUTOPILOT_VELOCITY_GAIN: f64 = 0.1;

/// Correction magnitude below which station-keeping is free.
pub const AUTOPILOT_THRUST_THRESHOLD: f64 = 0.05;

/// Fuel burned per unit of correction magnitude.
pub const AUTOPILOT_STATION_FUEL: f64 = 0.03;

/// Engine hum level while approaching.
pub const AUTOPILOT_APPROACH_HUM: f64 = 0.5;

/// Hum per unit of station-keeping correction, capped at `AUTOPILOT_STATION_HUM_MAX`.
pub const AUTOPILOT_STATION_HUM_GAIN: f64 = 5.0;
pub const AUTOPILOT_STATION_HUM_MAX: f64 = 0.3;

// --- Solar decor ---

pub const BELT_ASTEROID_COUNT: usize = 300;
pub const BELT_INNER_RADIUS: f64 = 480.0;
pub const BELT_OUTER_RADIUS: f64 = 600.0;
pub const STAR_COUNT: usize = 1000;
pub const STARFIELD_EXTENT: f64 = 6000.0;

// --- Camera ---

pub const CAMERA_FOLLOW_EASING: f64 = 0.1;
pub const CAMERA_SHAKE_DECAY: f64 = 0.9;
pub const CAMERA_SHAKE_FLOOR: f64 = 0.1;
pub const SHAKE_ASTEROID_DESTROYED: f64 = 5.0;
pub const SHAKE_SHIP_DESTROYED: f64 = 15.0;

// --- Input ---

/// Pointer targets closer than this to the ship are ignored.
pub const POINTER_DEAD_ZONE: f64 = 30.0;

// --- Arcade ---

pub const ASTEROID_SIZE_LARGE: f64 = 40.0;
pub const ASTEROID_SIZE_MEDIUM: f64 = 20.0;
pub const ASTEROID_SIZE_SMALL: f64 = 10.0;
pub const ASTEROID_SPEED_LARGE: f64 = 1.0;
pub const ASTEROID_SPEED_MEDIUM: f64 = 2.0;
pub const ASTEROID_SPEED_SMALL: f64 = 3.0;

/// Asteroids wrap this far outside the playfield.
pub const ASTEROID_WRAP_MARGIN: f64 = 50.0;

/// Half-width of the square around the playfield centre kept clear at spawn.
pub const ASTEROID_SAFE_ZONE: f64 = 150.0;

/// Asteroids per wave before the score bonus.
pub const ARCADE_WAVE_BASE: u32 = 5;

/// One extra asteroid per this many points.
pub const ARCADE_WAVE_SCORE_STEP: u32 = 1000;

/// Minimum wall-clock gap between shots (ms).
pub const BULLET_COOLDOWN_MS: f64 = 250.0;
pub const BULLET_MUZZLE_SPEED: f64 = 10.0;
pub const BULLET_NOSE_OFFSET: f64 = 15.0;
pub const BULLET_LIFE_TICKS: i32 = 60;

/// Added to asteroid size for the ship hit test.
pub const SHIP_HIT_RADIUS: f64 = 10.0;

/// Velocity multiplier applied to the arcade ship each tick.
pub const ARCADE_SHIP_FRICTION: f64 = 0.99;

// --- Orbit sandbox ---

/// Gravitational parameter of the central body.
pub const CENTRAL_MASS: f64 = 1800.0;
pub const ORBIT_CRASH_RADIUS: f64 = 45.0;
pub const ORBIT_ESCAPE_RADIUS: f64 = 5000.0;
pub const ORBIT_TRAIL_MAX: usize = 500;

/// Probability a running tick records a trail point.
pub const ORBIT_TRAIL_PROBABILITY: f64 = 0.9;
pub const ORBIT_DEFAULT_DISTANCE: f64 = 250.0;
pub const ORBIT_DEFAULT_SPEED: f64 = 3.0;
pub const ORBIT_DEFAULT_ZOOM: f64 = 0.8;
pub const ORBIT_ZOOM_MIN: f64 = 0.1;
pub const ORBIT_ZOOM_MAX: f64 = 5.0;

// --- Raiden ---

pub const RAIDEN_MAX_HP: f64 = 100.0;
pub const RAIDEN_MAX_SHIELD: f64 = 100.0;
pub const RAIDEN_MAX_LEVEL: u8 = 3;

/// Player keeps this far inside the playfield edges.
pub const RAIDEN_PLAYER_MARGIN: f64 = 20.0;

/// Player spawns this far above the bottom edge.
pub const RAIDEN_PLAYER_START_OFFSET: f64 = 100.0;
pub const RAIDEN_BASE_SPEED: f64 = 8.0;
pub const RAIDEN_SPEED_PER_LEVEL: f64 = 2.0;
pub const RAIDEN_FIRE_COOLDOWN: i32 = 8;
pub const RAIDEN_BULLET_SPEED: f64 = 15.0;
pub const RAIDEN_SPREAD_VX: f64 = 5.0;

/// Intent magnitude that counts as a fire request.
pub const RAIDEN_AUTOFIRE_INPUT: f64 = 0.1;
pub const RAIDEN_SCROLL_SPEED: f64 = 3.0;

/// Ticks between enemy spawns.
pub const RAIDEN_WAVE_INTERVAL: u32 = 60;
pub const RAIDEN_SPAWN_MARGIN: f64 = 50.0;
pub const RAIDEN_SPAWN_Y: f64 = -50.0;

/// Interceptors reverse this far inside the side edges.
pub const INTERCEPTOR_BOUNCE_MARGIN: f64 = 50.0;

pub const HEAVY_FIRE_INTERVAL: i32 = 120;

/// Heavies hold fire this close to the bottom edge.
pub const HEAVY_FIRE_FLOOR: f64 = 100.0;
pub const HEAVY_SHOT_SPEED: f64 = 5.0;
pub const HEAVY_SHOT_DAMAGE: f64 = 10.0;

pub const CONTACT_DAMAGE: f64 = 20.0;

/// Player hitbox half-extent against enemy hulls.
pub const PLAYER_HULL_HALF: f64 = 20.0;

/// Player hitbox half-extent against enemy bullets.
pub const PLAYER_BULLET_HITBOX: f64 = 15.0;

/// Padding added to enemy half-extents for player bullets.
pub const ENEMY_HITBOX_PADDING: f64 = 5.0;

pub const POWERUP_DROP_CHANCE: f64 = 0.15;
pub const POWERUP_PICKUP_RADIUS: f64 = 30.0;
pub const POWERUP_DRIFT_SPEED: f64 = 2.0;
pub const POWERUP_HEALTH: f64 = 25.0;
pub const POWERUP_SHIELD: f64 = 50.0;

pub const PARTICLE_MAX_LIFE: f64 = 50.0;
pub const PARTICLE_MIN_LIFE: f64 = 30.0;
pub const PARTICLE_MAX_SPEED: f64 = 5.0;
pub const PARTICLES_PER_HIT: usize = 3;
pub const PARTICLES_PER_KILL: usize = 10;
pub const PARTICLES_PER_DAMAGE: usize = 5;

/// Projectiles and pickups are pruned this far past the top/bottom edges.
pub const RAIDEN_PRUNE_MARGIN: f64 = 50.0;

/// Enemies are pruned this far below the bottom edge.
pub const RAIDEN_ENEMY_PRUNE_MARGIN: f64 = 100.0;

// --- Presentation ---

/// Ticks between HUD projections (about 12 per second at 60 fps).
pub const HUD_SYNC_INTERVAL: u32 = 5;
