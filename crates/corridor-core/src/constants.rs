//! Simulation constants and tuning parameters.
//!
//! Distances are corridor units, times are milliseconds unless noted.

/// Nominal display refresh rate the tuning was made for (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal frame period in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- Play volume ---

/// Enemies at or past this x have left the play volume.
pub const ENEMY_EXIT_X: f64 = 50.0;

/// Projectiles below this x have left the play volume.
pub const PROJECTILE_EXIT_X: f64 = -300.0;

/// Corridor depth at which enemies spawn.
pub const ENEMY_SPAWN_X: f64 = -500.0;

/// Lateral (z) half-width of the play field.
pub const BOUNDARY_LATERAL: f64 = 19.0;

/// Vertical (y) half-height of the play field.
pub const BOUNDARY_VERTICAL: f64 = 19.0;

// --- Difficulty ---

/// Spawn interval at t = 0.
pub const BASE_SPAWN_INTERVAL_MS: f64 = 500.0;

/// Spawn interval floor.
pub const MIN_SPAWN_INTERVAL_MS: f64 = 25.0;

/// Spawn interval decrease per second of elapsed time.
pub const SPAWN_INTERVAL_DECAY_PER_SEC: f64 = 2.0;

/// Enemy speed at t = 0 (units per tick).
pub const BASE_ENEMY_SPEED: f64 = 1.0;

/// Enemy speed ceiling (units per tick).
pub const MAX_ENEMY_SPEED: f64 = 10.0;

/// Enemy speed increase per second of elapsed time.
pub const ENEMY_SPEED_GAIN_PER_SEC: f64 = 0.01;

/// Upper bound of the random speed jitter added to each enemy.
pub const ENEMY_SPEED_JITTER: f64 = 3.25;

// --- Asteroids ---

pub const ASTEROID_MIN_RADIUS: f64 = 1.0;
pub const ASTEROID_MAX_RADIUS: f64 = 4.0;

/// Octahedron subdivision detail range (exclusive upper bound).
pub const ASTEROID_MIN_DETAIL: u32 = 1;
pub const ASTEROID_MAX_DETAIL: u32 = 5;

// --- Player ---

pub const SHIP_MAX_SPEED: f64 = 2.0;
pub const SHIP_ACCELERATION: f64 = 0.0075;
pub const SHIP_TILT_SPEED: f64 = 0.015;
/// Lateral speed cap as a fraction of max speed.
pub const SHIP_LATERAL_SPEED_FACTOR: f64 = 0.75;
/// Share of lateral responsiveness lost at full vertical speed.
pub const SHIP_LATERAL_DAMPING: f64 = 0.5;
/// Per-tick velocity multiplier on an idle axis.
pub const SHIP_GRIP: f64 = 0.98;
/// Velocities and tilts below this magnitude snap to zero.
pub const SHIP_SNAP_EPSILON: f64 = 0.0001;
/// Maximum roll/pitch of the ship model (radians).
pub const SHIP_MAX_TILT: f64 = 0.4;

pub const SHIP_HITBOX_WIDTH: f64 = 4.5;
pub const SHIP_HITBOX_HEIGHT: f64 = 1.0;
pub const SHIP_HITBOX_DEPTH: f64 = 2.0;
/// The ship hitbox sits ahead of the model origin along x.
pub const SHIP_HITBOX_OFFSET_X: f64 = 2.0;

// --- Weapons ---

/// Minimum time between volleys.
pub const WEAPON_COOLDOWN_MS: f64 = 150.0;

/// Barrel offsets from the ship origin.
pub const BARREL_OFFSET_X: f64 = -0.5;
pub const BARREL_OFFSET_Y: f64 = -0.275;
pub const BARREL_SPREAD_Z: f64 = 0.15;

/// Projectile speed along x, units per millisecond.
pub const PROJECTILE_SPEED: f64 = -0.075;

pub const PROJECTILE_HITBOX_WIDTH: f64 = 0.2;
pub const PROJECTILE_HITBOX_HEIGHT: f64 = 0.2;
pub const PROJECTILE_HITBOX_DEPTH: f64 = 1.5;

pub const MUZZLE_FLASH_INTENSITY: f64 = 2.0;
pub const MUZZLE_FLASH_FADE_RATE: f64 = 0.1;
/// Flashes at or below this intensity are removed.
pub const MUZZLE_FLASH_CUTOFF: f64 = 0.1;

// --- Effects ---

/// Debris pieces per unit of asteroid radius, sampled uniformly.
pub const DEBRIS_PER_RADIUS_MIN: f64 = 10.0;
pub const DEBRIS_PER_RADIUS_MAX: f64 = 20.0;

/// Maximum debris speed per axis (units per tick).
pub const DEBRIS_MAX_SPEED: f64 = 0.45;

/// Debris size as a fraction of asteroid radius.
pub const DEBRIS_MIN_SCALE: f64 = 0.05;
pub const DEBRIS_MAX_SCALE: f64 = 0.15;

pub const DEBRIS_FADE_RATE: f64 = 0.0001;

/// Explosion sprite size as a multiple of asteroid radius.
pub const EXPLOSION_MIN_SCALE: f64 = 2.0;
pub const EXPLOSION_MAX_SCALE: f64 = 4.0;

pub const EXPLOSION_FADE_RATE: f64 = 0.1;

/// Warm orange used for explosion and muzzle lights.
pub const FLASH_LIGHT_COLOR: u32 = 0xffaa00;
