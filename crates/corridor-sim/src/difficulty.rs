//! Difficulty ramp as a pure function of elapsed run time.
//!
//! The spawn interval shrinks linearly toward a floor and enemy speed grows
//! linearly toward a ceiling.

use rand::Rng;

use corridor_core::constants::*;
use corridor_core::types::{sanitize_delta_ms, Velocity};

/// Curve values at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyLevel {
    /// Minimum time between enemy spawns (ms).
    pub spawn_interval_ms: f64,
    /// Base enemy speed (units per tick).
    pub enemy_speed: f64,
}

/// Tracks run time and derives the current difficulty.
/// One instance per run; a restart builds a fresh one.
#[derive(Debug, Clone, Default)]
pub struct DifficultyManager {
    elapsed_ms: f64,
}

/// Spawn interval after `elapsed_ms` of play.
pub fn spawn_interval_at(elapsed_ms: f64) -> f64 {
    let decay = (elapsed_ms / 1000.0) * SPAWN_INTERVAL_DECAY_PER_SEC;
    (BASE_SPAWN_INTERVAL_MS - decay).max(MIN_SPAWN_INTERVAL_MS)
}

/// Base enemy speed after `elapsed_ms` of play.
pub fn enemy_speed_at(elapsed_ms: f64) -> f64 {
    let gain = ((elapsed_ms / 1000.0) * ENEMY_SPEED_GAIN_PER_SEC)
        .min(MAX_ENEMY_SPEED - BASE_ENEMY_SPEED);
    BASE_ENEMY_SPEED + gain
}

impl DifficultyManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Add frame time and return the resulting level.
    pub fn advance(&mut self, delta_ms: f64) -> DifficultyLevel {
        self.elapsed_ms += sanitize_delta_ms(delta_ms);
        self.current()
    }

    /// Level at the current elapsed time.
    pub fn current(&self) -> DifficultyLevel {
        DifficultyLevel {
            spawn_interval_ms: spawn_interval_at(self.elapsed_ms),
            enemy_speed: enemy_speed_at(self.elapsed_ms),
        }
    }

    /// Velocity for a new enemy: base speed plus jitter, straight down the corridor.
    /// Reads the current level without advancing time.
    pub fn sample_enemy_velocity(&self, rng: &mut impl Rng) -> Velocity {
        let jitter = rng.gen_range(0.0..ENEMY_SPEED_JITTER);
        Velocity::new(jitter + self.current().enemy_speed, 0.0, 0.0)
    }
}
