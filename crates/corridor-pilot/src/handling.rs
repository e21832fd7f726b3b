//! Handling profile: the tunable numbers behind ship steering.

use corridor_core::constants::*;

/// Steering parameters for the player ship.
#[derive(Debug, Clone, Copy)]
pub struct HandlingProfile {
    /// Top vertical speed (units per tick).
    pub max_speed: f64,
    /// Vertical speed gained per tick while climbing or diving.
    pub acceleration: f64,
    /// Base lateral speed gain per tick; also the tilt step.
    pub tilt_speed: f64,
    /// Lateral speed cap as a fraction of `max_speed`.
    pub lateral_speed_factor: f64,
    /// Fraction of lateral responsiveness lost at full vertical speed.
    pub lateral_damping: f64,
    /// Velocity multiplier applied to an idle axis each tick.
    pub grip: f64,
    /// Magnitudes below this snap to zero.
    pub snap_epsilon: f64,
    /// Maximum roll and pitch (radians).
    pub max_tilt: f64,
    /// Half-width of the field along z.
    pub lateral_limit: f64,
    /// Half-height of the field along y.
    pub vertical_limit: f64,
}

impl Default for HandlingProfile {
    fn default() -> Self {
        Self {
            max_speed: SHIP_MAX_SPEED,
            acceleration: SHIP_ACCELERATION,
            tilt_speed: SHIP_TILT_SPEED,
            lateral_speed_factor: SHIP_LATERAL_SPEED_FACTOR,
            lateral_damping: SHIP_LATERAL_DAMPING,
            grip: SHIP_GRIP,
            snap_epsilon: SHIP_SNAP_EPSILON,
            max_tilt: SHIP_MAX_TILT,
            lateral_limit: BOUNDARY_LATERAL,
            vertical_limit: BOUNDARY_VERTICAL,
        }
    }
}

impl HandlingProfile {
    /// Lateral speed cap.
    pub fn max_lateral_speed(&self) -> f64 {
        self.max_speed * self.lateral_speed_factor
    }
}
