//! Weapon cooldown.

/// Result of one weapon tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStep {
    pub cooldown_ms: f64,
    pub fired: bool,
}

/// Advance the cooldown timer. Fires when the trigger is held and at least
/// `interval_ms` has accumulated; firing resets the timer, any other tick
/// adds the frame delta.
pub fn step(cooldown_ms: f64, fire_held: bool, delta_ms: f64, interval_ms: f64) -> WeaponStep {
    if fire_held && cooldown_ms >= interval_ms {
        WeaponStep {
            cooldown_ms: 0.0,
            fired: true,
        }
    } else {
        WeaponStep {
            cooldown_ms: cooldown_ms + delta_ms,
            fired: false,
        }
    }
}
