//! Per-run counters tracked by the engine.

use corridor_core::state::StatsView;

/// Running counters for the current run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub asteroids_spawned: u32,
    pub asteroids_destroyed: u32,
    pub asteroids_passed: u32,
    pub volleys_fired: u32,
}

impl RunStats {
    pub fn view(&self, survival_ms: f64) -> StatsView {
        StatsView {
            asteroids_spawned: self.asteroids_spawned,
            asteroids_destroyed: self.asteroids_destroyed,
            asteroids_passed: self.asteroids_passed,
            volleys_fired: self.volleys_fired,
            survival_ms,
        }
    }
}
