//! Outcome reporting for the headless runner.

use serde::Serialize;

use corridor_core::enums::GamePhase;
use corridor_core::state::GameStateSnapshot;

use crate::autopilot::PilotKind;

/// How a single run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// The ship was hit (false if the frame budget ran out first).
    pub game_over: bool,
    pub ticks: u64,
    pub survival_ms: f64,
    pub asteroids_spawned: u32,
    pub asteroids_destroyed: u32,
    pub asteroids_passed: u32,
    pub volleys_fired: u32,
}

impl RunReport {
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        Self {
            game_over: snapshot.phase == GamePhase::GameOver,
            ticks: snapshot.time.tick,
            survival_ms: snapshot.stats.survival_ms,
            asteroids_spawned: snapshot.stats.asteroids_spawned,
            asteroids_destroyed: snapshot.stats.asteroids_destroyed,
            asteroids_passed: snapshot.stats.asteroids_passed,
            volleys_fired: snapshot.stats.volleys_fired,
        }
    }
}

/// Everything the runner prints at exit.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub pilot: PilotKind,
    pub frames: u64,
    pub runs: Vec<RunReport>,
}

impl RunSummary {
    pub fn best_survival_ms(&self) -> f64 {
        self.runs
            .iter()
            .map(|run| run.survival_ms)
            .fold(0.0, f64::max)
    }

    pub fn total_destroyed(&self) -> u32 {
        self.runs.iter().map(|run| run.asteroids_destroyed).sum()
    }
}
