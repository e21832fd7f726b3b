//! Game state snapshot: the complete visible state handed to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::components::{Attitude, Visual};
use crate::enums::*;
use crate::events::{AudioEvent, SceneEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: DifficultyView,
    pub ship: Option<ShipView>,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<BodyView>,
    pub debris: Vec<FadingView>,
    pub explosions: Vec<FadingView>,
    pub muzzle_flashes: Vec<FadingView>,
    pub scene_events: Vec<SceneEvent>,
    pub audio_events: Vec<AudioEvent>,
    pub stats: StatsView,
}

/// Current difficulty curve values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DifficultyView {
    pub spawn_interval_ms: f64,
    pub enemy_speed: f64,
}

/// Player ship state for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipView {
    pub visual: Visual,
    pub position: Position,
    pub velocity: Velocity,
    pub attitude: Attitude,
    pub vertical: VerticalIntent,
    pub lateral: LateralIntent,
}

/// An asteroid on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidView {
    pub visual: Visual,
    pub position: Position,
    pub radius: f64,
    pub polyhedron: Polyhedron,
    pub detail: u32,
    pub surface: Surface,
}

/// A plain moving body (projectiles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyView {
    pub visual: Visual,
    pub position: Position,
}

/// A fading effect: debris, explosion or flash.
/// `level` is opacity for sprites and meshes, intensity for lights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FadingView {
    pub visual: Visual,
    pub position: Position,
    pub size: f64,
    pub level: f64,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub asteroids_spawned: u32,
    pub asteroids_destroyed: u32,
    pub asteroids_passed: u32,
    pub volleys_fired: u32,
    pub survival_ms: f64,
}
