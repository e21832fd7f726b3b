//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet.
    #[default]
    Menu,
    /// Run in progress.
    Active,
    /// Player was hit; waiting for restart.
    GameOver,
}

/// Kind of scene object, so the renderer knows what to build for a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    Asteroid,
    Projectile,
    Debris,
    Explosion,
    MuzzleFlash,
}

/// Base polyhedron for procedurally built rocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polyhedron {
    Icosahedron,
    #[default]
    Octahedron,
}

/// Surface a rock (and its debris) is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// Textured rock: color, ao, height, normal and roughness maps.
    #[default]
    AsteroidRock,
}

/// Which way the ship is being pushed on the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalIntent {
    #[default]
    Idle,
    Up,
    Down,
}

/// Which way the ship is being pushed on the lateral axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateralIntent {
    #[default]
    Idle,
    Left,
    Right,
}
