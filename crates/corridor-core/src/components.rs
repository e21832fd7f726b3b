//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems,
//! not components; the few helpers here are pure accessors.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks a muzzle flash light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuzzleFlash;

/// Renderer-facing handle for an entity's scene object.
/// Handles are allocated in spawn order, so they also order entities by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Visual(pub u32);

/// How an entity's velocity is applied each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMode {
    /// Velocity is a fixed displacement per tick.
    PerTick,
    /// Velocity is units per millisecond, scaled by the frame delta.
    PerMillisecond,
}

/// Shape parameters of a procedurally built asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidShape {
    pub radius: f64,
    pub polyhedron: Polyhedron,
    pub detail: u32,
    pub surface: Surface,
}

/// Enemy variant with its kind-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    Asteroid(AsteroidShape),
}

impl EnemyKind {
    /// Bounding radius, which also scales the death effects.
    pub fn radius(&self) -> f64 {
        match self {
            EnemyKind::Asteroid(shape) => shape.radius,
        }
    }

    /// Surface inherited by debris.
    pub fn surface(&self) -> Surface {
        match self {
            EnemyKind::Asteroid(shape) => shape.surface,
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            EnemyKind::Asteroid(_) => EntityKind::Asteroid,
        }
    }
}

/// An enemy flying down the corridor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Whether the pass-by sound already played.
    pub passed: bool,
}

/// Opacity (or light intensity) that decays every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    pub level: f64,
    /// Amount subtracted per tick.
    pub rate: f64,
    /// The entity is removed once `level` is at or below this.
    pub expire_at: f64,
}

impl Fade {
    pub fn is_spent(&self) -> bool {
        self.level <= self.expire_at
    }
}

/// A piece of rock thrown off a destroyed asteroid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    pub size: f64,
    pub polyhedron: Polyhedron,
    pub detail: u32,
    pub surface: Surface,
}

/// Opacity shared by every piece of one debris burst.
///
/// The burst entity carries this together with a `Fade`. Each live piece
/// takes one `rate` step off the shared level per tick, so a large burst
/// fades out sooner than a small one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DebrisBurst {
    /// Pieces still in the world.
    pub pieces: u32,
}

/// Explosion sprite and its point light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub size: f64,
    pub light_intensity: f64,
    pub light_color: u32,
}

/// Ship roll/pitch, driven by steering input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Rotation about the corridor axis, follows vertical steering.
    pub roll: f64,
    /// Rotation about the vertical axis, follows lateral steering.
    pub pitch: f64,
}

/// Steering intent decided on the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Steering {
    pub vertical: VerticalIntent,
    pub lateral: LateralIntent,
}

/// Weapon timing state for the ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponState {
    /// Milliseconds accumulated since the last volley.
    pub cooldown_ms: f64,
}

// Position, Velocity (types.rs) and Hitbox, HitboxFaces (bounds.rs)
// are used as components as well.
