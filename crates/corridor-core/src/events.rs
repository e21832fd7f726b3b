//! Events emitted by the simulation for the renderer and audio.

use serde::{Deserialize, Serialize};

use crate::components::Visual;
use crate::enums::EntityKind;

/// Audio cues for the frontend sound system. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Background music loop starts with a run.
    MusicStart,
    /// Looping engine hum starts with the ship.
    EngineStart,
    /// Engine hum stops when the ship is removed.
    EngineStop,
    /// A volley was fired.
    Shot { volume: f64 },
    /// An asteroid was destroyed.
    Explosion,
    /// An asteroid flew past the ship.
    AsteroidPassBy,
}

/// Scene graph changes the renderer must mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Build a scene object for a new entity.
    Added { visual: Visual, kind: EntityKind },
    /// Detach and dispose the scene object.
    Removed { visual: Visual },
}
