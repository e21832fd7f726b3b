//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Run-level state (difficulty, timers, counters) is passed in by the engine.

use hecs::{Component, Entity, World};

use corridor_core::components::Visual;

pub mod cleanup;
pub mod effects;
pub mod enemies;
pub mod enemy_spawner;
pub mod movement;
pub mod pilot;
pub mod projectiles;
pub mod snapshot;

/// Entities carrying `T`, oldest first.
///
/// hecs storage order changes as entities are despawned, so ordering is
/// taken from the visual handle, which is allocated in spawn order.
pub fn by_age<T: Component>(world: &World) -> Vec<Entity> {
    let mut entities: Vec<(Visual, Entity)> = world
        .query::<(&T, &Visual)>()
        .iter()
        .map(|(entity, (_, visual))| (*visual, entity))
        .collect();
    entities.sort_unstable_by_key(|(visual, _)| *visual);
    entities.into_iter().map(|(_, entity)| entity).collect()
}
