//! Cleanup system: tears down every entity at game over or restart.

use hecs::{Entity, World};

use corridor_core::components::Visual;

use crate::scene::SceneLedger;

/// Remove every entity, releasing scene objects oldest first.
/// Returns the number of scene objects released.
pub fn clear_all(world: &mut World, scene: &mut SceneLedger) -> usize {
    let mut visible: Vec<(Visual, Entity)> = world
        .query::<&Visual>()
        .iter()
        .map(|(entity, visual)| (*visual, entity))
        .collect();
    visible.sort_unstable_by_key(|(visual, _)| *visual);

    let released = visible
        .into_iter()
        .filter(|&(_, entity)| scene.despawn(world, entity))
        .count();

    // Anything without a scene object.
    world.clear();
    released
}
