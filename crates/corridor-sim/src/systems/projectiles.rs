//! Projectile system: cull projectiles that left the corridor, move the rest.

use hecs::World;

use corridor_core::components::Projectile;
use corridor_core::constants::PROJECTILE_EXIT_X;
use corridor_core::types::Position;

use crate::scene::SceneLedger;
use crate::systems::{by_age, movement};

/// The exit check runs before the move, so a projectile that crosses the
/// threshold this tick is removed on the next one.
pub fn run(world: &mut World, scene: &mut SceneLedger, delta_ms: f64) {
    for entity in by_age::<Projectile>(world) {
        let Ok(x) = world.get::<&Position>(entity).map(|p| p.x) else {
            continue;
        };
        if x < PROJECTILE_EXIT_X {
            scene.despawn(world, entity);
        } else {
            movement::advance_entity(world, entity, delta_ms);
        }
    }
}
