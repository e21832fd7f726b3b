//! Effects system: debris, explosions and muzzle flashes fade out and are pruned.

use hecs::{Component, Entity, World};

use corridor_core::components::{Debris, DebrisBurst, Explosion, Fade, MuzzleFlash};

use crate::scene::SceneLedger;
use crate::systems::{by_age, movement};

/// Links a debris piece to the burst entity holding its shared fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstMember(pub Entity);

/// Fade every effect by one tick.
pub fn run(world: &mut World, scene: &mut SceneLedger, delta_ms: f64) {
    fade_debris(world, scene, delta_ms);
    fade_all::<Explosion>(world, scene, delta_ms);
    fade_all::<MuzzleFlash>(world, scene, delta_ms);
}

/// Spent effects are removed; the rest drift (if they move) and dim.
fn fade_all<T: Component>(world: &mut World, scene: &mut SceneLedger, delta_ms: f64) {
    for entity in by_age::<T>(world) {
        let spent = match world.get::<&Fade>(entity) {
            Ok(fade) => fade.is_spent(),
            Err(_) => continue,
        };
        if spent {
            scene.despawn(world, entity);
            continue;
        }

        movement::advance_entity(world, entity, delta_ms);
        if let Ok(mut fade) = world.get::<&mut Fade>(entity) {
            fade.level -= fade.rate;
        }
    }
}

/// Every live piece takes one step off its burst's shared level. Once the
/// level is spent, each piece is removed on its next turn.
fn fade_debris(world: &mut World, scene: &mut SceneLedger, delta_ms: f64) {
    for piece in by_age::<Debris>(world) {
        let burst = match world.get::<&BurstMember>(piece) {
            Ok(member) => member.0,
            Err(_) => continue,
        };
        let spent = world
            .get::<&Fade>(burst)
            .map(|fade| fade.is_spent())
            .unwrap_or(true);
        if spent {
            scene.despawn(world, piece);
            release_piece(world, burst);
            continue;
        }

        movement::advance_entity(world, piece, delta_ms);
        if let Ok(mut fade) = world.get::<&mut Fade>(burst) {
            fade.level -= fade.rate;
        }
    }
}

/// The burst entity goes with its last piece.
fn release_piece(world: &mut World, burst: Entity) {
    let remaining = match world.get::<&mut DebrisBurst>(burst) {
        Ok(mut state) => {
            state.pieces = state.pieces.saturating_sub(1);
            state.pieces
        }
        Err(_) => return,
    };
    if remaining == 0 {
        let _ = world.despawn(burst);
    }
}
