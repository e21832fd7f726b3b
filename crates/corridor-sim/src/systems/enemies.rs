//! Enemy system: exit culling, movement, and the two collision passes.
//!
//! Enemies are visited newest first. For each one:
//! 1. remove it if it already left the play volume;
//! 2. move it;
//! 3. test it against every live projectile, newest first. The first hit
//!    destroys both and spawns the explosion and debris;
//! 4. test it against the ship. A hit ends the pass immediately.
//!
//! Step 4 uses the enemy's box even when step 3 just destroyed it.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use corridor_core::bounds::{collides, HitboxFaces};
use corridor_core::components::{Enemy, Projectile};
use corridor_core::constants::ENEMY_EXIT_X;
use corridor_core::events::AudioEvent;
use corridor_core::types::Position;

use crate::scene::SceneLedger;
use crate::stats::RunStats;
use crate::systems::{by_age, movement};
use crate::world_setup;

/// Result of one enemy pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyPass {
    /// An enemy touched the ship; the run is over.
    pub player_hit: bool,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    audio_events: &mut Vec<AudioEvent>,
    stats: &mut RunStats,
    player: Entity,
    delta_ms: f64,
) -> EnemyPass {
    let mut pass = EnemyPass::default();
    let player_faces = world.get::<&HitboxFaces>(player).map(|f| *f).ok();
    let mut projectiles = by_age::<Projectile>(world);

    for enemy in by_age::<Enemy>(world).into_iter().rev() {
        let Ok(x) = world.get::<&Position>(enemy).map(|p| p.x) else {
            continue;
        };
        if x >= ENEMY_EXIT_X {
            scene.despawn(world, enemy);
            continue;
        }

        let Some(position) = movement::advance_entity(world, enemy, delta_ms) else {
            continue;
        };
        if position.x >= ENEMY_EXIT_X {
            announce_pass(world, enemy, audio_events, stats);
        }

        let Ok(enemy_faces) = world.get::<&HitboxFaces>(enemy).map(|f| *f) else {
            continue;
        };

        let hit = projectiles.iter().rposition(|&projectile| {
            world
                .get::<&HitboxFaces>(projectile)
                .map(|faces| collides(&enemy_faces, &faces))
                .unwrap_or(false)
        });
        if let Some(index) = hit {
            let projectile = projectiles.remove(index);
            destroy_enemy(world, scene, rng, audio_events, enemy, position);
            scene.despawn(world, projectile);
            stats.asteroids_destroyed += 1;
        }

        if let Some(player_faces) = player_faces {
            if collides(&player_faces, &enemy_faces) {
                pass.player_hit = true;
                return pass;
            }
        }
    }

    pass
}

/// Play the pass-by cue once per enemy.
fn announce_pass(
    world: &mut World,
    enemy: Entity,
    audio_events: &mut Vec<AudioEvent>,
    stats: &mut RunStats,
) {
    if let Ok(mut state) = world.get::<&mut Enemy>(enemy) {
        if !state.passed {
            state.passed = true;
            audio_events.push(AudioEvent::AsteroidPassBy);
            stats.asteroids_passed += 1;
        }
    }
}

/// Replace an enemy with an explosion and a debris burst.
fn destroy_enemy(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    audio_events: &mut Vec<AudioEvent>,
    enemy: Entity,
    position: Position,
) {
    let Ok(kind) = world.get::<&Enemy>(enemy).map(|e| e.kind) else {
        return;
    };

    world_setup::spawn_explosion(world, scene, rng, position, kind.radius());
    audio_events.push(AudioEvent::Explosion);
    scene.despawn(world, enemy);
    let pieces = world_setup::spawn_debris_burst(world, scene, rng, position, &kind);
    tracing::debug!(?enemy, radius = kind.radius(), pieces, "asteroid destroyed");
}
