//! Enemy spawning system: one asteroid whenever the spawn interval elapses.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use crate::difficulty::DifficultyManager;
use crate::scene::SceneLedger;
use crate::stats::RunStats;
use crate::world_setup;

/// Advance the difficulty clock and spawn when due.
///
/// `since_last_spawn_ms` only accumulates on ticks that do not spawn, and a
/// spawn resets it to zero.
pub fn run(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    difficulty: &mut DifficultyManager,
    since_last_spawn_ms: &mut f64,
    stats: &mut RunStats,
    delta_ms: f64,
) {
    let level = difficulty.advance(delta_ms);
    tracing::trace!(
        spawn_interval_ms = level.spawn_interval_ms,
        enemy_speed = level.enemy_speed,
        "difficulty"
    );

    if *since_last_spawn_ms < level.spawn_interval_ms {
        *since_last_spawn_ms += delta_ms;
        return;
    }

    let entity = world_setup::spawn_asteroid(world, scene, rng, difficulty);
    *since_last_spawn_ms = 0.0;
    stats.asteroids_spawned += 1;
    tracing::debug!(?entity, "asteroid spawned");
}
