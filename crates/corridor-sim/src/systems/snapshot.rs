//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.
//! Entity lists are ordered oldest first.

use hecs::World;

use corridor_core::components::*;
use corridor_core::enums::GamePhase;
use corridor_core::events::{AudioEvent, SceneEvent};
use corridor_core::state::*;
use corridor_core::types::{Position, SimTime, Velocity};

use crate::difficulty::DifficultyLevel;
use crate::stats::RunStats;
use crate::systems::effects::BurstMember;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    difficulty: DifficultyLevel,
    scene_events: Vec<SceneEvent>,
    audio_events: Vec<AudioEvent>,
    stats: &RunStats,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        difficulty: DifficultyView {
            spawn_interval_ms: difficulty.spawn_interval_ms,
            enemy_speed: difficulty.enemy_speed,
        },
        ship: build_ship(world),
        asteroids: build_asteroids(world),
        projectiles: build_projectiles(world),
        debris: build_debris(world),
        explosions: build_fading::<Explosion>(world, |e| e.size),
        muzzle_flashes: build_fading::<MuzzleFlash>(world, |_| 0.0),
        scene_events,
        audio_events,
        stats: stats.view(time.elapsed_ms),
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&PlayerShip, &Visual, &Position, &Velocity, &Attitude, &Steering)>()
        .iter()
        .next()
        .map(|(_, (_, visual, position, velocity, attitude, steering))| ShipView {
            visual: *visual,
            position: *position,
            velocity: *velocity,
            attitude: *attitude,
            vertical: steering.vertical,
            lateral: steering.lateral,
        })
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut asteroids: Vec<AsteroidView> = world
        .query::<(&Enemy, &Visual, &Position)>()
        .iter()
        .map(|(_, (enemy, visual, position))| match enemy.kind {
            EnemyKind::Asteroid(shape) => AsteroidView {
                visual: *visual,
                position: *position,
                radius: shape.radius,
                polyhedron: shape.polyhedron,
                detail: shape.detail,
                surface: shape.surface,
            },
        })
        .collect();
    asteroids.sort_unstable_by_key(|a| a.visual);
    asteroids
}

fn build_projectiles(world: &World) -> Vec<BodyView> {
    let mut projectiles: Vec<BodyView> = world
        .query::<(&Projectile, &Visual, &Position)>()
        .iter()
        .map(|(_, (_, visual, position))| BodyView {
            visual: *visual,
            position: *position,
        })
        .collect();
    projectiles.sort_unstable_by_key(|p| p.visual);
    projectiles
}

/// Pieces report the level of the burst they belong to.
fn build_debris(world: &World) -> Vec<FadingView> {
    let mut views: Vec<FadingView> = world
        .query::<(&Debris, &Visual, &Position, &BurstMember)>()
        .iter()
        .map(|(_, (debris, visual, position, member))| FadingView {
            visual: *visual,
            position: *position,
            size: debris.size,
            level: world.get::<&Fade>(member.0).map_or(0.0, |fade| fade.level),
        })
        .collect();
    views.sort_unstable_by_key(|v| v.visual);
    views
}

fn build_fading<T: hecs::Component>(world: &World, size: impl Fn(&T) -> f64) -> Vec<FadingView> {
    let mut views: Vec<FadingView> = world
        .query::<(&T, &Visual, &Position, &Fade)>()
        .iter()
        .map(|(_, (effect, visual, position, fade))| FadingView {
            visual: *visual,
            position: *position,
            size: size(effect),
            level: fade.level,
        })
        .collect();
    views.sort_unstable_by_key(|v| v.visual);
    views
}
