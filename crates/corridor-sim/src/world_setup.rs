//! Entity spawn factories.
//!
//! Creates the ship, asteroids, projectiles and effects with their
//! component bundles, registering each with the scene ledger.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use corridor_core::bounds::Hitbox;
use corridor_core::components::*;
use corridor_core::constants::*;
use corridor_core::enums::*;
use corridor_core::types::{Position, Velocity};

use crate::difficulty::DifficultyManager;
use crate::scene::SceneLedger;
use crate::systems::effects::BurstMember;

/// Spawn the player's ship at the origin.
pub fn spawn_player(world: &mut World, scene: &mut SceneLedger) -> Entity {
    let position = Position::default();
    let hitbox = Hitbox::new(SHIP_HITBOX_WIDTH, SHIP_HITBOX_HEIGHT, SHIP_HITBOX_DEPTH)
        .with_offset(Position::new(SHIP_HITBOX_OFFSET_X, 0.0, 0.0));
    let faces = hitbox.faces_at(&position);
    let visual = scene.attach(EntityKind::PlayerShip);

    world.spawn((
        PlayerShip,
        position,
        Velocity::default(),
        Attitude::default(),
        Steering::default(),
        WeaponState::default(),
        hitbox,
        faces,
        visual,
    ))
}

/// Spawn an asteroid at the far end of the corridor with a random
/// height, lateral offset and shape, and a speed from the difficulty curve.
pub fn spawn_asteroid(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    difficulty: &DifficultyManager,
) -> Entity {
    let y = rng.gen_range(-BOUNDARY_VERTICAL..BOUNDARY_VERTICAL);
    let z = rng.gen_range(-BOUNDARY_LATERAL..BOUNDARY_LATERAL);
    let velocity = difficulty.sample_enemy_velocity(rng);
    let shape = random_asteroid_shape(rng);

    spawn_asteroid_at(
        world,
        scene,
        Position::new(ENEMY_SPAWN_X, y, z),
        velocity,
        shape,
    )
}

/// Roll an asteroid shape. Always an octahedron: the icosahedron variant
/// exists for rendering but the spawner never picks it.
pub fn random_asteroid_shape(rng: &mut ChaCha8Rng) -> AsteroidShape {
    AsteroidShape {
        radius: rng.gen_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS),
        polyhedron: Polyhedron::Octahedron,
        detail: rng.gen_range(ASTEROID_MIN_DETAIL..ASTEROID_MAX_DETAIL),
        surface: Surface::AsteroidRock,
    }
}

/// Spawn an asteroid with explicit kinematics and shape.
pub fn spawn_asteroid_at(
    world: &mut World,
    scene: &mut SceneLedger,
    position: Position,
    velocity: Velocity,
    shape: AsteroidShape,
) -> Entity {
    let kind = EnemyKind::Asteroid(shape);
    let hitbox = Hitbox::cube(kind.radius() * 2.0);
    let faces = hitbox.faces_at(&position);
    let visual = scene.attach(kind.entity_kind());

    world.spawn((
        Enemy {
            kind,
            passed: false,
        },
        position,
        velocity,
        StepMode::PerTick,
        hitbox,
        faces,
        visual,
    ))
}

/// Fire both barrels from a ship at `origin`: two projectiles and two flashes.
pub fn spawn_volley(world: &mut World, scene: &mut SceneLedger, origin: &Position) {
    for side in [-1.0, 1.0] {
        let muzzle = origin.offset(BARREL_OFFSET_X, BARREL_OFFSET_Y, side * BARREL_SPREAD_Z);
        spawn_projectile(world, scene, muzzle);
        spawn_muzzle_flash(world, scene, muzzle);
    }
}

/// Spawn a single projectile travelling up the corridor.
pub fn spawn_projectile(world: &mut World, scene: &mut SceneLedger, position: Position) -> Entity {
    let hitbox = Hitbox::new(
        PROJECTILE_HITBOX_WIDTH,
        PROJECTILE_HITBOX_HEIGHT,
        PROJECTILE_HITBOX_DEPTH,
    );
    let faces = hitbox.faces_at(&position);
    let visual = scene.attach(EntityKind::Projectile);

    world.spawn((
        Projectile,
        position,
        Velocity::new(PROJECTILE_SPEED, 0.0, 0.0),
        StepMode::PerMillisecond,
        hitbox,
        faces,
        visual,
    ))
}

/// Spawn a muzzle flash light that fades on the frame clock.
pub fn spawn_muzzle_flash(
    world: &mut World,
    scene: &mut SceneLedger,
    position: Position,
) -> Entity {
    let visual = scene.attach(EntityKind::MuzzleFlash);
    world.spawn((
        MuzzleFlash,
        position,
        Fade {
            level: MUZZLE_FLASH_INTENSITY,
            rate: MUZZLE_FLASH_FADE_RATE,
            expire_at: MUZZLE_FLASH_CUTOFF,
        },
        visual,
    ))
}

/// Spawn an explosion sprite sized to the destroyed enemy.
pub fn spawn_explosion(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    position: Position,
    radius: f64,
) -> Entity {
    let size = rng.gen_range(EXPLOSION_MIN_SCALE..EXPLOSION_MAX_SCALE) * radius;
    let light_intensity = rng.gen::<f64>() * radius + 1.0;
    let visual = scene.attach(EntityKind::Explosion);

    world.spawn((
        Explosion {
            size,
            light_intensity,
            light_color: FLASH_LIGHT_COLOR,
        },
        position,
        Fade {
            level: 1.0,
            rate: EXPLOSION_FADE_RATE,
            expire_at: 0.0,
        },
        visual,
    ))
}

/// Number of debris pieces for an enemy of the given radius.
pub fn debris_count(rng: &mut ChaCha8Rng, radius: f64) -> usize {
    let per_radius = rng.gen_range(DEBRIS_PER_RADIUS_MIN..DEBRIS_PER_RADIUS_MAX);
    (per_radius * radius).floor() as usize
}

/// Scatter debris from a destroyed enemy. Returns the number of pieces.
///
/// The pieces share one fade, held by a burst entity of their own.
pub fn spawn_debris_burst(
    world: &mut World,
    scene: &mut SceneLedger,
    rng: &mut ChaCha8Rng,
    position: Position,
    kind: &EnemyKind,
) -> usize {
    let radius = kind.radius();
    let count = debris_count(rng, radius);
    if count == 0 {
        return 0;
    }

    let burst = world.spawn((
        DebrisBurst {
            pieces: count as u32,
        },
        Fade {
            level: 1.0,
            rate: DEBRIS_FADE_RATE,
            expire_at: 0.0,
        },
    ));

    for _ in 0..count {
        let velocity = Velocity::new(
            rng.gen_range(-DEBRIS_MAX_SPEED..DEBRIS_MAX_SPEED),
            rng.gen_range(-DEBRIS_MAX_SPEED..DEBRIS_MAX_SPEED),
            rng.gen_range(-DEBRIS_MAX_SPEED..DEBRIS_MAX_SPEED),
        );
        let debris = Debris {
            size: radius * rng.gen_range(DEBRIS_MIN_SCALE..DEBRIS_MAX_SCALE),
            polyhedron: Polyhedron::Octahedron,
            detail: rng.gen_range(ASTEROID_MIN_DETAIL..ASTEROID_MAX_DETAIL),
            surface: kind.surface(),
        };
        let visual = scene.attach(EntityKind::Debris);

        world.spawn((
            debris,
            position,
            velocity,
            StepMode::PerTick,
            BurstMember(burst),
            visual,
        ));
    }

    count
}
