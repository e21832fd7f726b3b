//! Kinematic integration.
//!
//! Velocity is either a per-tick displacement or a per-millisecond rate
//! scaled by the frame delta, depending on the entity's `StepMode`.

use hecs::{Entity, World};

use corridor_core::bounds::{Hitbox, HitboxFaces};
use corridor_core::components::StepMode;
use corridor_core::types::{Position, Velocity};

/// Position after one update.
pub fn displace(
    position: &Position,
    velocity: &Velocity,
    step: StepMode,
    delta_ms: f64,
) -> Position {
    let scale = match step {
        StepMode::PerTick => 1.0,
        StepMode::PerMillisecond => delta_ms,
    };
    Position::from(position.as_dvec3() + velocity.as_dvec3() * scale)
}

/// Move one entity and refresh its hitbox faces.
/// Returns the new position, or `None` if the entity does not move.
pub fn advance_entity(world: &mut World, entity: Entity, delta_ms: f64) -> Option<Position> {
    let position = {
        let (pos, vel, step) = world
            .query_one_mut::<(&mut Position, &Velocity, &StepMode)>(entity)
            .ok()?;
        *pos = displace(pos, vel, *step, delta_ms);
        *pos
    };

    if let Ok((hitbox, faces)) = world.query_one_mut::<(&Hitbox, &mut HitboxFaces)>(entity) {
        *faces = hitbox.faces_at(&position);
    }

    Some(position)
}
