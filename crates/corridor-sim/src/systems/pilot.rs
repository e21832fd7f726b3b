//! Player system: steering, boundaries, tilt and firing.

use hecs::{Entity, World};

use corridor_core::bounds::{Hitbox, HitboxFaces};
use corridor_core::components::{Attitude, Steering, WeaponState};
use corridor_core::constants::WEAPON_COOLDOWN_MS;
use corridor_core::events::AudioEvent;
use corridor_core::input::InputState;
use corridor_core::types::{Position, Velocity};
use corridor_pilot::fsm::{self, PilotContext};
use corridor_pilot::handling::HandlingProfile;
use corridor_pilot::weapon;

use crate::scene::SceneLedger;
use crate::stats::RunStats;
use crate::world_setup;

/// Volume of the shot sound.
const SHOT_VOLUME: f64 = 0.5;

/// Update the ship from this tick's input.
///
/// The weapon is evaluated before the ship moves, so a volley leaves from
/// where the ship was at the start of the tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &mut SceneLedger,
    audio_events: &mut Vec<AudioEvent>,
    stats: &mut RunStats,
    player: Entity,
    input: &InputState,
    profile: &HandlingProfile,
    delta_ms: f64,
) {
    let volley_origin = {
        let Ok((position, velocity, attitude, steering, weapon_state, hitbox, faces)) = world
            .query_one_mut::<(
                &mut Position,
                &mut Velocity,
                &mut Attitude,
                &mut Steering,
                &mut WeaponState,
                &Hitbox,
                &mut HitboxFaces,
            )>(player)
        else {
            return;
        };

        let shot = weapon::step(
            weapon_state.cooldown_ms,
            input.fire,
            delta_ms,
            WEAPON_COOLDOWN_MS,
        );
        weapon_state.cooldown_ms = shot.cooldown_ms;
        let origin = *position;

        let update = fsm::evaluate(
            &PilotContext {
                position: *position,
                velocity: *velocity,
                attitude: *attitude,
                input: *input,
            },
            profile,
        );
        *position = update.position;
        *velocity = update.velocity;
        *attitude = update.attitude;
        steering.vertical = update.vertical;
        steering.lateral = update.lateral;
        *faces = hitbox.faces_at(position);

        shot.fired.then_some(origin)
    };

    if let Some(origin) = volley_origin {
        world_setup::spawn_volley(world, scene, &origin);
        audio_events.push(AudioEvent::Shot {
            volume: SHOT_VOLUME,
        });
        stats.volleys_fired += 1;
    }
}
