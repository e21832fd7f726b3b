//! Ship steering state machine.
//!
//! The state on each axis is derived from the held keys every tick; the
//! vertical and lateral axes are handled independently. The update order
//! is: intent, velocity, position, boundary clamp, tilt.

use corridor_core::components::Attitude;
use corridor_core::enums::{LateralIntent, VerticalIntent};
use corridor_core::input::InputState;
use corridor_core::types::{Position, Velocity};

use crate::handling::HandlingProfile;

/// Input to the steering FSM for one tick.
pub struct PilotContext {
    pub position: Position,
    pub velocity: Velocity,
    pub attitude: Attitude,
    pub input: InputState,
}

/// Output from the steering FSM.
pub struct PilotUpdate {
    pub position: Position,
    pub velocity: Velocity,
    pub attitude: Attitude,
    pub vertical: VerticalIntent,
    pub lateral: LateralIntent,
}

/// Derive per-axis intent. When both keys of an axis are held,
/// climb and left win.
pub fn intents(input: &InputState) -> (VerticalIntent, LateralIntent) {
    let vertical = if input.forward {
        VerticalIntent::Up
    } else if input.back {
        VerticalIntent::Down
    } else {
        VerticalIntent::Idle
    };
    let lateral = if input.left {
        LateralIntent::Left
    } else if input.right {
        LateralIntent::Right
    } else {
        LateralIntent::Idle
    };
    (vertical, lateral)
}

/// Evaluate one tick of steering.
pub fn evaluate(ctx: &PilotContext, profile: &HandlingProfile) -> PilotUpdate {
    let (vertical, lateral) = intents(&ctx.input);

    let vy = step_vertical(ctx.velocity.y, vertical, profile);
    let vz = step_lateral(ctx.velocity.z, vy, lateral, profile);

    let (y, vy) = clamp_axis(ctx.position.y + vy, vy, profile.vertical_limit);
    let (z, vz) = clamp_axis(ctx.position.z + vz, vz, profile.lateral_limit);

    let roll = step_tilt(
        ctx.attitude.roll,
        match vertical {
            VerticalIntent::Up => 1,
            VerticalIntent::Down => -1,
            VerticalIntent::Idle => 0,
        },
        profile,
    );
    let pitch = step_tilt(
        ctx.attitude.pitch,
        match lateral {
            LateralIntent::Left => 1,
            LateralIntent::Right => -1,
            LateralIntent::Idle => 0,
        },
        profile,
    );

    PilotUpdate {
        position: Position::new(ctx.position.x, y, z),
        velocity: Velocity::new(ctx.velocity.x, vy, vz),
        attitude: Attitude { roll, pitch },
        vertical,
        lateral,
    }
}

/// Accelerate toward the held direction, or bleed speed through grip.
pub fn step_vertical(vy: f64, intent: VerticalIntent, profile: &HandlingProfile) -> f64 {
    match intent {
        VerticalIntent::Up => (vy + profile.acceleration).min(profile.max_speed),
        VerticalIntent::Down => (vy - profile.acceleration).max(-profile.max_speed),
        VerticalIntent::Idle => apply_grip(vy, profile),
    }
}

/// Lateral steering loses responsiveness as vertical speed grows.
pub fn step_lateral(vz: f64, vy: f64, intent: LateralIntent, profile: &HandlingProfile) -> f64 {
    let damping = 1.0 - (vy.abs() / profile.max_speed) * profile.lateral_damping;
    let gain = profile.tilt_speed * damping;
    let cap = profile.max_lateral_speed();
    match intent {
        LateralIntent::Left => (vz + gain).min(cap),
        LateralIntent::Right => (vz - gain).max(-cap),
        LateralIntent::Idle => apply_grip(vz, profile),
    }
}

fn apply_grip(v: f64, profile: &HandlingProfile) -> f64 {
    let v = v * profile.grip;
    if v.abs() < profile.snap_epsilon {
        0.0
    } else {
        v
    }
}

/// Keep a coordinate within `±limit`; touching the limit kills the speed.
pub fn clamp_axis(position: f64, velocity: f64, limit: f64) -> (f64, f64) {
    if position >= limit {
        (limit, 0.0)
    } else if position <= -limit {
        (-limit, 0.0)
    } else {
        (position, velocity)
    }
}

/// Tilt toward `direction` within the limit, or settle back to level.
fn step_tilt(angle: f64, direction: i8, profile: &HandlingProfile) -> f64 {
    let step = profile.tilt_speed;
    match direction {
        1 if angle < profile.max_tilt => angle + step,
        -1 if angle > -profile.max_tilt => angle - step,
        0 if angle > profile.snap_epsilon => (angle - step).max(0.0),
        0 if angle < -profile.snap_epsilon => (angle + step).min(0.0),
        0 => 0.0,
        _ => angle,
    }
}
