//! Tests for ship steering, boundaries, tilt and weapon timing.

use corridor_core::components::Attitude;
use corridor_core::constants::*;
use corridor_core::enums::{LateralIntent, VerticalIntent};
use corridor_core::input::{InputKey, InputState};
use corridor_core::types::{Position, Velocity};

use crate::fsm::{clamp_axis, evaluate, intents, step_lateral, PilotContext};
use crate::handling::HandlingProfile;
use crate::weapon;

fn context(input: InputState) -> PilotContext {
    PilotContext {
        position: Position::default(),
        velocity: Velocity::default(),
        attitude: Attitude::default(),
        input,
    }
}

/// Run the FSM for `ticks` with the same input, feeding the output back in.
fn fly(ctx: &mut PilotContext, input: InputState, ticks: usize) {
    let profile = HandlingProfile::default();
    ctx.input = input;
    for _ in 0..ticks {
        let update = evaluate(ctx, &profile);
        ctx.position = update.position;
        ctx.velocity = update.velocity;
        ctx.attitude = update.attitude;
    }
}

// ---- Intent ----

#[test]
fn test_intents_from_input() {
    assert_eq!(
        intents(&InputState::default()),
        (VerticalIntent::Idle, LateralIntent::Idle)
    );
    let input = InputState::default()
        .with(InputKey::Back)
        .with(InputKey::Right);
    assert_eq!(intents(&input), (VerticalIntent::Down, LateralIntent::Right));
}

#[test]
fn test_conflicting_keys_prefer_up_and_left() {
    let input = InputState::from_key_codes(["KeyW", "KeyS", "KeyA", "KeyD"]);
    assert_eq!(intents(&input), (VerticalIntent::Up, LateralIntent::Left));
}

// ---- Vertical axis ----

#[test]
fn test_climb_accelerates_by_fixed_step() {
    let mut ctx = context(InputState::default());
    let up = InputState::default().with(InputKey::Forward);

    fly(&mut ctx, up, 1);
    assert!((ctx.velocity.y - SHIP_ACCELERATION).abs() < 1e-12);

    fly(&mut ctx, up, 9);
    assert!(
        (ctx.velocity.y - 10.0 * SHIP_ACCELERATION).abs() < 1e-12,
        "after 10 ticks vy should be 0.075, got {}",
        ctx.velocity.y
    );
    assert!(ctx.position.y > 0.0);
}

#[test]
fn test_vertical_speed_capped() {
    let mut ctx = context(InputState::default());
    ctx.velocity.y = SHIP_MAX_SPEED - 0.001;
    ctx.position.y = -18.0;
    fly(&mut ctx, InputState::default().with(InputKey::Forward), 1);
    assert_eq!(ctx.velocity.y, SHIP_MAX_SPEED);
}

#[test]
fn test_release_decays_then_snaps_to_zero() {
    let mut ctx = context(InputState::default());
    fly(&mut ctx, InputState::default().with(InputKey::Forward), 10);
    let released_at = ctx.velocity.y;

    fly(&mut ctx, InputState::default(), 1);
    assert!((ctx.velocity.y - released_at * SHIP_GRIP).abs() < 1e-12);

    // 0.075 * 0.98^n drops under 1e-4 after ~328 ticks.
    fly(&mut ctx, InputState::default(), 400);
    assert_eq!(ctx.velocity.y, 0.0, "velocity should snap to exactly zero");
}

// ---- Lateral axis ----

#[test]
fn test_lateral_gain_damped_by_vertical_speed() {
    let profile = HandlingProfile::default();
    let still = step_lateral(0.0, 0.0, LateralIntent::Left, &profile);
    let climbing = step_lateral(0.0, SHIP_MAX_SPEED, LateralIntent::Left, &profile);
    assert!((still - SHIP_TILT_SPEED).abs() < 1e-12);
    assert!((climbing - SHIP_TILT_SPEED * 0.5).abs() < 1e-12);

    let right = step_lateral(0.0, SHIP_MAX_SPEED, LateralIntent::Right, &profile);
    assert!((right + SHIP_TILT_SPEED * 0.5).abs() < 1e-12);
}

#[test]
fn test_lateral_speed_capped() {
    let profile = HandlingProfile::default();
    let cap = SHIP_MAX_SPEED * SHIP_LATERAL_SPEED_FACTOR;
    assert_eq!(step_lateral(cap, 0.0, LateralIntent::Left, &profile), cap);
    assert_eq!(step_lateral(-cap, 0.0, LateralIntent::Right, &profile), -cap);
}

#[test]
fn test_left_moves_toward_positive_z() {
    let mut ctx = context(InputState::default());
    fly(&mut ctx, InputState::default().with(InputKey::Left), 20);
    assert!(ctx.velocity.z > 0.0);
    assert!(ctx.position.z > 0.0);
}

// ---- Boundaries ----

#[test]
fn test_boundary_clamps_and_zeroes_velocity() {
    let mut ctx = context(InputState::default());
    ctx.position = Position::new(0.0, 18.9, -18.9);
    ctx.velocity = Velocity::new(0.0, 0.5, -0.5);
    let input = InputState::default()
        .with(InputKey::Forward)
        .with(InputKey::Right);
    let update = evaluate(
        &PilotContext { input, ..ctx },
        &HandlingProfile::default(),
    );
    assert_eq!(update.position.y, BOUNDARY_VERTICAL);
    assert_eq!(update.position.z, -BOUNDARY_LATERAL);
    assert_eq!(update.velocity.y, 0.0);
    assert_eq!(update.velocity.z, 0.0);
}

#[test]
fn test_clamp_axis_inside_is_untouched() {
    assert_eq!(clamp_axis(3.0, 0.2, 19.0), (3.0, 0.2));
    assert_eq!(clamp_axis(-25.0, -1.0, 19.0), (-19.0, 0.0));
}

// ---- Tilt ----

#[test]
fn test_tilt_limited_and_levels_out() {
    let mut ctx = context(InputState::default());
    fly(&mut ctx, InputState::default().with(InputKey::Forward), 100);
    assert!(ctx.attitude.roll <= SHIP_MAX_TILT + SHIP_TILT_SPEED);
    assert!(ctx.attitude.roll > SHIP_MAX_TILT - SHIP_TILT_SPEED);

    fly(&mut ctx, InputState::default(), 100);
    assert_eq!(ctx.attitude.roll, 0.0);
}

// ---- Weapon ----

#[test]
fn test_weapon_waits_for_cooldown() {
    let step = weapon::step(100.0, true, 16.0, WEAPON_COOLDOWN_MS);
    assert!(!step.fired);
    assert_eq!(step.cooldown_ms, 116.0);

    let step = weapon::step(150.0, true, 16.0, WEAPON_COOLDOWN_MS);
    assert!(step.fired);
    assert_eq!(step.cooldown_ms, 0.0);
}

#[test]
fn test_weapon_charges_while_trigger_released() {
    let step = weapon::step(200.0, false, 16.0, WEAPON_COOLDOWN_MS);
    assert!(!step.fired);
    assert_eq!(step.cooldown_ms, 216.0);
}

#[test]
fn test_weapon_fire_rate_under_hold() {
    let mut cooldown = 0.0;
    let mut volleys = 0;
    for _ in 0..60 {
        let step = weapon::step(cooldown, true, 10.0, WEAPON_COOLDOWN_MS);
        cooldown = step.cooldown_ms;
        if step.fired {
            volleys += 1;
        }
    }
    // 15 ticks to charge, 1 to fire: one volley every 16 ticks.
    assert_eq!(volleys, 3);
}
