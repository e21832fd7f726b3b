//! Tests for hitbox math, the overlap test, input mapping and serde shapes.

use crate::bounds::{collides, overlaps, Hitbox, HitboxFaces};
use crate::commands::PlayerCommand;
use crate::components::Visual;
use crate::enums::EntityKind;
use crate::events::{AudioEvent, SceneEvent};
use crate::input::{InputKey, InputState};
use crate::types::{sanitize_delta_ms, Position, SimTime};

// ---- Hitbox faces ----

#[test]
fn test_faces_centered_on_position() {
    let faces = Hitbox::new(2.0, 4.0, 6.0).faces_at(&Position::new(10.0, 20.0, 30.0));
    assert_eq!(faces.left, 9.0);
    assert_eq!(faces.right, 11.0);
    assert_eq!(faces.bottom, 18.0);
    assert_eq!(faces.top, 22.0);
    assert_eq!(faces.front, 27.0);
    assert_eq!(faces.back, 33.0);
}

#[test]
fn test_faces_follow_offset() {
    let hitbox = Hitbox::new(4.5, 1.0, 2.0).with_offset(Position::new(2.0, 0.0, 0.0));
    let faces = hitbox.faces_at(&Position::new(0.0, 0.0, 0.0));
    assert!((faces.left - -0.25).abs() < 1e-12);
    assert!((faces.right - 4.25).abs() < 1e-12);
}

#[test]
fn test_faces_ordered_for_any_dimensions() {
    for &(w, h, d) in &[(0.0, 0.0, 0.0), (1.0, 2.0, 3.0), (-5.0, 0.5, -0.1)] {
        let faces = Hitbox::new(w, h, d).faces_at(&Position::new(-3.0, 7.0, 1.5));
        assert!(faces.top >= faces.bottom);
        assert!(faces.right >= faces.left);
        assert!(faces.back >= faces.front);
    }
}

// ---- Overlap test ----

#[test]
fn test_overlap_is_symmetric() {
    let boxes = [
        Hitbox::cube(2.0).faces_at(&Position::new(0.0, 0.0, 0.0)),
        Hitbox::cube(2.0).faces_at(&Position::new(1.5, 0.5, -0.5)),
        Hitbox::new(0.2, 0.2, 1.5).faces_at(&Position::new(3.0, 0.0, 0.0)),
        Hitbox::new(4.5, 1.0, 2.0).faces_at(&Position::new(0.0, 10.0, 0.0)),
    ];
    for a in &boxes {
        for b in &boxes {
            assert_eq!(overlaps(a, b), overlaps(b, a));
        }
    }
}

#[test]
fn test_identical_centers_always_overlap() {
    let center = Position::new(-123.0, 4.0, 17.5);
    let a = Hitbox::new(0.2, 0.2, 1.5).faces_at(&center);
    let b = Hitbox::cube(6.0).faces_at(&center);
    let o = overlaps(&a, &b);
    assert!(o.x && o.y && o.z);
    assert!(o.all());
}

#[test]
fn test_separated_on_one_axis_never_collides() {
    let a_box = Hitbox::new(2.0, 2.0, 2.0);
    let b_box = Hitbox::new(4.0, 1.0, 0.5);
    let origin = Position::default();
    // Half-extent sums: x = 3.0, y = 1.5, z = 1.25.
    let cases = [
        Position::new(3.01, 0.0, 0.0),
        Position::new(0.0, -1.51, 0.0),
        Position::new(0.0, 0.0, 1.26),
    ];
    for p in &cases {
        let a = a_box.faces_at(&origin);
        let b = b_box.faces_at(p);
        assert!(!collides(&a, &b), "boxes at {p:?} should not collide");
    }
}

#[test]
fn test_touching_faces_count_as_overlap() {
    let a = Hitbox::cube(2.0).faces_at(&Position::new(0.0, 0.0, 0.0));
    let b = Hitbox::cube(2.0).faces_at(&Position::new(2.0, 0.0, 0.0));
    assert!(collides(&a, &b));
}

#[test]
fn test_partial_axis_report() {
    let a = HitboxFaces {
        top: 1.0,
        bottom: -1.0,
        left: -1.0,
        right: 1.0,
        front: -1.0,
        back: 1.0,
    };
    let b = HitboxFaces {
        top: 10.0,
        bottom: 5.0,
        ..a
    };
    let o = overlaps(&a, &b);
    assert!(o.x);
    assert!(!o.y);
    assert!(o.z);
    assert!(!o.all());
}

// ---- Input ----

#[test]
fn test_key_codes_map_to_input() {
    let input = InputState::from_key_codes(["KeyW", "KeyD", "Space"]);
    assert!(input.forward);
    assert!(input.right);
    assert!(input.fire);
    assert!(!input.back);
    assert!(!input.left);
}

#[test]
fn test_unknown_key_codes_ignored() {
    let input = InputState::from_key_codes(["ArrowUp", "KeyQ", "", "Enter"]);
    assert_eq!(input, InputState::default());
    assert_eq!(InputKey::from_code("keyw"), None);
}

#[test]
fn test_input_set_and_release() {
    let mut input = InputState::default().with(InputKey::Left);
    assert!(input.is_held(InputKey::Left));
    input.set(InputKey::Left, false);
    assert!(!input.is_held(InputKey::Left));
}

// ---- Time ----

#[test]
fn test_sanitize_delta() {
    assert_eq!(sanitize_delta_ms(16.0), 16.0);
    assert_eq!(sanitize_delta_ms(-4.0), 0.0);
    assert_eq!(sanitize_delta_ms(f64::NAN), 0.0);
    assert_eq!(sanitize_delta_ms(f64::INFINITY), 0.0);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(10.0);
    time.advance(15.0);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs() - 0.025).abs() < 1e-12);
}

// ---- Serde shapes ----

/// Commands and events are tagged unions on the wire.
#[test]
fn test_tagged_serde_shapes() {
    let json = serde_json::to_string(&PlayerCommand::Restart).unwrap();
    assert_eq!(json, r#"{"type":"Restart"}"#);

    let event = SceneEvent::Added {
        visual: Visual(7),
        kind: EntityKind::Debris,
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: SceneEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);

    let json = serde_json::to_string(&AudioEvent::Shot { volume: 0.5 }).unwrap();
    assert!(json.contains(r#""type":"Shot""#));
}
