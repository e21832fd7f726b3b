//! Scripted pilots that stand in for a keyboard.
//!
//! Each pilot turns the previous frame's snapshot into the keys held for
//! the next frame.

use clap::ValueEnum;
use serde::Serialize;

use corridor_core::input::InputState;
use corridor_core::state::{AsteroidView, GameStateSnapshot};

/// Frames spent on each leg of the weave pattern.
const WEAVE_LATERAL_FRAMES: u64 = 90;
const WEAVE_VERTICAL_FRAMES: u64 = 150;

/// Dead zone for the gunner's aim, in world units.
const AIM_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PilotKind {
    /// Hold nothing.
    Idle,
    /// Fire continuously while sweeping side to side and up and down.
    #[default]
    Weave,
    /// Line up with the nearest incoming asteroid and fire.
    Gunner,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    kind: PilotKind,
    frame: u64,
}

impl Autopilot {
    pub fn new(kind: PilotKind) -> Self {
        Self { kind, frame: 0 }
    }

    /// Keys to hold for the next frame.
    pub fn input(&mut self, last: Option<&GameStateSnapshot>) -> InputState {
        let frame = self.frame;
        self.frame += 1;
        match self.kind {
            PilotKind::Idle => InputState::default(),
            PilotKind::Weave => weave(frame),
            PilotKind::Gunner => last.map(aim).unwrap_or_default(),
        }
    }
}

fn weave(frame: u64) -> InputState {
    let leftward = (frame / WEAVE_LATERAL_FRAMES) % 2 == 0;
    let climbing = (frame / WEAVE_VERTICAL_FRAMES) % 2 == 0;
    InputState {
        forward: climbing,
        back: !climbing,
        left: leftward,
        right: !leftward,
        fire: true,
    }
}

fn aim(snapshot: &GameStateSnapshot) -> InputState {
    let Some(ship) = &snapshot.ship else {
        return InputState::default();
    };
    let mut input = InputState {
        fire: true,
        ..Default::default()
    };
    let Some(target) = nearest_incoming(&snapshot.asteroids, ship.position.x) else {
        return input;
    };

    let dy = target.position.y - ship.position.y;
    let dz = target.position.z - ship.position.z;
    input.forward = dy > AIM_TOLERANCE;
    input.back = dy < -AIM_TOLERANCE;
    // Left moves the ship toward +z.
    input.left = dz > AIM_TOLERANCE;
    input.right = dz < -AIM_TOLERANCE;
    input
}

/// The asteroid still ahead of the ship that is closest to it.
fn nearest_incoming(asteroids: &[AsteroidView], ship_x: f64) -> Option<&AsteroidView> {
    asteroids
        .iter()
        .filter(|a| a.position.x < ship_x)
        .max_by(|a, b| a.position.x.total_cmp(&b.position.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::components::{Attitude, Visual};
    use corridor_core::enums::*;
    use corridor_core::state::ShipView;
    use corridor_core::types::{Position, Velocity};

    fn asteroid(x: f64, y: f64, z: f64) -> AsteroidView {
        AsteroidView {
            visual: Visual(1),
            position: Position::new(x, y, z),
            radius: 2.0,
            polyhedron: Polyhedron::Octahedron,
            detail: 1,
            surface: Surface::AsteroidRock,
        }
    }

    fn snapshot_with(asteroids: Vec<AsteroidView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Active,
            ship: Some(ShipView {
                visual: Visual(0),
                position: Position::default(),
                velocity: Velocity::default(),
                attitude: Attitude::default(),
                vertical: VerticalIntent::Idle,
                lateral: LateralIntent::Idle,
            }),
            asteroids,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_holds_nothing() {
        let mut pilot = Autopilot::new(PilotKind::Idle);
        for _ in 0..10 {
            assert_eq!(pilot.input(None), InputState::default());
        }
    }

    #[test]
    fn test_weave_switches_direction() {
        let mut pilot = Autopilot::new(PilotKind::Weave);
        let first = pilot.input(None);
        assert!(first.fire && first.left && first.forward);

        for _ in 1..WEAVE_LATERAL_FRAMES {
            pilot.input(None);
        }
        let turned = pilot.input(None);
        assert!(turned.right && !turned.left);
        assert!(turned.forward);
    }

    #[test]
    fn test_gunner_tracks_nearest_incoming() {
        let mut pilot = Autopilot::new(PilotKind::Gunner);
        let snap = snapshot_with(vec![
            asteroid(-400.0, -10.0, -10.0),
            asteroid(-50.0, 5.0, 5.0),
            // Already behind the ship.
            asteroid(20.0, -5.0, -5.0),
        ]);
        let input = pilot.input(Some(&snap));
        assert!(input.fire);
        assert!(input.forward && !input.back);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_gunner_holds_when_aligned() {
        let mut pilot = Autopilot::new(PilotKind::Gunner);
        let snap = snapshot_with(vec![asteroid(-50.0, 0.2, -0.1)]);
        let input = pilot.input(Some(&snap));
        assert!(input.fire);
        assert!(!input.forward && !input.back && !input.left && !input.right);
    }

    #[test]
    fn test_gunner_without_ship() {
        let mut pilot = Autopilot::new(PilotKind::Gunner);
        assert_eq!(pilot.input(None), InputState::default());
        let snap = GameStateSnapshot::default();
        assert_eq!(pilot.input(Some(&snap)), InputState::default());
    }
}
