//! Scene ledger: allocates visual handles and records scene graph changes.
//!
//! Every spawn goes through `attach` and every removal through `despawn`,
//! so the renderer sees exactly one `Added` and at most one `Removed` per
//! handle.

use hecs::{Entity, World};

use corridor_core::components::Visual;
use corridor_core::enums::EntityKind;
use corridor_core::events::SceneEvent;

#[derive(Debug, Default)]
pub struct SceneLedger {
    next_visual: u32,
    events: Vec<SceneEvent>,
}

impl SceneLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle for a new scene object.
    pub fn attach(&mut self, kind: EntityKind) -> Visual {
        let visual = Visual(self.next_visual);
        self.next_visual += 1;
        self.events.push(SceneEvent::Added { visual, kind });
        visual
    }

    /// Remove an entity and release its scene object.
    /// Returns false (and records nothing) if the entity is already gone.
    pub fn despawn(&mut self, world: &mut World, entity: Entity) -> bool {
        let visual = world.get::<&Visual>(entity).ok().map(|v| *v);
        if world.despawn(entity).is_err() {
            return false;
        }
        if let Some(visual) = visual {
            self.events.push(SceneEvent::Removed { visual });
        }
        true
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
