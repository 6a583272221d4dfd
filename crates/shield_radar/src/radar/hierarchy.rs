//! Hierarchy bridge: изменения `ChildOf` щитов → `ShieldReparented`
//!
//! Хост может вообще не слать события руками: достаточно менять Bevy hierarchy.

use bevy::prelude::*;

use crate::components::Shield;

use super::{ShieldBlipLinks, ShieldReparented};

/// System: emit hierarchy notifications
///
/// - `Changed<ChildOf>` на щите (insert / replace) → reparented на нового родителя
/// - `RemovedComponents<ChildOf>` (detach или despawn) → reparented в `None`,
///   только для щитов и entity из link table
pub fn emit_hierarchy_notifications(
    reparented: Query<(Entity, &ChildOf), (With<Shield>, Changed<ChildOf>)>,
    mut detached: RemovedComponents<ChildOf>,
    shields: Query<(), With<Shield>>,
    links: Res<ShieldBlipLinks>,
    mut events: EventWriter<ShieldReparented>,
) {
    for (shield, child_of) in reparented.iter() {
        events.write(ShieldReparented {
            shield,
            new_grid: Some(child_of.parent()),
        });
    }

    for entity in detached.read() {
        if links.contains(entity) || shields.contains(entity) {
            events.write(ShieldReparented {
                shield: entity,
                new_grid: None,
            });
        }
    }
}
