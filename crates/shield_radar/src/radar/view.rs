//! Read-only view внешних коллабораторов (entity lifecycle, hierarchy, physics)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{Grid, GridMassCenter, Liveness, RadarBlip, Shield, ShieldAttributes, Terminating};

use super::{LinkState, ShieldBlipLinks};

/// SystemParam: всё что radar core читает из мира
///
/// - liveness: существует ли entity и не помечена ли Terminating
/// - shields: behavior data + текущий родитель щита
/// - grids: валидные контейнеры + mass center (если есть физическое тело)
/// - blip_parents: текущий грид blip'а
#[derive(SystemParam)]
pub struct RadarWorld<'w, 's> {
    liveness: Query<'w, 's, Has<Terminating>>,
    shields: Query<'w, 's, (&'static Shield, Option<&'static ChildOf>)>,
    grids: Query<'w, 's, Option<&'static GridMassCenter>, With<Grid>>,
    blip_parents: Query<'w, 's, Option<&'static ChildOf>, With<RadarBlip>>,
}

impl RadarWorld<'_, '_> {
    pub fn liveness(&self, entity: Entity) -> Liveness {
        Liveness::from_lookup(self.liveness.get(entity).ok())
    }

    /// Атрибуты щита (`None` — entity нет или behavior data снята)
    pub fn shield_attributes(&self, shield: Entity) -> Option<ShieldAttributes> {
        self.shields.get(shield).ok().map(|(s, _)| s.attributes())
    }

    /// Грид поддерживает attachment
    pub fn is_grid(&self, entity: Entity) -> bool {
        self.grids.contains(entity)
    }

    /// Mass center грида (`None` — нет физического тела или это не грид)
    pub fn mass_center(&self, grid: Entity) -> Option<Vec3> {
        self.grids.get(grid).ok().flatten().map(GridMassCenter::get)
    }

    /// Валидный грид щита с учётом liveness и behavior data
    pub fn attachable_grid(&self, shield: Entity) -> Option<Entity> {
        if self.liveness(shield).is_absent() {
            return None;
        }
        let (_, child_of) = self.shields.get(shield).ok()?;
        let parent = child_of?.parent();
        self.is_grid(parent).then_some(parent)
    }

    /// Текущий грид blip'а (`None` — blip пропал или отцеплен)
    pub fn blip_grid(&self, blip: Entity) -> Option<Entity> {
        self.blip_parents.get(blip).ok().flatten().map(ChildOf::parent)
    }

    pub fn link_state(&self, shield: Entity, links: &ShieldBlipLinks) -> LinkState {
        let linked_blip = links.get(shield);
        LinkState {
            linked_blip,
            blip_grid: linked_blip.and_then(|blip| self.blip_grid(blip)),
            shield_grid: self.attachable_grid(shield),
        }
    }
}
