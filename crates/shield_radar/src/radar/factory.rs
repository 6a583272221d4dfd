//! Proxy Factory + link mutations
//!
//! `BlipLinker` — единственный путь, которым radar core создаёт/удаляет blip entity
//! и одновременно меняет link table. Все операции silent: ошибки → лог + no-op.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{RadarBlip, ShieldAttributes};
use crate::logger;

use super::{RadarConfig, RadarStats, ShieldBlipLinks};

/// SystemParam: Commands + link table + stats
#[derive(SystemParam)]
pub struct BlipLinker<'w, 's> {
    commands: Commands<'w, 's>,
    links: ResMut<'w, ShieldBlipLinks>,
    stats: ResMut<'w, RadarStats>,
    config: Res<'w, RadarConfig>,
}

impl BlipLinker<'_, '_> {
    pub fn links(&self) -> &ShieldBlipLinks {
        &self.links
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Proxy Factory: spawn blip для щита на гриде и зарегистрировать link
    ///
    /// Precondition (проверяет caller): грид валиден, link для щита нет.
    /// Если link всё-таки есть — double-link отклоняется, возвращается `None`.
    ///
    /// # Flow
    /// 1. Позиция = mass center грида (нет физического тела → `Vec3::ZERO`)
    /// 2. Spawn `RadarBlip` (ring, visible from other grids) + `Transform` + `ChildOf(grid)`
    /// 3. Insert link
    pub fn create_for(
        &mut self,
        shield: Entity,
        attrs: &ShieldAttributes,
        grid: Entity,
        mass_center: Option<Vec3>,
    ) -> Option<Entity> {
        if let Some(existing) = self.links.get(shield) {
            self.stats.double_links_rejected += 1;
            logger::log_warning(&format!(
                "📡 Double link rejected: shield {:?} already has blip {:?}",
                shield, existing
            ));
            return None;
        }

        let position = mass_center.unwrap_or(Vec3::ZERO);
        let blip = self
            .commands
            .spawn((
                RadarBlip::for_shield(attrs),
                Transform::from_translation(position),
                ChildOf(grid),
            ))
            .id();

        if let Err(err) = self.links.insert(shield, blip) {
            self.stats.double_links_rejected += 1;
            logger::log_warning(&format!("📡 Link rejected: {}", err));
            self.commands.entity(blip).despawn();
            return None;
        }

        self.stats.blips_spawned += 1;
        if self.config.log_link_changes {
            logger::log(&format!(
                "📡 Blip {:?} linked: shield={:?}, grid={:?}, pos={:?}",
                blip, shield, grid, position
            ));
        }

        Some(blip)
    }

    /// Удалить blip (если ещё жив) и link щита. No-op если link нет.
    pub fn remove_link(&mut self, shield: Entity) -> Option<Entity> {
        let blip = self.links.remove(shield)?;
        self.despawn_blip(blip);

        if self.config.log_link_changes {
            logger::log(&format!("🗑️ Blip {:?} unlinked from shield {:?}", blip, shield));
        }

        Some(blip)
    }

    /// Вернуть blip'у `Transform` (сняли снаружи)
    pub fn place_blip(&mut self, blip: Entity, position: Vec3) {
        if let Ok(mut entity_commands) = self.commands.get_entity(blip) {
            entity_commands.insert(Transform::from_translation(position));
        }
    }

    /// Удалить link без despawn (вызывающий решает, что делать с blip entity)
    pub fn forget(&mut self, shield: Entity) -> Option<Entity> {
        let blip = self.links.remove(shield)?;
        self.stats.links_dropped_stale += 1;
        Some(blip)
    }

    /// Despawn blip entity если она ещё существует
    pub fn despawn_blip(&mut self, blip: Entity) {
        if let Ok(mut entity_commands) = self.commands.get_entity(blip) {
            entity_commands.despawn();
            self.stats.blips_despawned += 1;
        }
    }

    /// Teardown: удалить все blip'ы и очистить таблицу
    pub fn teardown(&mut self) -> usize {
        let pairs = self.links.drain();
        for &(_, blip) in &pairs {
            self.despawn_blip(blip);
        }

        if !pairs.is_empty() {
            logger::log_info(&format!("📡 Radar teardown: {} blips removed", pairs.len()));
        }

        pairs.len()
    }

    pub fn note_pass(&mut self) {
        self.stats.passes += 1;
    }
}

/// Удалить blip и link щита из любой системы хоста (без `BlipLinker`)
///
/// Применяется сразу при flush Commands, без ожидания radar tick.
/// No-op (`None`) если у щита нет link.
pub fn remove_link(
    commands: &mut Commands,
    links: &mut ShieldBlipLinks,
    shield: Entity,
) -> Option<Entity> {
    let blip = links.remove(shield)?;
    if let Ok(mut entity_commands) = commands.get_entity(blip) {
        entity_commands.despawn();
    }
    Some(blip)
}
