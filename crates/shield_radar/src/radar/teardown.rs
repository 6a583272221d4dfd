//! Teardown: удалить все blip'ы при остановке radar core
//!
//! Плюс прямые entry points через `&mut World` (вне schedule).

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::logger;

use super::{BlipLinker, RadarConfig, RadarShutdown, RadarStats, ShieldBlipLinks};

/// System: teardown по `RadarShutdown` или `AppExit`
pub fn teardown_on_shutdown(
    mut shutdown: EventReader<RadarShutdown>,
    mut exit: EventReader<AppExit>,
    mut linker: BlipLinker,
) {
    // Читаем оба reader'а целиком, чтобы события не сработали повторно
    let requested = shutdown.read().count() + exit.read().count() > 0;
    if requested {
        linker.teardown();
    }
}

/// Teardown напрямую через World (вне schedule, например при выгрузке мира)
///
/// Идемпотентен: повторный вызов на пустой таблице ничего не делает.
/// Возвращает количество удалённых link'ов.
pub fn teardown_shield_radar(world: &mut World) -> usize {
    let Some(pairs) = world
        .get_resource_mut::<ShieldBlipLinks>()
        .map(|mut links| links.drain())
    else {
        return 0;
    };

    let mut despawned = 0;
    for &(_, blip) in &pairs {
        if let Ok(entity) = world.get_entity_mut(blip) {
            entity.despawn();
            despawned += 1;
        }
    }

    if let Some(mut stats) = world.get_resource_mut::<RadarStats>() {
        stats.blips_despawned += despawned;
    }

    if !pairs.is_empty() {
        logger::log_info(&format!("📡 Radar teardown (world): {} blips removed", pairs.len()));
    }

    pairs.len()
}

/// Явное удаление blip щита напрямую через World (сразу, без ожидания radar tick)
///
/// No-op (`None`) если у щита нет link. Возвращает blip, который был в link table.
pub fn remove_shield_blip(world: &mut World, shield: Entity) -> Option<Entity> {
    let blip = world.get_resource_mut::<ShieldBlipLinks>()?.remove(shield)?;

    let despawned = world.despawn(blip);
    if despawned {
        if let Some(mut stats) = world.get_resource_mut::<RadarStats>() {
            stats.blips_despawned += 1;
        }
    }

    let log_changes = world
        .get_resource::<RadarConfig>()
        .is_some_and(|config| config.log_link_changes);
    if log_changes {
        logger::log(&format!("🗑️ Blip {:?} unlinked from shield {:?}", blip, shield));
    }

    Some(blip)
}
