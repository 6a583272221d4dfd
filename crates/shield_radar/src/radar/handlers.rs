//! Event handlers: created / reparented / moved / explicit removal
//!
//! Все handlers идемпотентны: повторное событие при выполненных инвариантах → no-op.
//! События одного щита за один прогон системы схлопываются (решение всё равно
//! принимается по текущему состоянию).

use bevy::prelude::*;

use crate::components::Shield;
use crate::logger;

use super::{
    decide_on_created, decide_on_moved, decide_on_reparented, BlipLinker, LinkAction, RadarWorld,
    RemoveShieldBlip, ShieldMoved, ShieldReparented,
};

/// Выполнить решение для щита
pub fn apply_link_action(
    shield: Entity,
    action: LinkAction,
    view: &RadarWorld,
    linker: &mut BlipLinker,
) {
    match action {
        LinkAction::Keep => {}
        LinkAction::Create(grid) => {
            spawn_for_grid(shield, grid, view, linker);
        }
        LinkAction::Destroy => {
            linker.remove_link(shield);
        }
        LinkAction::Recreate(grid) => {
            linker.remove_link(shield);
            spawn_for_grid(shield, grid, view, linker);
        }
    }
}

fn spawn_for_grid(shield: Entity, grid: Entity, view: &RadarWorld, linker: &mut BlipLinker) {
    // shield_grid уже проверен decision'ом, значит behavior data есть
    let Some(attrs) = view.shield_attributes(shield) else {
        return;
    };
    linker.create_for(shield, &attrs, grid, view.mass_center(grid));
}

/// Уникальные щиты в детерминированном порядке
fn unique_shields(shields: impl Iterator<Item = Entity>) -> Vec<Entity> {
    let mut shields: Vec<Entity> = shields.collect();
    shields.sort_unstable();
    shields.dedup();
    shields
}

/// System: on shield created
///
/// `Added<Shield>` — щит заспавнен (или behavior data вернули на живую entity).
/// Прицеплен к валидному гриду → Proxy Factory, иначе ничего.
pub fn link_created_shields(
    created: Query<Entity, Added<Shield>>,
    view: RadarWorld,
    mut linker: BlipLinker,
) {
    for shield in unique_shields(created.iter()) {
        let state = view.link_state(shield, linker.links());
        let action = decide_on_created(&state);
        apply_link_action(shield, action, &view, &mut linker);
    }
}

/// System: on shield reparented
///
/// # Flow
/// 1. Схлопываем ShieldReparented по щиту
/// 2. LinkState из текущего мира (payload new_grid игнорируется)
/// 3. decide_on_reparented → Create / Destroy / Recreate / Keep
pub fn handle_shield_reparented(
    mut events: EventReader<ShieldReparented>,
    view: RadarWorld,
    mut linker: BlipLinker,
) {
    for shield in unique_shields(events.read().map(|event| event.shield)) {
        let state = view.link_state(shield, linker.links());
        let action = decide_on_reparented(&state);

        if action != LinkAction::Keep && linker.config().log_link_changes {
            logger::log(&format!(
                "🔀 Shield {:?} reparented: grid {:?} → {:?} ({:?})",
                shield, state.blip_grid, state.shield_grid, action
            ));
        }

        apply_link_action(shield, action, &view, &mut linker);
    }
}

/// System: on shield moved
///
/// Позиционное перемещение. Без link — no-op (создание только через created/reparented).
/// Позицию внутри грида обновляет reconciliation pass.
pub fn handle_shield_moved(
    mut events: EventReader<ShieldMoved>,
    view: RadarWorld,
    mut linker: BlipLinker,
) {
    let moved: Vec<ShieldMoved> = events.read().copied().collect();

    for shield in unique_shields(moved.iter().map(|event| event.shield)) {
        let state = view.link_state(shield, linker.links());
        let action = decide_on_moved(&state);

        if action != LinkAction::Keep && linker.config().log_link_changes {
            // Payload последнего события щита: только для лога
            let reported = moved.iter().rev().find(|event| event.shield == shield);
            logger::log(&format!(
                "🚚 Shield {:?} moved: reported {:?} → {:?}, actual grid {:?} → {:?} ({:?})",
                shield,
                reported.and_then(|event| event.old_grid),
                reported.and_then(|event| event.new_grid),
                state.blip_grid,
                state.shield_grid,
                action
            ));
        }

        apply_link_action(shield, action, &view, &mut linker);
    }
}

/// System: explicit removal (`RemoveShieldBlip`)
///
/// Для коллабораторов, удаляющих щит путём без move/reparent (например "shield is being deleted" hook).
pub fn handle_remove_requests(mut events: EventReader<RemoveShieldBlip>, mut linker: BlipLinker) {
    for shield in unique_shields(events.read().map(|event| event.shield)) {
        linker.remove_link(shield);
    }
}
