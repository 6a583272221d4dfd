//! Reconciliation Pass (раз в tick)
//!
//! Safety net для пропущенных/задержанных событий:
//! - GC stale link'ов (щит удалён без события, blip удалён снаружи, behavior data снята)
//! - refresh позиции blip (mass center грида) и зеркальных атрибутов

use bevy::prelude::*;

use crate::components::RadarBlip;
use crate::logger;

use super::{apply_link_action, decide_on_moved, BlipLinker, LinkAction, RadarWorld};

/// Почему link удаляется на этом проходе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StaleReason {
    ShieldGone,
    BlipGone,
    BehaviorLost,
}

/// System: reconcile shield blips
///
/// # Flow (для каждой пары из link table)
/// 1. Щит Gone/Terminating → despawn blip (если жив), link в удаление
/// 2. Blip пропал (нет entity или снят `RadarBlip`) → link в удаление, остаток entity despawn
///    (щит живёт без blip до следующего события)
/// 3. У щита нет `Shield` (behavior data) → despawn blip, link в удаление
/// 4. Грид щита не совпадает с гридом blip (пропущенный reparent/detach, грид потерял `Grid`)
///    → Destroy / Recreate после прохода
/// 5. Иначе → позиция (если у грида есть mass center и displacement² > epsilon) + атрибуты;
///    снятый снаружи `Transform` вставляется заново
///
/// Link'и удаляются ПОСЛЕ прохода (без мутации таблицы во время итерации).
pub fn reconcile_shield_blips(
    view: RadarWorld,
    mut blips: Query<(&mut RadarBlip, Option<&mut Transform>)>,
    mut linker: BlipLinker,
) {
    let epsilon_sq = linker.config().position_epsilon_sq;
    let mut stale: Vec<(Entity, StaleReason)> = Vec::new();
    let mut misplaced: Vec<(Entity, LinkAction)> = Vec::new();

    for (shield, blip) in linker.links().pairs() {
        if view.liveness(shield).is_absent() {
            stale.push((shield, StaleReason::ShieldGone));
            continue;
        }

        let Ok((mut radar_blip, transform)) = blips.get_mut(blip) else {
            stale.push((shield, StaleReason::BlipGone));
            continue;
        };

        let Some(attrs) = view.shield_attributes(shield) else {
            stale.push((shield, StaleReason::BehaviorLost));
            continue;
        };

        let state = view.link_state(shield, linker.links());
        let action = decide_on_moved(&state);
        if action != LinkAction::Keep {
            misplaced.push((shield, action));
            continue;
        }

        let center = state.blip_grid.and_then(|grid| view.mass_center(grid));
        match (transform, center) {
            (Some(mut transform), Some(center)) => {
                if transform.translation.distance_squared(center) > epsilon_sq {
                    transform.translation = center;
                }
            }
            // Transform сняли снаружи → вернуть (иначе blip не позиционируется)
            (None, center) => {
                linker.place_blip(blip, center.unwrap_or(Vec3::ZERO));
            }
            (Some(_), None) => {}
        }

        // Change detection только при реальном изменении
        if !radar_blip.mirrors(&attrs) {
            radar_blip.mirror(&attrs);
        }
    }

    for (shield, reason) in stale {
        let Some(blip) = linker.forget(shield) else {
            continue;
        };
        // BlipGone: entity может быть жива без RadarBlip, despawn безопасен в обоих случаях
        linker.despawn_blip(blip);

        logger::log(&format!(
            "🧹 Stale radar link dropped: shield={:?}, blip={:?}, reason={:?}",
            shield, blip, reason
        ));
    }

    for (shield, action) in misplaced {
        logger::log(&format!(
            "🧹 Misplaced radar blip: shield={:?}, action={:?}",
            shield, action
        ));
        apply_link_action(shield, action, &view, &mut linker);
    }

    linker.note_pass();
}
