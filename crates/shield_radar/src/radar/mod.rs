//! Shield radar module: синхронизация Shield → RadarBlip
//!
//! Radar core ответственность:
//! - Link table: shield ↔ blip (биекция)
//! - Proxy Factory: blip на mass center грида, атрибуты из щита
//! - Event handlers: created / reparented / moved / explicit removal
//! - Reconciliation pass: GC stale link'ов + refresh позиции и атрибутов
//! - Teardown: удалить все blip'ы
//!
//! Вне radar core: entity lifecycle, hierarchy, physics, рендер радара.

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

pub mod config;
pub mod decision;
pub mod error;
pub mod events;
pub mod factory;
pub mod handlers;
pub mod hierarchy;
pub mod links;
pub mod reconcile;
pub mod stats;
pub mod teardown;
pub mod view;


// Re-export основных типов
pub use config::RadarConfig;
pub use decision::{decide_on_created, decide_on_moved, decide_on_reparented, LinkAction, LinkState};
pub use error::LinkError;
pub use events::{RadarShutdown, RemoveShieldBlip, ShieldMoved, ShieldReparented};
pub use factory::{remove_link, BlipLinker};
pub use handlers::{
    apply_link_action, handle_remove_requests, handle_shield_moved, handle_shield_reparented,
    link_created_shields,
};
pub use hierarchy::emit_hierarchy_notifications;
pub use links::ShieldBlipLinks;
pub use reconcile::reconcile_shield_blips;
pub use stats::RadarStats;
pub use teardown::{remove_shield_blip, teardown_on_shutdown, teardown_shield_radar};
pub use view::RadarWorld;

/// System set всех radar систем (хост ставит читателей blip'ов `.after(RadarSet)`)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadarSet;

/// Shield Radar Plugin
///
/// Регистрирует события, ресурсы и radar системы (по умолчанию в FixedUpdate).
///
/// Порядок выполнения:
/// 1. init/sync_grid_mass_centers — mass center из rapier
/// 2. emit_hierarchy_notifications — ChildOf changes → ShieldReparented
/// 3. link_created_shields — on shield created
/// 4. handle_shield_reparented
/// 5. handle_shield_moved
/// 6. handle_remove_requests — явное удаление
/// 7. reconcile_shield_blips — reconciliation pass
/// 8. teardown_on_shutdown
///
/// Event-driven коррекции (с flush Commands между этапами) видны ДО reconciliation pass.
pub struct ShieldRadarPlugin {
    pub schedule: InternedScheduleLabel,
}

impl Default for ShieldRadarPlugin {
    fn default() -> Self {
        Self {
            schedule: FixedUpdate.intern(),
        }
    }
}

impl ShieldRadarPlugin {
    /// Plugin в произвольном schedule (тесты используют Update)
    pub fn in_schedule(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Plugin for ShieldRadarPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<ShieldMoved>()
            .add_event::<ShieldReparented>()
            .add_event::<RemoveShieldBlip>()
            .add_event::<RadarShutdown>();

        // Ресурсы (config хоста не перетираем, только валидируем)
        app.init_resource::<RadarConfig>()
            .init_resource::<ShieldBlipLinks>()
            .init_resource::<RadarStats>();
        let config = app.world().resource::<RadarConfig>().clone().validated();
        app.insert_resource(config);

        app.add_systems(
            self.schedule,
            (
                // Фаза 1: Physics bridge
                crate::physics::init_grid_mass_centers,
                crate::physics::sync_grid_mass_centers,

                // Фаза 2: Event handlers (immediate коррекции)
                emit_hierarchy_notifications,
                link_created_shields,
                handle_shield_reparented,
                handle_shield_moved,
                handle_remove_requests,

                // Фаза 3: Reconciliation pass
                reconcile_shield_blips,

                // Фаза 4: Teardown
                teardown_on_shutdown,
            )
                .chain() // Последовательное выполнение + flush Commands между системами
                .in_set(RadarSet),
        );
    }
}
