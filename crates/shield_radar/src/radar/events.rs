//! Radar events
//!
//! # Входящие уведомления (от hierarchy / gameplay)
//! - `ShieldMoved` — позиционное перемещение (может сменить грид)
//! - `ShieldReparented` — смена места в иерархии (шлёт и hierarchy bridge)
//!
//! # Команды radar core
//! - `RemoveShieldBlip` — явное удаление link (щит удаляется путём, который мы не видим)
//! - `RadarShutdown` — teardown всех blip'ов

use bevy::prelude::*;

/// Щит переместился
///
/// Payload (old/new grid) — только для логов: решение принимается по текущему состоянию мира.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShieldMoved {
    pub shield: Entity,
    pub old_grid: Option<Entity>,
    pub new_grid: Option<Entity>,
}

/// Щит сменил родителя в иерархии (`None` — отцеплен от всего)
#[derive(Event, Debug, Clone, Copy)]
pub struct ShieldReparented {
    pub shield: Entity,
    pub new_grid: Option<Entity>,
}

/// Явно удалить blip щита (no-op если link нет)
#[derive(Event, Debug, Clone, Copy)]
pub struct RemoveShieldBlip {
    pub shield: Entity,
}

/// Остановка radar core: удалить все blip'ы и очистить link table
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RadarShutdown;
