//! Stateless decision functions для event handlers
//!
//! Решение всегда выводится из ТЕКУЩЕГО состояния (LinkState), не из payload события.
//! Поэтому move и reparent можно получать в любом порядке и в любом количестве:
//! оба сходятся к одному и тому же восстановлению инвариантов.

use bevy::prelude::Entity;

/// Snapshot состояния одного щита для принятия решения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkState {
    /// Blip из link table (если link есть)
    pub linked_blip: Option<Entity>,
    /// Грид, к которому сейчас прицеплен blip (`None` — blip пропал или отцеплен)
    pub blip_grid: Option<Entity>,
    /// Валидный грид щита (`None` — не прицеплен, грид невалиден, нет behavior data, щит удаляется)
    pub shield_grid: Option<Entity>,
}

/// Что сделать с link щита
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Инварианты уже выполнены
    Keep,
    /// Link нет → создать blip на гриде
    Create(Entity),
    /// Удалить blip и link
    Destroy,
    /// Удалить старый blip и создать новый на гриде (не reparent-in-place)
    Recreate(Entity),
}

/// Щит создан: blip только если прицеплен к валидному гриду и link ещё нет
pub fn decide_on_created(state: &LinkState) -> LinkAction {
    if state.linked_blip.is_some() {
        return LinkAction::Keep;
    }
    state.shield_grid.map_or(LinkAction::Keep, LinkAction::Create)
}

/// Щит переместился: без link — no-op
pub fn decide_on_moved(state: &LinkState) -> LinkAction {
    if state.linked_blip.is_none() {
        return LinkAction::Keep;
    }
    decide_for_linked(state)
}

/// Щит сменил родителя: без link и с валидным гридом — создать
pub fn decide_on_reparented(state: &LinkState) -> LinkAction {
    if state.linked_blip.is_none() {
        return state.shield_grid.map_or(LinkAction::Keep, LinkAction::Create);
    }
    decide_for_linked(state)
}

fn decide_for_linked(state: &LinkState) -> LinkAction {
    match state.shield_grid {
        None => LinkAction::Destroy,
        Some(grid) if state.blip_grid != Some(grid) => LinkAction::Recreate(grid),
        Some(_) => LinkAction::Keep,
    }
}
