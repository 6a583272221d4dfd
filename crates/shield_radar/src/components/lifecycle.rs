//! Lifecycle: tri-state liveness для внешних entity

use bevy::prelude::*;

/// Компонент-маркер: entity в процессе удаления
///
/// Хост ставит его перед отложенным despawn (аналог DespawnAfter).
/// Radar core трактует Terminating так же как Gone.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Terminating;

/// Liveness внешней entity с точки зрения radar core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Alive,
    Terminating,
    Gone,
}

impl Liveness {
    /// Terminating и Gone — одно и то же для radar core
    pub fn is_absent(self) -> bool {
        !matches!(self, Liveness::Alive)
    }

    /// `None` → entity нет в мире, `Some(flag)` → есть, flag = помечена Terminating
    pub fn from_lookup(terminating: Option<bool>) -> Self {
        match terminating {
            None => Liveness::Gone,
            Some(true) => Liveness::Terminating,
            Some(false) => Liveness::Alive,
        }
    }
}
