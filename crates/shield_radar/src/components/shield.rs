//! Shield компонент: behavior data щита

use bevy::prelude::*;

/// Shield — behavior data энергощита
///
/// Entity щита живёт независимо от radar core: gameplay системы меняют атрибуты,
/// entity system может удалить его в любой момент без уведомления.
/// Позиция — обычный `Transform`, контейнер — `ChildOf(grid)`.
///
/// Если компонент снят с живой entity → щит "потерял behavior data" и blip удаляется
/// на ближайшем reconciliation pass.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Shield {
    /// Цвет щита (blip зеркалит его)
    pub color: Color,
    /// Радиус щита (blip.scale = radius)
    pub radius: f32,
    /// Щит может работать (энергия, исправность) → blip.enabled
    pub can_work: bool,
}

impl Default for Shield {
    fn default() -> Self {
        Self {
            color: Color::srgb(0.2, 0.6, 1.0),
            radius: 10.0,
            can_work: true,
        }
    }
}

impl Shield {
    pub fn new(color: Color, radius: f32) -> Self {
        Self {
            color,
            radius,
            can_work: true,
        }
    }

    /// Snapshot атрибутов для Proxy Factory / reconciliation
    pub fn attributes(&self) -> ShieldAttributes {
        ShieldAttributes {
            color: self.color,
            radius: self.radius,
            can_work: self.can_work,
        }
    }
}

/// Визуальные атрибуты щита, которые переносятся на blip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldAttributes {
    pub color: Color,
    pub radius: f32,
    pub can_work: bool,
}
