//! RadarBlip компоненты: прокси щита на радаре

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ShieldAttributes;

/// Форма blip на радаре
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum BlipShape {
    /// Кольцо — для щитов
    #[default]
    Ring,
}

/// RadarBlip — визуальная модель щита на радаре
///
/// Создаётся и удаляется ТОЛЬКО radar core (Proxy Factory / teardown / reconciliation).
/// Позиция — `Transform` относительно `ChildOf(grid)` = mass center грида.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RadarBlip {
    /// Зеркало `Shield::color`
    pub color: Color,
    /// Зеркало `Shield::radius`
    pub scale: f32,
    /// Всегда `BlipShape::Ring`
    pub shape: BlipShape,
    /// Зеркало `Shield::can_work`
    pub enabled: bool,
    /// Blip виден с других гридов (для щитов всегда true)
    pub visible_from_other_grids: bool,
}

impl RadarBlip {
    /// Blip для щита: ring, виден с других гридов
    pub fn for_shield(attrs: &ShieldAttributes) -> Self {
        Self {
            color: attrs.color,
            scale: attrs.radius,
            shape: BlipShape::Ring,
            enabled: attrs.can_work,
            visible_from_other_grids: true,
        }
    }

    /// Копирует зеркальные атрибуты (shape/visibility не трогаем)
    pub fn mirror(&mut self, attrs: &ShieldAttributes) {
        self.color = attrs.color;
        self.scale = attrs.radius;
        self.enabled = attrs.can_work;
    }

    pub fn mirrors(&self, attrs: &ShieldAttributes) -> bool {
        self.color == attrs.color && self.scale == attrs.radius && self.enabled == attrs.can_work
    }
}
