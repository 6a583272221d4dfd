//! Grid компоненты: контейнеры для щитов и blip'ов

use bevy::prelude::*;

/// Grid — пространственный агрегат (корабль, станция)
///
/// Marker: entity с этим компонентом поддерживает attachment (щиты и blip'ы
/// вешаются через `ChildOf(grid)`). Родитель без `Grid` — невалидный контейнер.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Grid;

/// Mass center грида в локальных координатах
///
/// Присутствует только у гридов с физическим телом.
/// Обновляется `physics::sync_grid_mass_centers` из rapier или напрямую хостом.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GridMassCenter(pub Vec3);

impl GridMassCenter {
    pub fn get(&self) -> Vec3 {
        self.0
    }
}
