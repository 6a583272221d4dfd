//! Physics bridge: mass center гридов из Rapier
//!
//! Radar core не знает про rigid bodies — читает только `GridMassCenter`.
//! Эти системы переносят `ReadMassProperties::local_center_of_mass` в `GridMassCenter`
//! для гридов с rapier телом. Грид без тела → без `GridMassCenter` → blip в (0,0,0).

use bevy::prelude::*;
use bevy_rapier3d::prelude::ReadMassProperties;

use crate::components::{Grid, GridMassCenter};

/// System: гриды с rapier телом получают `GridMassCenter`
pub fn init_grid_mass_centers(
    mut commands: Commands,
    grids: Query<(Entity, &ReadMassProperties), (With<Grid>, Without<GridMassCenter>)>,
) {
    for (grid, mass_props) in grids.iter() {
        commands
            .entity(grid)
            .insert(GridMassCenter(mass_props.get().local_center_of_mass));
    }
}

/// System: sync mass center из rapier
///
/// Копирует точное значение (пишем только при изменении, чтобы не дёргать change detection).
/// Порог displacement применяет reconciliation pass при перемещении blip.
pub fn sync_grid_mass_centers(
    mut grids: Query<(&ReadMassProperties, &mut GridMassCenter), With<Grid>>,
) {
    for (mass_props, mut center) in grids.iter_mut() {
        let next = mass_props.get().local_center_of_mass;
        if center.0 != next {
            center.0 = next;
        }
    }
}
