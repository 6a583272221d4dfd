//! Headless симуляция shield radar
//!
//! Гриды с щитами, случайные reparent/despawn, отчёт по link table каждые 100 тиков

use bevy::prelude::*;
use rand::Rng;
use shield_radar::{
    create_headless_app, logger, radar_links, Grid, GridMassCenter, RadarConfig, RadarStats,
    DeterministicRng, Shield, Terminating,
};

const GRID_COUNT: usize = 4;
const SHIELDS_PER_GRID: usize = 3;
const TICKS: usize = 1000;

fn main() {
    let seed = 42;
    let mut app = create_headless_app(RadarConfig::default(), seed);
    logger::set_log_level(logger::LogLevel::Info);
    logger::log_info(&format!("Starting shield radar headless simulation (seed: {})", seed));

    let grids: Vec<Entity> = (0..GRID_COUNT)
        .map(|i| {
            app.world_mut()
                .spawn((Grid, GridMassCenter(Vec3::new(i as f32 * 10.0, 0.0, 0.0))))
                .id()
        })
        .collect();

    for &grid in &grids {
        for _ in 0..SHIELDS_PER_GRID {
            app.world_mut()
                .spawn((Shield::default(), Transform::default(), ChildOf(grid)));
        }
    }

    for tick in 0..TICKS {
        if tick % 50 == 25 {
            shuffle_one_shield(&mut app, &grids);
        }

        app.update();

        if tick % 100 == 0 {
            let links = radar_links(app.world());
            let stats = app.world().resource::<RadarStats>().clone();
            println!(
                "Tick {}: {} links, spawned={}, despawned={}, stale={}",
                tick,
                links.len(),
                stats.blips_spawned,
                stats.blips_despawned,
                stats.links_dropped_stale
            );
        }
    }

    println!("Simulation complete!");
}

/// Случайный щит: reparent на другой грид, detach или пометить Terminating
fn shuffle_one_shield(app: &mut App, grids: &[Entity]) {
    let world = app.world_mut();
    let mut shields = world.query_filtered::<Entity, (With<Shield>, Without<Terminating>)>();
    let candidates: Vec<Entity> = shields.iter(world).collect();
    if candidates.is_empty() {
        return;
    }

    let (shield, roll, target) = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        let shield = candidates[rng.rng.gen_range(0..candidates.len())];
        let roll = rng.rng.gen_range(0..10);
        let target = grids[rng.rng.gen_range(0..grids.len())];
        (shield, roll, target)
    };

    match roll {
        0 => {
            world.entity_mut(shield).insert(Terminating);
        }
        1 => {
            world.entity_mut(shield).remove::<ChildOf>();
        }
        _ => {
            world.entity_mut(shield).insert(ChildOf(target));
        }
    }
}
