//! Radar logging test
//!
//! Отдельный test binary: глобальный printer подменяется на MemoryLogger,
//! другие тесты его не трогают.

use bevy::prelude::*;
use shield_radar::logger::{self, LogLevel, MemoryLogger};
use shield_radar::radar::{handle_shield_moved, link_created_shields};
use shield_radar::*;

/// App без hierarchy bridge: смену грида замечает только ShieldMoved
fn create_moved_app() -> App {
    let mut app = App::new();
    app.add_event::<ShieldMoved>()
        .init_resource::<RadarConfig>()
        .init_resource::<ShieldBlipLinks>()
        .init_resource::<RadarStats>()
        .add_systems(Update, (link_created_shields, handle_shield_moved).chain());
    app
}

#[test]
fn test_moved_handler_logs_reported_and_actual_grids() {
    let memory = MemoryLogger::default();
    logger::set_logger(Box::new(memory.clone()));
    logger::set_log_level(LogLevel::Debug);

    let mut app = create_moved_app();
    let g1 = app.world_mut().spawn((Grid, GridMassCenter(Vec3::ZERO))).id();
    let g2 = app.world_mut().spawn((Grid, GridMassCenter(Vec3::ONE))).id();
    let shield = app
        .world_mut()
        .spawn((Shield::default(), Transform::default(), ChildOf(g1)))
        .id();
    app.update();

    app.world_mut().entity_mut(shield).insert(ChildOf(g2));
    app.world_mut().send_event(ShieldMoved {
        shield,
        old_grid: Some(g1),
        new_grid: Some(g2),
    });
    app.update();

    let reported = format!("reported {:?} → {:?}", Some(g1), Some(g2));
    let lines = memory.snapshot();
    let moved_line = lines
        .iter()
        .find(|(_, line)| line.contains("moved") && line.contains(&format!("{:?}", shield)))
        .unwrap_or_else(|| panic!("no moved log line in {:?}", lines));
    assert!(moved_line.1.contains(&reported), "payload missing: {}", moved_line.1);
    assert_eq!(moved_line.0, LogLevel::Debug);

    // No-op move (Keep) не логируется
    let before = memory.snapshot().len();
    app.world_mut().send_event(ShieldMoved {
        shield,
        old_grid: Some(g2),
        new_grid: Some(g2),
    });
    app.update();
    let moved_lines_after = memory.snapshot()[before..]
        .iter()
        .filter(|(_, line)| line.contains("moved"))
        .count();
    assert_eq!(moved_lines_after, 0);
}
