//! Radar integration test
//!
//! Полный ShieldRadarPlugin (hierarchy bridge + handlers + reconciliation + teardown)
//! в Update schedule: один `app.update()` = один radar tick.
//!
//! Проверяем:
//! - Сценарии: blip на mass center, unattached щит, reparent между гридами,
//!   despawn без события, выключение щита
//! - Position convergence, attribute mirroring, idempotent teardown

use bevy::app::AppExit;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use shield_radar::*;

/// Helper: App с radar core в Update (детерминированный tick без Time<Fixed>)
fn create_radar_app() -> App {
    let mut app = App::new();
    app.add_plugins(ShieldRadarPlugin::in_schedule(Update));
    app
}

fn spawn_grid(app: &mut App, mass_center: Vec3) -> Entity {
    app.world_mut().spawn((Grid, GridMassCenter(mass_center))).id()
}

fn spawn_shield(app: &mut App, grid: Option<Entity>) -> Entity {
    let mut shield = app.world_mut().spawn((Shield::default(), Transform::default()));
    if let Some(grid) = grid {
        shield.insert(ChildOf(grid));
    }
    shield.id()
}

fn link_of(app: &App, shield: Entity) -> Option<Entity> {
    app.world().resource::<ShieldBlipLinks>().get(shield)
}

fn blips(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<RadarBlip>>().iter(world).collect()
}

/// Scenario A: щит на гриде с mass center (5,5) → ring blip в (5,5)
#[test]
fn test_blip_created_at_grid_mass_center() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::new(5.0, 5.0, 0.0));
    let shield = spawn_shield(&mut app, Some(grid));

    app.update();

    let blip = link_of(&app, shield).expect("Scenario A: blip must exist");
    let world = app.world();
    let radar_blip = world.get::<RadarBlip>(blip).unwrap();
    assert_eq!(radar_blip.shape, BlipShape::Ring);
    assert!(radar_blip.visible_from_other_grids);
    assert_eq!(world.get::<Transform>(blip).unwrap().translation, Vec3::new(5.0, 5.0, 0.0));
    assert_eq!(world.get::<ChildOf>(blip).unwrap().parent(), grid);
}

/// Scenario B: unattached щит → ни blip, ни link
#[test]
fn test_unattached_shield_gets_no_blip() {
    let mut app = create_radar_app();
    let shield = spawn_shield(&mut app, None);

    app.update();
    app.update();

    assert_eq!(link_of(&app, shield), None);
    assert!(blips(&mut app).is_empty());
}

/// Scenario C: reparent G1 (0,0) → G2 (10,0) через hierarchy (без ручных событий)
#[test]
fn test_reparent_between_grids_recreates_blip() {
    let mut app = create_radar_app();
    let g1 = spawn_grid(&mut app, Vec3::ZERO);
    let g2 = spawn_grid(&mut app, Vec3::new(10.0, 0.0, 0.0));
    let shield = spawn_shield(&mut app, Some(g1));
    app.update();
    let old_blip = link_of(&app, shield).unwrap();

    app.world_mut().entity_mut(shield).insert(ChildOf(g2));
    app.update();

    let new_blip = link_of(&app, shield).expect("Scenario C: link must survive reparent");
    assert_ne!(new_blip, old_blip);
    assert!(app.world().get_entity(old_blip).is_err(), "old blip destroyed");
    assert_eq!(app.world().get::<ChildOf>(new_blip).unwrap().parent(), g2);
    assert_eq!(
        app.world().get::<Transform>(new_blip).unwrap().translation,
        Vec3::new(10.0, 0.0, 0.0)
    );
    assert_eq!(blips(&mut app), vec![new_blip]);
    assert_eq!(app.world().resource::<ShieldBlipLinks>().len(), 1);
}

/// Scenario D: щит удалён напрямую (без ShieldMoved/ShieldReparented)
#[test]
fn test_direct_shield_despawn_cleans_up_blip() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();
    let blip = link_of(&app, shield).unwrap();

    app.world_mut().despawn(shield);
    app.update();

    assert_eq!(link_of(&app, shield), None);
    assert!(app.world().get_entity(blip).is_err());
    assert!(blips(&mut app).is_empty());
}

/// Scenario E: can_work → false → blip.enabled = false, без новых entity
#[test]
fn test_operability_flip_disables_blip() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();
    let blip = link_of(&app, shield).unwrap();
    let entity_count = app.world().entities().len();

    app.world_mut().get_mut::<Shield>(shield).unwrap().can_work = false;
    app.update();

    assert!(!app.world().get::<RadarBlip>(blip).unwrap().enabled);
    assert_eq!(link_of(&app, shield), Some(blip));
    assert_eq!(app.world().entities().len(), entity_count);
}

/// Position convergence: mass center сдвинулся больше порога → blip там через один pass
#[test]
fn test_position_converges_within_one_pass() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();
    let blip = link_of(&app, shield).unwrap();

    for step in 1..=5 {
        let center = Vec3::new(step as f32, -(step as f32), 0.5);
        app.world_mut().get_mut::<GridMassCenter>(grid).unwrap().0 = center;
        app.update();

        assert_eq!(
            app.world().get::<Transform>(blip).unwrap().translation,
            center,
            "step {}: blip must follow mass center",
            step
        );
    }
}

/// Attribute mirroring каждый tick
#[test]
fn test_attributes_mirrored_every_tick() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();
    let blip = link_of(&app, shield).unwrap();

    for tick in 0..10 {
        {
            let mut s = app.world_mut().get_mut::<Shield>(shield).unwrap();
            s.radius = 10.0 + tick as f32;
            s.can_work = tick % 2 == 0;
            s.color = Color::srgb(tick as f32 / 10.0, 0.5, 0.5);
        }
        app.update();

        let world = app.world();
        let attrs = world.get::<Shield>(shield).unwrap().attributes();
        assert!(
            world.get::<RadarBlip>(blip).unwrap().mirrors(&attrs),
            "Tick {}: blip attributes drifted",
            tick
        );
    }
}

/// Detach (remove ChildOf) → link и blip удалены; re-attach → новый blip
#[test]
fn test_detach_and_reattach() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();

    app.world_mut().entity_mut(shield).remove::<ChildOf>();
    app.update();
    assert_eq!(link_of(&app, shield), None);
    assert!(blips(&mut app).is_empty());

    app.world_mut().entity_mut(shield).insert(ChildOf(grid));
    app.update();
    assert!(link_of(&app, shield).is_some());
    assert_eq!(blips(&mut app).len(), 1);
}

/// Grid despawn (рекурсивно уносит щиты и blip'ы) → таблица пустая
#[test]
fn test_grid_despawn_clears_links() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    for _ in 0..3 {
        spawn_shield(&mut app, Some(grid));
    }
    app.update();
    assert_eq!(app.world().resource::<ShieldBlipLinks>().len(), 3);

    app.world_mut().despawn(grid);
    app.update();

    assert!(app.world().resource::<ShieldBlipLinks>().is_empty());
    assert!(blips(&mut app).is_empty());
}

/// Explicit removal: blip удалён, щит на гриде остаётся без blip до следующего события
#[test]
fn test_explicit_removal_via_event() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();

    app.world_mut().send_event(RemoveShieldBlip { shield });
    app.update();
    assert_eq!(link_of(&app, shield), None);

    app.world_mut().send_event(ShieldReparented {
        shield,
        new_grid: Some(grid),
    });
    app.update();
    assert!(link_of(&app, shield).is_some());
}

/// Explicit removal через World: сразу, без radar tick; повтор и щит без link → no-op
#[test]
fn test_remove_shield_blip_through_world() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    let unattached = spawn_shield(&mut app, None);
    app.update();
    let blip = link_of(&app, shield).unwrap();

    assert_eq!(remove_shield_blip(app.world_mut(), shield), Some(blip));
    assert_eq!(link_of(&app, shield), None);
    assert!(app.world().get_entity(blip).is_err());
    assert_eq!(app.world().resource::<RadarStats>().blips_despawned, 1);

    assert_eq!(remove_shield_blip(app.world_mut(), shield), None);
    assert_eq!(remove_shield_blip(app.world_mut(), unattached), None);

    // Reconciliation не пересоздаёт blip без события
    app.update();
    assert_eq!(link_of(&app, shield), None);
    assert!(blips(&mut app).is_empty());
}

/// Explicit removal из системы хоста через Commands + link table
#[test]
fn test_remove_link_from_host_system() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    let shield = spawn_shield(&mut app, Some(grid));
    app.update();
    let blip = link_of(&app, shield).unwrap();

    let remove = move |mut commands: Commands, mut links: ResMut<ShieldBlipLinks>| {
        remove_link(&mut commands, &mut links, shield)
    };
    let removed = app.world_mut().run_system_once(remove).unwrap();
    assert_eq!(removed, Some(blip));
    assert_eq!(link_of(&app, shield), None);
    assert!(app.world().get_entity(blip).is_err());

    let removed_again = app.world_mut().run_system_once(remove).unwrap();
    assert_eq!(removed_again, None);
}

/// Idempotent teardown: дважды → пустая таблица, без паники
#[test]
fn test_teardown_twice_is_idempotent() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    for _ in 0..4 {
        spawn_shield(&mut app, Some(grid));
    }
    app.update();

    assert_eq!(teardown_shield_radar(app.world_mut()), 4);
    assert_eq!(teardown_shield_radar(app.world_mut()), 0);

    assert!(app.world().resource::<ShieldBlipLinks>().is_empty());
    assert!(blips(&mut app).is_empty());
}

/// Teardown через RadarShutdown и AppExit
#[test]
fn test_shutdown_events_tear_down() {
    let mut app = create_radar_app();
    let grid = spawn_grid(&mut app, Vec3::ZERO);
    spawn_shield(&mut app, Some(grid));
    app.update();

    app.world_mut().send_event(RadarShutdown);
    app.world_mut().send_event(RadarShutdown);
    app.update();
    assert!(app.world().resource::<ShieldBlipLinks>().is_empty());
    assert!(blips(&mut app).is_empty());

    // Новый щит после shutdown → снова линкуется; AppExit снова чистит
    spawn_shield(&mut app, Some(grid));
    app.update();
    assert_eq!(blips(&mut app).len(), 1);

    app.world_mut().send_event(AppExit::Success);
    app.update();
    assert!(blips(&mut app).is_empty());
}

/// Host config не перетирается плагином (только валидируется)
#[test]
fn test_host_config_is_kept_and_validated() {
    let mut app = App::new();
    app.insert_resource(RadarConfig {
        position_epsilon_sq: -5.0,
        tick_hz: 30.0,
        log_link_changes: false,
    });
    app.add_plugins(ShieldRadarPlugin::in_schedule(Update));

    let config = app.world().resource::<RadarConfig>();
    assert_eq!(config.position_epsilon_sq, 0.0);
    assert_eq!(config.tick_hz, 30.0);
    assert!(!config.log_link_changes);
}

/// Headless app собирается с radar ресурсами
#[test]
fn test_headless_app_has_radar_resources() {
    let app = create_headless_app(RadarConfig::default(), 7);
    let world = app.world();

    assert!(world.contains_resource::<ShieldBlipLinks>());
    assert!(world.contains_resource::<RadarStats>());
    assert_eq!(world.resource::<DeterministicRng>().seed, 7);
}
