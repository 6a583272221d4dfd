//! Shield Radar Core
//!
//! ECS-синхронизация на Bevy 0.16: каждый активный Shield получает ровно один RadarBlip
//! (ring на mass center своего грида), который зеркалит цвет/радиус/работоспособность щита.
//!
//! Архитектура:
//! - Event-driven коррекции (created / moved / reparented) — immediate
//! - Reconciliation pass раз в tick — safety net (stale links, attribute drift)
//! - Link table (`ShieldBlipLinks`) — единственный источник правды

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod logger;
pub mod physics;
pub mod radar;

// Re-export базовых типов для удобства
pub use components::*;
pub use radar::{
    remove_link, remove_shield_blip, teardown_shield_radar, BlipLinker, LinkAction, LinkError,
    LinkState, RadarConfig, RadarSet, RadarShutdown, RadarStats, RadarWorld, RemoveShieldBlip,
    ShieldBlipLinks, ShieldMoved, ShieldRadarPlugin, ShieldReparented,
};

/// Детерминистичный RNG resource (seeded) для headless сценариев
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции с radar core в FixedUpdate
pub fn create_headless_app(config: RadarConfig, seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();

    let config = config.validated();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(config)
        .add_plugins(ShieldRadarPlugin::default());

    app
}

/// Пары (shield, blip) из link table в детерминированном порядке
pub fn radar_links(world: &World) -> Vec<(Entity, Entity)> {
    world
        .get_resource::<ShieldBlipLinks>()
        .map(ShieldBlipLinks::pairs)
        .unwrap_or_default()
}
