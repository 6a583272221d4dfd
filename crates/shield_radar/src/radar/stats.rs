//! Radar diagnostics counters

use bevy::prelude::*;

/// Счётчики radar core (debug overlay / тесты / headless binary)
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct RadarStats {
    pub blips_spawned: u64,
    pub blips_despawned: u64,
    /// Link'и удалённые reconciliation pass (щит/blip пропал, behavior data снята)
    pub links_dropped_stale: u64,
    pub double_links_rejected: u64,
    /// Количество reconciliation pass
    pub passes: u64,
}
