//! Radar configuration resource

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Настройки radar core
///
/// Хост может загрузить их из data-файла (serde) и вставить до `ShieldRadarPlugin`,
/// иначе плагин ставит `Default`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Порог displacement² для перезаписи позиции blip (меньше → не трогаем Transform)
    pub position_epsilon_sq: f32,
    /// Частота fixed tick (Hz) для headless app
    pub tick_hz: f64,
    /// Логировать создание/удаление link'ов
    pub log_link_changes: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            position_epsilon_sq: 0.01,
            tick_hz: 60.0,
            log_link_changes: true,
        }
    }
}

impl RadarConfig {
    /// Отрицательный/NaN порог → 0 (обновляем при любом смещении)
    pub fn validated(mut self) -> Self {
        if self.position_epsilon_sq.is_nan() || self.position_epsilon_sq < 0.0 {
            self.position_epsilon_sq = 0.0;
        }
        if self.tick_hz.is_nan() || self.tick_hz <= 0.0 {
            self.tick_hz = Self::default().tick_hz;
        }
        self
    }
}
