//! ECS Components для radar core
//!
//! Организация по доменам:
//! - shield: источник (Shield — behavior data щита)
//! - grid: контейнеры (Grid marker, GridMassCenter)
//! - blip: прокси на радаре (RadarBlip, BlipShape)
//! - lifecycle: tri-state liveness (Terminating marker, Liveness)

pub mod shield;
pub mod grid;
pub mod blip;
pub mod lifecycle;

// Re-exports для удобного импорта
pub use shield::*;
pub use grid::*;
pub use blip::*;
pub use lifecycle::*;
