//! Link table errors

use bevy::prelude::Entity;
use thiserror::Error;

/// Отказ link table нарушить биекцию shield ↔ blip
///
/// Наружу не пробрасывается: вызывающий код логирует и превращает в no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("shield {shield:?} already linked to blip {blip:?}")]
    AlreadyLinked { shield: Entity, blip: Entity },

    #[error("blip {blip:?} already serves shield {shield:?}")]
    BlipTaken { blip: Entity, shield: Entity },
}
