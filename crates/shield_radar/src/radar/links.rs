//! Link Table: shield → blip

use bevy::prelude::*;
use std::collections::HashMap;

use super::LinkError;

/// Registry: маппинг Shield entity ↔ RadarBlip entity
///
/// Единственный источник правды "есть ли у щита blip".
/// Сам ничего не спавнит и не удаляет — вызывающий код отвечает за entity вокруг insert/remove.
/// Reverse index (blip → shield) держит биекцию с обеих сторон.
#[derive(Resource, Debug, Default)]
pub struct ShieldBlipLinks {
    by_shield: HashMap<Entity, Entity>,
    by_blip: HashMap<Entity, Entity>,
}

impl ShieldBlipLinks {
    pub fn get(&self, shield: Entity) -> Option<Entity> {
        self.by_shield.get(&shield).copied()
    }

    pub fn contains(&self, shield: Entity) -> bool {
        self.by_shield.contains_key(&shield)
    }

    pub fn shield_for(&self, blip: Entity) -> Option<Entity> {
        self.by_blip.get(&blip).copied()
    }

    /// Check-before-insert: повторный link для щита (или чужой blip) отклоняется без изменений
    pub fn insert(&mut self, shield: Entity, blip: Entity) -> Result<(), LinkError> {
        if let Some(&existing) = self.by_shield.get(&shield) {
            return Err(LinkError::AlreadyLinked { shield, blip: existing });
        }
        if let Some(&owner) = self.by_blip.get(&blip) {
            return Err(LinkError::BlipTaken { blip, shield: owner });
        }

        self.by_shield.insert(shield, blip);
        self.by_blip.insert(blip, shield);
        Ok(())
    }

    pub fn remove(&mut self, shield: Entity) -> Option<Entity> {
        let blip = self.by_shield.remove(&shield)?;
        self.by_blip.remove(&blip);
        Some(blip)
    }

    pub fn len(&self) -> usize {
        self.by_shield.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_shield.is_empty()
    }

    /// Все пары (shield, blip), отсортированные по shield
    pub fn iter(&self) -> impl Iterator<Item = (Entity, Entity)> {
        self.pairs().into_iter()
    }

    /// Snapshot пар в детерминированном порядке (не зависит от порядка insert)
    pub fn pairs(&self) -> Vec<(Entity, Entity)> {
        let mut pairs: Vec<_> = self
            .by_shield
            .iter()
            .map(|(&shield, &blip)| (shield, blip))
            .collect();
        pairs.sort_unstable_by_key(|(shield, _)| *shield);
        pairs
    }

    /// Забрать все пары и очистить таблицу (teardown)
    pub fn drain(&mut self) -> Vec<(Entity, Entity)> {
        let pairs = self.pairs();
        self.by_shield.clear();
        self.by_blip.clear();
        pairs
    }
}
