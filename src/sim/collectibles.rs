//! The active collectible set
//!
//! The set is the single source of truth: a collectible is active exactly
//! while it is a member. Contact handling removes by id, so duplicate or
//! stale reports from the collision collaborator fall through harmlessly.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Collectible, CollectibleId};

/// Owns all active collectibles, in spawn order (ascending id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collectibles {
    active: Vec<Collectible>,
}

impl Collectibles {
    /// Number of active collectibles
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterate active collectibles in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.active.iter()
    }

    /// Look up an active collectible by id
    pub fn get(&self, id: CollectibleId) -> Option<&Collectible> {
        self.active.iter().find(|c| c.id == id)
    }

    /// Spawn a collectible uniformly at random inside the play area, keeping
    /// `margin` clear of every edge. The range is non-empty for any validated
    /// configuration, so spawning never fails.
    pub fn spawn(
        &mut self,
        id: CollectibleId,
        width: f32,
        height: f32,
        margin: f32,
        rng: &mut Pcg32,
    ) -> Vec2 {
        let pos = Vec2::new(
            rng.random_range(margin..=width - margin),
            rng.random_range(margin..=height - margin),
        );
        self.active.push(Collectible { id, pos });
        pos
    }

    /// Remove a collectible on contact. Returns `None` for ids that are not
    /// active (already collected this tick, or replaced earlier).
    pub fn remove(&mut self, id: CollectibleId) -> Option<Collectible> {
        let idx = self.active.iter().position(|c| c.id == id)?;
        Some(self.active.remove(idx))
    }
}
