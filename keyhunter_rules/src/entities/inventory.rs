//! The inventory store: item counts plus the life counter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Item;

/// Lives a player starts with, and the most they can ever hold.
pub const MAX_LIVES: u32 = 3;

/// Item counts and remaining lives for one run.
///
/// The store only counts. Keeping each skeleton key at one is the caller's
/// job: pick items up through [`crate::Effect::Grant`], which never
/// increments something already held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: BTreeMap<Item, u32>,
    lives: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            lives: MAX_LIVES,
        }
    }
}

impl Inventory {
    /// Create a fresh inventory: nothing carried, full lives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count of an item (zero when never picked up).
    pub fn get(&self, item: Item) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Check if at least one of the item is held.
    pub fn has(&self, item: Item) -> bool {
        self.get(item) >= 1
    }

    /// Add `delta` of an item.
    pub fn increment(&mut self, item: Item, delta: u32) {
        let count = self.counts.entry(item).or_insert(0);
        *count = count.saturating_add(delta);
    }

    /// Remaining lives.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Set remaining lives, capped at [`MAX_LIVES`].
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives.min(MAX_LIVES);
    }

    /// Remove one life and return how many remain. Never goes below zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Add one life unless already at the cap. Returns whether a life was added.
    pub fn gain_life(&mut self) -> bool {
        if self.lives < MAX_LIVES {
            self.lives += 1;
            true
        } else {
            false
        }
    }

    /// Check if the player has run out of lives.
    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    /// Skeleton keys not yet found.
    pub fn missing_skeleton_keys(&self) -> Vec<Item> {
        Item::SKELETON_KEYS
            .into_iter()
            .filter(|key| !self.has(*key))
            .collect()
    }

    /// Check if all four skeleton keys are held.
    pub fn has_all_skeleton_keys(&self) -> bool {
        self.missing_skeleton_keys().is_empty()
    }

    /// The win predicate: all four skeleton keys and the machete.
    pub fn is_win_ready(&self) -> bool {
        self.has_all_skeleton_keys() && self.has(Item::Machete)
    }

    /// Iterate over held items in display order.
    pub fn held(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(item, count)| (*item, *count))
    }
}
