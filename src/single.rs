use std::collections::HashMap;

use crate::pool::{LootEntry, LootPool};

/// Lootplan whose draws return at most one entry.
///
/// Wraps a pool of `(name, chance)` entries plus its own seeded random
/// source, and adds "true chance" queries on top of the shared operation
/// surface. Not internally synchronized: a plan belongs to one caller
/// context at a time.
///
/// ```rust,ignore
/// use lootplan::SingleLootplan;
///
/// let mut chest = SingleLootplan::with_seed(0xC0FFEE);
/// chest.add_loot(70.0, "bronze");
/// chest.add_loot(25.0, "silver");
/// chest.add_loot(5.0, "gold");
///
/// let drop = chest.get_random_loot(1.0); // Option<LootEntry>
/// ```
#[derive(Debug, Clone)]
pub struct SingleLootplan {
    pool: LootPool,
}

impl SingleLootplan {
    /// Plan seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            pool: LootPool::new(),
        }
    }

    /// Plan with an explicit seed, for reproducible draw sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            pool: LootPool::with_seed(seed),
        }
    }

    /// Draw one entry, biased by `luck`.
    ///
    /// A multiplier of 1 draws unbiased; above 1 favors the most common
    /// entries, between 0 and 1 favors the rarest. `None` when the plan
    /// holds no entries.
    pub fn get_random_loot(&mut self, luck: f64) -> Option<LootEntry> {
        self.pool.draw_one(luck)
    }

    /// The entry's actual draw probability, `chance / total_chance`.
    /// `None` when the name is absent or the plan holds nothing.
    pub fn get_true_loot_chance(&self, name: &str) -> Option<f64> {
        self.pool.get_true_loot_chance(name)
    }

    /// Insert a new entry and return it. `None` (and no mutation) when the
    /// chance is not a positive finite number, the name is empty, or the
    /// name is already taken.
    pub fn add_loot(&mut self, chance: f64, name: impl Into<String>) -> Option<LootEntry> {
        self.pool.add_loot(chance, name)
    }

    /// Insert many `(name, chance)` pairs in the order given; rejected pairs
    /// are skipped. Returns the pairs that landed.
    pub fn add_loot_in_bulk<I, S>(&mut self, loot: I) -> HashMap<String, f64>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.pool.add_loot_in_bulk(loot)
    }

    /// Raw stored chance for `name`.
    pub fn get_loot_chance(&self, name: &str) -> Option<f64> {
        self.pool.get_loot_chance(name)
    }

    /// Remove `name` from the plan. `false` when it was not present.
    pub fn remove_loot(&mut self, name: &str) -> bool {
        self.pool.remove_loot(name)
    }

    /// Replace the stored chance for `name` and return the updated entry,
    /// or `(false, None)` without mutation when the name is absent or the
    /// chance unusable.
    pub fn change_loot_chance(&mut self, new_chance: f64, name: &str) -> (bool, Option<LootEntry>) {
        self.pool.change_loot_chance(new_chance, name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Sum of all stored chances.
    pub fn total_chance(&self) -> f64 {
        self.pool.total_chance()
    }
}

impl Default for SingleLootplan {
    fn default() -> Self {
        Self::new()
    }
}
