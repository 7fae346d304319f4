use std::collections::HashMap;

use crate::pool::{LootEntry, LootPool};

/// Lootplan whose draws return a batch of entries.
///
/// Each call performs the requested number of independent draws with
/// replacement; the pool is untouched between the draws of one call, so a
/// batch of five from a one-entry plan is that entry five times. True-chance
/// queries are deliberately absent here: a per-entry probability is not
/// meaningful for a batch taken with replacement.
///
/// ```rust,ignore
/// use lootplan::MultiLootplan;
///
/// let mut pack = MultiLootplan::with_seed(7);
/// pack.add_loot_in_bulk([("sticker", 80.0), ("holo", 19.0), ("misprint", 1.0)]);
///
/// let cards = pack.get_random_loot(5, 1.0); // Vec<LootEntry>, length 5
/// ```
#[derive(Debug, Clone)]
pub struct MultiLootplan {
    pool: LootPool,
}

impl MultiLootplan {
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

    /// Draw `amount` entries in draw order, each biased by `luck`.
    ///
    /// An `amount` of 0, or a plan with no entries, yields an empty
    /// vector; otherwise the batch holds exactly `amount` entries.
    pub fn get_random_loot(&mut self, amount: usize, luck: f64) -> Vec<LootEntry> {
        self.pool.draw_many(amount, luck)
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

impl Default for MultiLootplan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_yields_an_empty_batch() {
        let mut plan = MultiLootplan::with_seed(3);
        plan.add_loot(1.0, "coin");
        assert!(plan.get_random_loot(0, 1.0).is_empty());
    }

    #[test]
    fn empty_plan_yields_an_empty_batch() {
        let mut plan = MultiLootplan::with_seed(3);
        assert!(plan.get_random_loot(5, 1.0).is_empty());
    }

    #[test]
    fn singleton_plan_fills_the_whole_batch() {
        let mut plan = MultiLootplan::with_seed(3);
        plan.add_loot(2.0, "coin");
        let batch = plan.get_random_loot(5, 1.0);
        assert_eq!(batch.len(), 5);
        for entry in batch {
            assert_eq!(entry.name, "coin");
            assert_eq!(entry.chance, 2.0);
        }
    }

    #[test]
    fn batches_draw_with_replacement() {
        let mut plan = MultiLootplan::with_seed(21);
        plan.add_loot_in_bulk([("left", 1.0), ("right", 1.0)]);
        let batch = plan.get_random_loot(50, 1.0);
        assert_eq!(batch.len(), 50);
        // 50 draws over two equal entries repeat both names many times over.
        assert!(batch.iter().any(|e| e.name == "left"));
        assert!(batch.iter().any(|e| e.name == "right"));
    }

    #[test]
    fn same_seed_same_batches() {
        let build = || {
            let mut plan = MultiLootplan::with_seed(77);
            plan.add_loot_in_bulk([("a", 1.0), ("b", 2.0), ("c", 4.0)]);
            plan
        };
        let mut a = build();
        let mut b = build();
        for amount in [1usize, 3, 8] {
            assert_eq!(a.get_random_loot(amount, 1.0), b.get_random_loot(amount, 1.0));
        }
    }

    #[test]
    fn luck_applies_to_every_draw_in_the_batch() {
        let mut plan = MultiLootplan::with_seed(9);
        plan.add_loot_in_bulk([("common", 3.0), ("rare", 1.0)]);
        let batch = plan.get_random_loot(50_000, 4.0);
        let common = batch.iter().filter(|e| e.name == "common").count();
        let freq = common as f64 / batch.len() as f64;
        // (3/4)^(1/4) ≈ 0.93, well above the unbiased 0.75.
        assert!(freq > 0.9, "freq={freq}");
    }
}
