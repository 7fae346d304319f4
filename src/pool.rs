//! Entry store and draw plumbing shared by both lootplan variants.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::index::CumulativeIndex;

/// A named entry and its relative chance.
///
/// The chance is a weight, not a probability: it only means something
/// relative to the sum of all chances in the same pool.
#[derive(Debug, Clone, PartialEq)]
pub struct LootEntry {
    pub name: String,
    pub chance: f64,
}

/// Entry store, cumulative index and random source behind a lootplan.
///
/// The random source is seeded once at construction and advanced by every
/// draw, never reseeded. Entries keep insertion order; the index over them is
/// rebuilt lazily when a draw finds it stale, so it is never read out of sync
/// with the store. The running total is recomputed from the store on every
/// mutation, always in insertion order, so identically populated pools hold
/// bit-identical totals.
#[derive(Debug, Clone)]
pub(crate) struct LootPool {
    entries: Vec<LootEntry>,
    by_name: HashMap<String, usize>,
    index: CumulativeIndex,
    total_chance: f64,
    dirty: bool,
    rng: StdRng,
}

impl LootPool {
    /// Pool seeded from OS entropy.
    pub(crate) fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Pool with an explicit seed, for reproducible draw sequences.
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            index: CumulativeIndex::default(),
            total_chance: 0.0,
            dirty: false,
            rng,
        }
    }

    /// Insert a new entry and return it. `None` (and no mutation) when the
    /// chance is not a positive finite number, the name is empty, or the name
    /// is already taken.
    pub(crate) fn add_loot(&mut self, chance: f64, name: impl Into<String>) -> Option<LootEntry> {
        let name = name.into();
        if !usable_chance(chance) || name.is_empty() || self.by_name.contains_key(&name) {
            return None;
        }
        let pos = self.entries.len();
        self.by_name.insert(name.clone(), pos);
        self.entries.push(LootEntry { name, chance });
        self.invalidate();
        Some(self.entries[pos].clone())
    }

    /// Insert many `(name, chance)` pairs in the order given.
    ///
    /// Pairs that an individual [`add_loot`](Self::add_loot) would reject are
    /// skipped; the returned map holds exactly the pairs that landed, with
    /// the chance values used.
    pub(crate) fn add_loot_in_bulk<I, S>(&mut self, loot: I) -> HashMap<String, f64>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut added = HashMap::new();
        for (name, chance) in loot {
            if let Some(entry) = self.add_loot(chance, name) {
                added.insert(entry.name, entry.chance);
            }
        }
        added
    }

    /// Raw stored chance for `name`.
    pub(crate) fn get_loot_chance(&self, name: &str) -> Option<f64> {
        self.by_name.get(name).map(|&pos| self.entries[pos].chance)
    }

    /// The entry's actual draw probability, `chance / total_chance`.
    /// `None` when the name is absent or the pool holds nothing.
    pub(crate) fn get_true_loot_chance(&self, name: &str) -> Option<f64> {
        if self.total_chance <= 0.0 {
            return None;
        }
        self.get_loot_chance(name).map(|c| c / self.total_chance)
    }

    /// Remove `name` from the pool. `false` when it was not present.
    pub(crate) fn remove_loot(&mut self, name: &str) -> bool {
        let Some(pos) = self.by_name.remove(name) else {
            return false;
        };
        self.entries.remove(pos);
        for slot in self.by_name.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        self.invalidate();
        true
    }

    /// Replace the stored chance for `name` and return the updated entry.
    /// An absent name or an unusable chance returns `(false, None)` and
    /// changes nothing.
    pub(crate) fn change_loot_chance(
        &mut self,
        new_chance: f64,
        name: &str,
    ) -> (bool, Option<LootEntry>) {
        if !usable_chance(new_chance) {
            return (false, None);
        }
        let Some(&pos) = self.by_name.get(name) else {
            return (false, None);
        };
        self.entries[pos].chance = new_chance;
        self.invalidate();
        (true, Some(self.entries[pos].clone()))
    }

    /// One luck-adjusted draw against the current entries.
    pub(crate) fn draw_one(&mut self, luck: f64) -> Option<LootEntry> {
        self.rebuild_if_dirty();
        let pos = self.index.pick(&mut self.rng, luck)?;
        Some(self.entries[pos].clone())
    }

    /// `amount` independent draws with replacement, in draw order.
    pub(crate) fn draw_many(&mut self, amount: usize, luck: f64) -> Vec<LootEntry> {
        self.rebuild_if_dirty();
        if self.index.is_empty() {
            return Vec::new();
        }
        let mut drawn = Vec::with_capacity(amount);
        for _ in 0..amount {
            if let Some(pos) = self.index.pick(&mut self.rng, luck) {
                drawn.push(self.entries[pos].clone());
            }
        }
        drawn
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all stored chances, maintained on every mutation.
    pub(crate) fn total_chance(&self) -> f64 {
        self.total_chance
    }

    /// Entries in insertion order (useful for checks).
    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    /// Refresh the running total and flag the index for rebuild.
    fn invalidate(&mut self) {
        self.total_chance = self.entries.iter().map(|e| e.chance).sum();
        self.dirty = true;
    }

    fn rebuild_if_dirty(&mut self) {
        if self.dirty {
            let chances: Vec<f64> = self.entries.iter().map(|e| e.chance).collect();
            self.index = CumulativeIndex::new(&chances);
            self.dirty = false;
        }
    }
}

fn usable_chance(chance: f64) -> bool {
    chance.is_finite() && chance > 0.0
}
