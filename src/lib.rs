//! # lootplan
//!
//! Seedable weighted loot tables you can mutate between draws.
//!
//! A lootplan maps entry *names* to positive relative *chances* and draws
//! entries with probability `chance / total chance`. Each plan owns a
//! deterministic random source seeded at construction, so a seeded plan
//! replays the same drop sequence every run. Entries can be added,
//! re-weighted and removed at any time; the cumulative-weight index behind
//! the draws is rebuilt on demand and never read stale.
//!
//! Two variants share the same pool mechanics:
//!
//! 1. [`SingleLootplan`]: each draw returns at most one entry, plus
//!    "true chance" (`chance / total`) queries.
//! 2. [`MultiLootplan`]: each draw returns a batch, drawn independently
//!    with replacement.
//!
//! ## Quick start (ad-hoc names)
//!
//! ```rust,ignore
//! use lootplan::SingleLootplan;
//!
//! # fn main() {
//! let mut chest = SingleLootplan::with_seed(1337);
//! chest.add_loot_in_bulk([
//!     ("bronze", 70.0),
//!     ("silver", 25.0),
//!     ("gold", 5.0),
//! ]);
//!
//! if let Some(drop) = chest.get_random_loot(1.0) {
//!     println!("you got: {}", drop.name);
//! }
//! # }
//! ```
//!
//! ## Quick start (enum + derive)
//!
//! ```rust,ignore
//! use lootplan::LootSet;
//!
//! #[derive(Debug, LootSet)]
//! enum Rarity {
//!     #[chance(60.0)] Common,
//!     #[chance(30.0)] Uncommon,
//!     #[chance(9.0)]  Rare,
//!     #[chance(1.0)]  Legendary,
//! }
//!
//! # fn main() {
//! let mut table = Rarity::single_lootplan();
//! let tier = table.get_random_loot(1.0);       // Option<LootEntry>
//! let back = tier.and_then(|e| Rarity::from_name(&e.name));
//! # }
//! ```
//!
//! ## Luck
//!
//! Every draw takes a luck multiplier. `1.0` is the plain weighted draw; a
//! multiplier above 1 remaps the roll toward the highest-chance entries,
//! one between 0 and 1 toward the rarest. No multiplier can reach an entry
//! that is not in the plan.
//!
//! ## Performance
//! * **Mutate**: O(n) per insert/remove/change (the running total is
//!   refreshed from the store).
//! * **Draw**: O(log n) per draw, after an O(n log n) index rebuild on the
//!   first draw following a mutation.
//! * **Space**: the entries plus one `(f64, usize)` slot each.
//!
//! ## Gotchas
//! * Chances must be **finite and strictly positive**; anything else is
//!   rejected with a `None`/`false` result rather than an error.
//! * Names are unique per plan: inserting a taken name is a no-op, not an
//!   overwrite. Use [`change_loot_chance`](SingleLootplan::change_loot_chance)
//!   to re-weight.
//! * Plans are not internally synchronized; share one across threads only
//!   behind your own lock.
//!
//! ## Testing & validation
//! The crate includes seeded tests that check input validation, invariant
//! maintenance, reproducibility, and that empirical draw frequencies match
//! the configured chances.

mod error;
mod index;
mod multi;
mod pool;
mod single;

pub use error::LootplanError;
pub use index::CumulativeIndex;
pub use multi::MultiLootplan;
pub use pool::LootEntry;
pub use single::SingleLootplan;

/// Derive macro imported from `lootplan_macros`.
/// See the crate-level example for usage.
pub use lootplan_macros::LootSet;

use std::collections::HashMap;
use std::str::FromStr;

/// Trait implemented by the `LootSet` derive macro.
///
/// Exposes an enum's variants as `(name, chance)` pairs via
/// [`LootSet::LOOT`], which enables building ready-populated plans. The
/// derive also emits an inherent `from_name` on the enum to turn a drawn
/// entry back into a variant.
pub trait LootSet {
    /// All `(name, chance)` pairs, in declaration order.
    const LOOT: &'static [(&'static str, f64)];

    /// A [`SingleLootplan`] populated with [`LOOT`](Self::LOOT).
    ///
    /// Pairs a plain insert would reject are skipped, the same as bulk
    /// insertion; seed the plan yourself from `LOOT` if you need a
    /// reproducible variant.
    fn single_lootplan() -> SingleLootplan {
        let mut plan = SingleLootplan::new();
        plan.add_loot_in_bulk(Self::LOOT.iter().copied());
        plan
    }

    /// A [`MultiLootplan`] populated with [`LOOT`](Self::LOOT).
    fn multi_lootplan() -> MultiLootplan {
        let mut plan = MultiLootplan::new();
        plan.add_loot_in_bulk(Self::LOOT.iter().copied());
        plan
    }
}

/// Which lootplan variant a type tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootplanKind {
    Single,
    Multi,
}

impl FromStr for LootplanKind {
    type Err = LootplanError;

    /// Accepts exactly the four tags `"Single"`, `"SingleLootplan"`,
    /// `"Multi"` and `"MultiLootplan"`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Single" | "SingleLootplan" => Ok(Self::Single),
            "Multi" | "MultiLootplan" => Ok(Self::Multi),
            _ => Err(LootplanError::UnknownType {
                tag: tag.to_string(),
            }),
        }
    }
}

/// Either lootplan variant, as produced by [`create_lootplan`].
///
/// The shared operation surface is available directly on the union; the
/// draw calls differ per variant and are reached through
/// [`as_single_mut`](Self::as_single_mut) / [`as_multi_mut`](Self::as_multi_mut)
/// or by matching.
#[derive(Debug, Clone)]
pub enum Lootplan {
    Single(SingleLootplan),
    Multi(MultiLootplan),
}

impl Lootplan {
    /// Which variant this is.
    pub fn kind(&self) -> LootplanKind {
        match self {
            Self::Single(_) => LootplanKind::Single,
            Self::Multi(_) => LootplanKind::Multi,
        }
    }

    pub fn as_single(&self) -> Option<&SingleLootplan> {
        match self {
            Self::Single(plan) => Some(plan),
            Self::Multi(_) => None,
        }
    }

    pub fn as_single_mut(&mut self) -> Option<&mut SingleLootplan> {
        match self {
            Self::Single(plan) => Some(plan),
            Self::Multi(_) => None,
        }
    }

    pub fn into_single(self) -> Option<SingleLootplan> {
        match self {
            Self::Single(plan) => Some(plan),
            Self::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiLootplan> {
        match self {
            Self::Multi(plan) => Some(plan),
            Self::Single(_) => None,
        }
    }

    pub fn as_multi_mut(&mut self) -> Option<&mut MultiLootplan> {
        match self {
            Self::Multi(plan) => Some(plan),
            Self::Single(_) => None,
        }
    }

    pub fn into_multi(self) -> Option<MultiLootplan> {
        match self {
            Self::Multi(plan) => Some(plan),
            Self::Single(_) => None,
        }
    }

    /// Insert a new entry and return it; see
    /// [`SingleLootplan::add_loot`].
    pub fn add_loot(&mut self, chance: f64, name: impl Into<String>) -> Option<LootEntry> {
        match self {
            Self::Single(plan) => plan.add_loot(chance, name),
            Self::Multi(plan) => plan.add_loot(chance, name),
        }
    }

    /// Insert many pairs in the order given; returns the pairs that landed.
    pub fn add_loot_in_bulk<I, S>(&mut self, loot: I) -> HashMap<String, f64>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        match self {
            Self::Single(plan) => plan.add_loot_in_bulk(loot),
            Self::Multi(plan) => plan.add_loot_in_bulk(loot),
        }
    }

    /// Raw stored chance for `name`.
    pub fn get_loot_chance(&self, name: &str) -> Option<f64> {
        match self {
            Self::Single(plan) => plan.get_loot_chance(name),
            Self::Multi(plan) => plan.get_loot_chance(name),
        }
    }

    /// Remove `name` from the plan. `false` when it was not present.
    pub fn remove_loot(&mut self, name: &str) -> bool {
        match self {
            Self::Single(plan) => plan.remove_loot(name),
            Self::Multi(plan) => plan.remove_loot(name),
        }
    }

    /// Replace the stored chance for `name`; see
    /// [`SingleLootplan::change_loot_chance`].
    pub fn change_loot_chance(&mut self, new_chance: f64, name: &str) -> (bool, Option<LootEntry>) {
        match self {
            Self::Single(plan) => plan.change_loot_chance(new_chance, name),
            Self::Multi(plan) => plan.change_loot_chance(new_chance, name),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(plan) => plan.len(),
            Self::Multi(plan) => plan.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(plan) => plan.is_empty(),
            Self::Multi(plan) => plan.is_empty(),
        }
    }

    /// Sum of all stored chances.
    pub fn total_chance(&self) -> f64 {
        match self {
            Self::Single(plan) => plan.total_chance(),
            Self::Multi(plan) => plan.total_chance(),
        }
    }
}

/// Build a lootplan variant from its type tag.
///
/// `seed` fixes the plan's random source for reproducible draws; `None`
/// seeds from OS entropy. The accepted tags are the closed set
/// [`LootplanKind`] parses; anything else is a construction error, not a
/// silent default.
///
/// # Errors
/// [`LootplanError::UnknownType`] when `tag` is not one of the four
/// accepted tags.
pub fn create_lootplan(tag: &str, seed: Option<u64>) -> Result<Lootplan, LootplanError> {
    Ok(match tag.parse::<LootplanKind>()? {
        LootplanKind::Single => Lootplan::Single(match seed {
            Some(seed) => SingleLootplan::with_seed(seed),
            None => SingleLootplan::new(),
        }),
        LootplanKind::Multi => Lootplan::Multi(match seed {
            Some(seed) => MultiLootplan::with_seed(seed),
            None => MultiLootplan::new(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_dispatches_every_tag() {
        for tag in ["Single", "SingleLootplan"] {
            let plan = create_lootplan(tag, Some(3)).unwrap();
            assert_eq!(plan.kind(), LootplanKind::Single);
            assert!(plan.as_single().is_some());
            assert!(plan.as_multi().is_none());
        }
        for tag in ["Multi", "MultiLootplan"] {
            let plan = create_lootplan(tag, Some(3)).unwrap();
            assert_eq!(plan.kind(), LootplanKind::Multi);
            assert!(plan.as_multi().is_some());
            assert!(plan.as_single().is_none());
        }
    }

    #[test]
    fn factory_rejects_unknown_tags() {
        let err = create_lootplan("Mega", None).unwrap_err();
        assert!(matches!(err, LootplanError::UnknownType { tag } if tag == "Mega"));
        // Tags are case-sensitive.
        assert!("single".parse::<LootplanKind>().is_err());
        assert!("".parse::<LootplanKind>().is_err());
    }

    #[test]
    fn factory_seed_reaches_the_plan() {
        let draws = || {
            let mut plan = create_lootplan("Single", Some(99)).unwrap();
            plan.add_loot(1.0, "a");
            plan.add_loot(1.0, "b");
            plan.add_loot(1.0, "c");
            let single = plan.as_single_mut().unwrap();
            (0..16)
                .map(|_| single.get_random_loot(1.0).unwrap().name)
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(), draws());
    }

    #[test]
    fn union_delegates_the_shared_surface() {
        let mut plan = create_lootplan("Multi", Some(5)).unwrap();
        assert!(plan.is_empty());

        assert!(plan.add_loot(2.0, "ore").is_some());
        let added = plan.add_loot_in_bulk([("ore", 9.0), ("herb", 1.0)]);
        assert_eq!(added.len(), 1);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get_loot_chance("ore"), Some(2.0));

        assert!(plan.change_loot_chance(4.0, "ore").0);
        assert_eq!(plan.total_chance(), 5.0);
        assert!(plan.remove_loot("herb"));

        let batch = plan.as_multi_mut().unwrap().get_random_loot(3, 1.0);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn into_accessors_match_the_kind() {
        assert!(create_lootplan("Single", None).unwrap().into_single().is_some());
        assert!(create_lootplan("Single", None).unwrap().into_multi().is_none());
        assert!(create_lootplan("Multi", None).unwrap().into_multi().is_some());
    }

    #[test]
    fn loot_set_builds_populated_plans() {
        struct Chest;
        impl LootSet for Chest {
            const LOOT: &'static [(&'static str, f64)] = &[("common", 3.0), ("rare", 1.0)];
        }

        let single = Chest::single_lootplan();
        assert_eq!(single.len(), 2);
        assert_eq!(single.get_loot_chance("rare"), Some(1.0));

        let multi = Chest::multi_lootplan();
        assert_eq!(multi.total_chance(), 4.0);
    }
}
