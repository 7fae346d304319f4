use lootplan::LootSet;
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, LootSet)]
enum Rarity {
    #[chance(1/1000)]
    Mythic,
    #[chance(1/100)]
    Legendary,
    #[chance(20/100)]
    Uncommon,
    #[chance(50/100)]
    Common,
}

fn main() {
    // Build straight from the enum:
    let mut table = Rarity::single_lootplan(); // uses the macro-provided LOOT

    println!("True chances:");
    for (name, _) in Rarity::LOOT {
        let share = table.get_true_loot_chance(name).unwrap_or(0.0);
        println!("  {share:>8.5} {name}");
    }

    // Higher luck pushes draws toward the big-chance tiers.
    for luck in [1.0, 2.0, 4.0] {
        let mut hist: HashMap<Rarity, u64> = HashMap::default();
        for _ in 0..200_000 {
            if let Some(drop) = table.get_random_loot(luck) {
                if let Some(rarity) = Rarity::from_name(&drop.name) {
                    *hist.entry(rarity).or_default() += 1;
                }
            }
        }

        let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
        values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

        println!("\nluck = {luck}:");
        for (rarity, count) in values {
            println!("{count: >7} {rarity:?}");
        }
    }
}
