use lootplan::create_lootplan;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A seeded plan replays the same mining session every run.
    let mut mining = create_lootplan("MultiLootplan", Some(2024))?
        .into_multi()
        .expect("the Multi tag builds the multi variant");

    mining.add_loot_in_bulk([
        ("copper ore", 55.0),
        ("iron ore", 30.0),
        ("silver ore", 12.0),
        ("mithril ore", 3.0),
    ]);

    println!("First swings:");
    for swing in 0..5 {
        let batch = mining.get_random_loot(4, 1.0);
        let names: Vec<&str> = batch.iter().map(|e| e.name.as_str()).collect();
        println!("  swing {}: {names:?}", swing + 1);
    }

    // The silver vein runs dry mid-session; mithril gets richer.
    mining.remove_loot("silver ore");
    let (changed, entry) = mining.change_loot_chance(9.0, "mithril ore");
    if changed {
        if let Some(entry) = entry {
            println!("\nre-weighted {} to {}", entry.name, entry.chance);
        }
    }

    let mut hist: HashMap<String, u64> = HashMap::new();
    let mut drawn = 0u64;
    for _ in 0..50_000 {
        for drop in mining.get_random_loot(4, 1.0) {
            *hist.entry(drop.name).or_default() += 1;
            drawn += 1;
        }
    }

    println!("\nLong haul ({drawn} drops):");
    let mut items: Vec<(String, u64)> = hist.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    for (name, count) in items {
        let share = count as f64 / drawn as f64;
        println!("{count:>7}  {share:>7.4}  {name}");
    }

    Ok(())
}
