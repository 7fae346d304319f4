use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lootplan::{MultiLootplan, SingleLootplan};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_loot(n: usize) -> Vec<(String, f64)> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n)
        .map(|i| (format!("drop-{i}"), 0.1 + rng.random::<f64>()))
        .collect()
}

fn bench_lootplan_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lootplan_populate");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let loot = gen_loot(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("bulk_add_n={n}"), |b| {
            b.iter(|| {
                let mut plan = SingleLootplan::with_seed(7);
                black_box(plan.add_loot_in_bulk(black_box(loot.clone())));
                plan
            });
        });
    }
    group.finish();
}

fn bench_lootplan_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("lootplan_draw");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let loot = gen_loot(n);
        group.throughput(Throughput::Elements((DRAWS_PER_ITER * n) as u64));

        group.bench_function(format!("single_n={n}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut plan = SingleLootplan::with_seed(999);
                    plan.add_loot_in_bulk(loot.clone());
                    plan
                },
                |plan| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= plan.get_random_loot(1.0).map_or(0, |e| e.name.len());
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("single_lucky_n={n}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut plan = SingleLootplan::with_seed(1001);
                    plan.add_loot_in_bulk(loot.clone());
                    plan
                },
                |plan| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= plan.get_random_loot(4.0).map_or(0, |e| e.name.len());
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("multi_n={n}"), |b| {
            b.iter_batched_ref(
                || {
                    let mut plan = MultiLootplan::with_seed(1003);
                    plan.add_loot_in_bulk(loot.clone());
                    plan
                },
                |plan| {
                    let batch = plan.get_random_loot(DRAWS_PER_ITER, 1.0);
                    let mut s = 0usize;
                    for entry in &batch {
                        s ^= entry.name.len();
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(lootplan, bench_lootplan_populate, bench_lootplan_draw);
criterion_main!(lootplan);
