//! Production benchmarks for rnb_core.
//!
//! Run with: `cargo bench -p rnb_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rnb_core::prelude::*;

fn stocked_cache() -> Cache {
    let mut cache = Cache::new();
    for resource_type in [
        ResourceType::Trunks,
        ResourceType::Boards,
        ResourceType::Clay,
        ResourceType::Gold,
        ResourceType::Fuel,
        ResourceType::Coins,
        ResourceType::Paper,
        ResourceType::Iron,
    ] {
        let _ = cache.add_new(resource_type, 64);
    }
    cache
}

/// One full round of every building type against a shared cache.
pub fn production_benchmark(c: &mut Criterion) {
    let mut factory = BuildingFactory::seeded(1);
    let buildings: Vec<Building> = BuildingType::ALL
        .into_iter()
        .filter_map(|building_type| factory.make(building_type).ok())
        .collect();
    let donkey = TransporterType::Donkey;
    let nearby: [&dyn Transporter; 1] = [&donkey];

    c.bench_function("round_all_buildings", |b| {
        b.iter_batched(
            || (buildings.clone(), stocked_cache()),
            |(mut buildings, mut cache)| {
                for building in &mut buildings {
                    let _ = building.add_boost(building.boost_kind());
                    black_box(building.produce_into(&mut cache, &nearby).ok());
                }
                cache
            },
            BatchSize::SmallInput,
        );
    });
}

/// Picking up and resetting carrier markers on a large cache.
pub fn cache_benchmark(c: &mut Criterion) {
    c.bench_function("get_moveable_and_reset", |b| {
        b.iter_batched(
            stocked_cache,
            |mut cache| {
                for player in PlayerColor::PLAYERS {
                    if let Ok(picked) = cache.get_moveable(ResourceType::Boards, player, 32) {
                        let _ = cache.add_batch(picked);
                    }
                }
                cache.reset();
                black_box(cache.count_moveable(ResourceType::Boards, PlayerColor::Red))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, production_benchmark, cache_benchmark);
criterion_main!(benches);
