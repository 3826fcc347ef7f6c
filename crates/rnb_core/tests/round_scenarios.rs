//! Round-by-round production scenarios.

use rnb_core::prelude::*;
use rnb_test_utils::fixtures::{building, cache_with, factory, init_tracing};
use rnb_test_utils::ledger::{assert_conserved, tally, Ledger};

#[test]
fn woodcutter_produces_one_trunk_per_round() {
    init_tracing();
    let mut woodcutter = building(BuildingType::Woodcutter);
    let mut cache = Cache::new();
    assert_eq!(woodcutter.count_remaining_production(), 1);

    let outputs = woodcutter.produce(&mut cache, &[]).unwrap();
    assert_eq!(outputs.len(), 1);
    assert!(matches!(
        &outputs[0],
        ProductionOutput::Resource(r) if r.resource_type() == ResourceType::Trunks
    ));
    assert_eq!(woodcutter.production_current(), 1);
    assert_eq!(woodcutter.count_remaining_production(), 0);
    assert!(!woodcutter.can_produce(&cache, &[]));

    let err = woodcutter.produce(&mut cache, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fail);
    assert_eq!(woodcutter.production_current(), 1);

    woodcutter.reset();
    assert!(woodcutter.can_produce(&cache, &[]));
}

#[test]
fn sawmill_with_eight_trunks() {
    init_tracing();
    let mut sawmill = building(BuildingType::Sawmill);
    let mut cache = cache_with(&[(ResourceType::Trunks, 8)]);

    let ledger = Ledger::open(&cache);
    let outputs = sawmill.produce(&mut cache, &[]).unwrap();
    assert_conserved(BuildingType::Sawmill, &ledger.close(&cache), &outputs);
    assert_eq!(outputs.len(), 6);
    assert_eq!(cache.count(ResourceType::Trunks), 5);
    assert_eq!(sawmill.production_current(), 6);
    assert!(!sawmill.can_produce(&cache, &[]));

    // A manager arriving mid-round doubles the limit.
    sawmill.add_manager().unwrap();
    assert_eq!(sawmill.effective_max(), 12);
    let outputs = sawmill.produce(&mut cache, &[]).unwrap();
    assert_eq!(outputs.len(), 6);
    assert_eq!(cache.count(ResourceType::Trunks), 2);

    // Next round starts without the manager.
    sawmill.reset();
    assert_eq!(sawmill.effective_max(), 6);
    sawmill.add_manager().unwrap();
    assert_eq!(sawmill.count_remaining_production(), 12);
}

#[test]
fn mint_with_two_gold_and_one_fuel() {
    init_tracing();
    let mut mint = building(BuildingType::Mint);
    let mut cache = cache_with(&[(ResourceType::Gold, 2), (ResourceType::Fuel, 1)]);

    let ledger = Ledger::open(&cache);
    let outputs = mint.produce(&mut cache, &[]).unwrap();
    assert_conserved(BuildingType::Mint, &ledger.close(&cache), &outputs);
    assert_eq!(outputs.len(), 1);
    assert!(matches!(
        &outputs[0],
        ProductionOutput::Resource(r) if r.resource_type() == ResourceType::Coins
    ));
    assert!(cache.is_empty());

    // One gold short of a second batch.
    mint.reset();
    cache.add_new(ResourceType::Gold, 1).unwrap();
    cache.add_new(ResourceType::Fuel, 1).unwrap();
    assert!(!mint.can_produce(&cache, &[]));

    let ledger = Ledger::open(&cache);
    let err = mint.produce(&mut cache, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fail);
    ledger.assert_unchanged(&cache);
    assert_eq!(mint.production_current(), 0);
}

#[test]
fn regular_mine_over_six_rounds() {
    let mut factory = factory();
    let mut mine = factory.make_mine(MineVariant::Regular).unwrap();
    let mut cache = Cache::new();

    let mut outputs = Vec::new();
    for _ in 0..6 {
        mine.reset();
        outputs.extend(mine.produce(&mut cache, &[]).unwrap());
    }
    let (resources, transporters) = tally(&outputs);
    assert_eq!(transporters, 0);
    assert_eq!(resources.get(&ResourceType::Gold), Some(&3));
    assert_eq!(resources.get(&ResourceType::Iron), Some(&3));

    for _ in 0..3 {
        mine.reset();
        assert!(!mine.can_produce(&cache, &[]));
    }

    cache.add_new(ResourceType::Iron, 1).unwrap();
    cache.add_new(ResourceType::Fuel, 1).unwrap();
    factory.build_shaft(&mut mine, "regular", &mut cache).unwrap();
    assert!(mine.can_produce(&cache, &[]));
}

#[test]
fn cache_remove_short_changes_nothing() {
    let mut cache = cache_with(&[(ResourceType::Boards, 2)]);
    let err = cache.remove(ResourceType::Boards, 3).unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(cache.count(ResourceType::Boards), 2);
}

#[test]
fn moved_units_cannot_be_moved_again_by_the_same_player() {
    let mut cache = cache_with(&[(ResourceType::Stone, 2)]);
    let picked = cache.get_moveable(ResourceType::Stone, PlayerColor::Red, 1).unwrap();
    cache.add_batch(picked).unwrap();

    assert_eq!(cache.count_moveable(ResourceType::Stone, PlayerColor::Red), 1);
    assert_eq!(cache.count_moveable(ResourceType::Stone, PlayerColor::Blue), 2);
    assert!(cache.get_moveable(ResourceType::Stone, PlayerColor::Red, 2).is_err());

    cache.reset();
    assert_eq!(cache.count_moveable(ResourceType::Stone, PlayerColor::Red), 2);
}

#[test]
fn full_economy_round() {
    init_tracing();
    let mut factory = factory();
    let mut buildings: Vec<Building> = [
        BuildingType::Woodcutter,
        BuildingType::Sawmill,
        BuildingType::CoalBurner,
        BuildingType::Papermill,
        BuildingType::WagonFactory,
    ]
    .into_iter()
    .map(|building_type| factory.make(building_type).unwrap())
    .collect();

    let mut cache = cache_with(&[(ResourceType::Trunks, 4)]);
    let donkey = TransporterType::Donkey;
    let nearby: [&dyn Transporter; 1] = [&donkey];

    let mut orders = Vec::new();
    for _ in 0..3 {
        cache.reset();
        for building in &mut buildings {
            building.reset();
            if building.can_produce(&cache, &nearby) {
                let ledger = Ledger::open(&cache);
                let outputs = building.produce(&mut cache, &nearby).unwrap();
                assert_conserved(building.building_type(), &ledger.close(&cache), &outputs);
                for output in outputs {
                    match output {
                        ProductionOutput::Resource(resource) => cache.add(resource).unwrap(),
                        ProductionOutput::Transporter(order) => orders.push(order),
                    }
                }
            }
        }
    }

    assert!(orders
        .iter()
        .all(|order| *order == TransporterOrder::replacing(TransporterType::Wagon, 0)));
    for building in &buildings {
        assert!(building.production_current() <= building.effective_max());
    }
}

#[test]
fn decoded_buildings_keep_producing() {
    let mut sawmill = building(BuildingType::Sawmill);
    sawmill.add_manager().unwrap();
    let mut cache = cache_with(&[(ResourceType::Trunks, 3)]);
    sawmill.produce(&mut cache, &[]).unwrap();

    let mut restored = Building::from_json_as(BuildingType::Sawmill, &sawmill.to_json()).unwrap();
    assert_eq!(restored, sawmill);
    cache.add_new(ResourceType::Trunks, 10).unwrap();
    let outputs = restored.produce(&mut cache, &[]).unwrap();
    assert_eq!(outputs.len(), 6);
    assert_eq!(restored.count_remaining_production(), 0);

    let cache_again = Cache::from_json(&cache.to_json()).unwrap();
    assert_eq!(cache_again, cache);
}
