//! Proptest strategies for engine values.

use proptest::prelude::*;
use proptest::sample::select;

use rnb_core::buildings::BuildingType;
use rnb_core::cache::Cache;
use rnb_core::player::PlayerColor;
use rnb_core::resource::{Resource, ResourceType};

/// Any real resource type.
pub fn resource_type() -> impl Strategy<Value = ResourceType> {
    select(ResourceType::ALL.to_vec())
}

/// Any colour allowed to carry resources.
pub fn player() -> impl Strategy<Value = PlayerColor> {
    select(PlayerColor::PLAYERS.to_vec())
}

/// Any real building type.
pub fn building_type() -> impl Strategy<Value = BuildingType> {
    select(BuildingType::ALL.to_vec())
}

/// A resource unit with a random set of carriers.
pub fn resource() -> impl Strategy<Value = Resource> {
    (resource_type(), proptest::collection::vec(player(), 0..3)).prop_map(
        |(resource_type, carriers)| {
            let mut resource = Resource::new(resource_type);
            for carrier in carriers {
                resource
                    .add_carrier(carrier)
                    .unwrap_or_else(|e| panic!("player colour refused: {e}"));
            }
            resource
        },
    )
}

/// A cache of up to `max_units` resources with random carriers.
pub fn cache(max_units: usize) -> impl Strategy<Value = Cache> {
    proptest::collection::vec(resource(), 0..=max_units).prop_map(|resources| {
        let mut cache = Cache::new();
        cache
            .add_batch(resources)
            .unwrap_or_else(|e| panic!("valid resources refused: {e}"));
        cache
    })
}

/// Fresh, unclaimed contents drawn from the production inputs.
pub fn production_inputs() -> impl Strategy<Value = Vec<(ResourceType, usize)>> {
    let inputs = vec![
        ResourceType::Trunks,
        ResourceType::Boards,
        ResourceType::Clay,
        ResourceType::Gold,
        ResourceType::Iron,
        ResourceType::Fuel,
        ResourceType::Coins,
        ResourceType::Paper,
    ];
    proptest::collection::vec((select(inputs), 0usize..8), 0..8)
}
