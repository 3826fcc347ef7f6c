//! Resource ledger checks.
//!
//! A [`Ledger`] records the cache before a production call and compares it
//! with the cache and outputs afterwards. Every unit consumed must be paid
//! for by the recipe, and nothing may appear in the cache that production
//! did not put there.

use std::collections::BTreeMap;

use rnb_core::buildings::{BuildingType, Product, ProductionOutput, Recipe};
use rnb_core::cache::Cache;
use rnb_core::resource::ResourceType;

/// Unit counts per resource type.
pub type Counts = BTreeMap<ResourceType, usize>;

/// Count every resource type in `cache`.
#[must_use]
pub fn counts(cache: &Cache) -> Counts {
    cache
        .types()
        .map(|resource_type| (resource_type, cache.count(resource_type)))
        .collect()
}

/// Snapshot of a cache taken before production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    before: Counts,
}

/// Difference between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    /// Units that left the cache.
    pub consumed: Counts,
    /// Units that entered the cache.
    pub gained: Counts,
}

impl Ledger {
    /// Record the current state of `cache`.
    #[must_use]
    pub fn open(cache: &Cache) -> Self {
        Self {
            before: counts(cache),
        }
    }

    /// Compare against `cache` now.
    #[must_use]
    pub fn close(&self, cache: &Cache) -> Delta {
        let after = counts(cache);
        let mut delta = Delta::default();
        for (&resource_type, &was) in &self.before {
            let now = after.get(&resource_type).copied().unwrap_or(0);
            if now < was {
                delta.consumed.insert(resource_type, was - now);
            }
        }
        for (&resource_type, &now) in &after {
            let was = self.before.get(&resource_type).copied().unwrap_or(0);
            if now > was {
                delta.gained.insert(resource_type, now - was);
            }
        }
        delta
    }

    /// Assert that `cache` did not change at all.
    ///
    /// # Panics
    ///
    /// Panics if any count differs from the snapshot.
    pub fn assert_unchanged(&self, cache: &Cache) {
        let delta = self.close(cache);
        assert!(
            delta.consumed.is_empty() && delta.gained.is_empty(),
            "Cache changed on a failed call!\n\
             Consumed: {:?}\n\
             Gained: {:?}",
            delta.consumed,
            delta.gained
        );
    }
}

/// Count outputs per resource type and the number of transporter orders.
#[must_use]
pub fn tally(outputs: &[ProductionOutput]) -> (Counts, usize) {
    let mut resources = Counts::new();
    let mut transporters = 0;
    for output in outputs {
        match output {
            ProductionOutput::Resource(resource) => {
                *resources.entry(resource.resource_type()).or_default() += 1;
            }
            ProductionOutput::Transporter(_) => transporters += 1,
        }
    }
    (resources, transporters)
}

/// Inputs a recipe must have consumed to yield `produced` output units.
///
/// Tiered recipes can split production across tiers, so only the
/// consumption that is forced by the tier ratios is returned there: the
/// caller checks `consumed[tier] / ratio` sums to `produced`.
#[must_use]
pub fn expected_consumption(building_type: BuildingType, produced: usize) -> Option<Counts> {
    match building_type.recipe()? {
        Recipe::Extract(_) | Recipe::Shaft => Some(Counts::new()),
        Recipe::Convert {
            inputs,
            batch_yield,
            ..
        } => {
            let batches = produced / usize::from(batch_yield);
            Some(
                inputs
                    .iter()
                    .map(|&(resource_type, per_batch)| (resource_type, per_batch * batches))
                    .collect(),
            )
        }
        Recipe::Tiered { .. } => None,
    }
}

/// Assert that one production call obeyed its recipe.
///
/// # Panics
///
/// Panics if the consumed inputs do not pay for the outputs exactly, or if
/// outputs have the wrong type.
pub fn assert_conserved(building_type: BuildingType, delta: &Delta, outputs: &[ProductionOutput]) {
    let (resources, transporters) = tally(outputs);
    let produced = resources.values().sum::<usize>() + transporters;
    let Some(recipe) = building_type.recipe() else {
        panic!("{building_type} has no recipe");
    };

    match recipe {
        Recipe::Extract(output) => {
            assert_eq!(resources.keys().copied().collect::<Vec<_>>(), vec![output]);
        }
        Recipe::Shaft => {
            assert!(resources
                .keys()
                .all(|r| matches!(r, ResourceType::Gold | ResourceType::Iron)));
        }
        Recipe::Convert { product, .. } => match product {
            Product::Resource(output) => assert_eq!(resources.get(&output).copied(), Some(produced)),
            Product::Transporter(_) => assert_eq!(transporters, produced),
        },
        Recipe::Tiered { tiers, output } => {
            assert_eq!(resources.get(&output).copied(), Some(produced));
            let paid: usize = tiers
                .iter()
                .map(|&(resource_type, ratio)| {
                    let used = delta.consumed.get(&resource_type).copied().unwrap_or(0);
                    assert_eq!(used % ratio, 0, "{building_type} used a partial tier");
                    used / ratio
                })
                .sum();
            assert_eq!(paid, produced, "{building_type} tiers do not pay for output");
            return;
        }
    }

    let expected = expected_consumption(building_type, produced).unwrap_or_default();
    assert_eq!(
        delta.consumed, expected,
        "{building_type} consumed the wrong inputs for {produced} outputs"
    );
}
