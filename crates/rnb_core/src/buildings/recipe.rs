//! Conversion recipes.
//!
//! A [`Recipe`] describes what one building type consumes and produces.
//! Recipes are plain data; the arithmetic that turns a recipe, a cache and
//! the remaining capacity into a production plan lives here too, so it can
//! be checked without touching any state.

use crate::cache::Cache;
use crate::resource::ResourceType;
use crate::transporter::{Transporter, TransporterType};

use super::BuildingType;

use crate::resource::ResourceType::{Boards, Clay, Coins, Fuel, Gold, Iron, Paper, Trunks};

/// What a recipe hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// New resource units.
    Resource(ResourceType),
    /// New transporters.
    Transporter(TransporterType),
}

/// How a building turns inputs into outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Output without any input.
    Extract(ResourceType),
    /// One unit per slot from the mine's own bag.
    Shaft,
    /// Each batch consumes every listed input (and one nearby transporter of
    /// type `harness`, if set) and yields `batch_yield` units of `product`.
    Convert {
        /// `(type, units per batch)`.
        inputs: &'static [(ResourceType, usize)],
        /// Transporter consumed per batch.
        harness: Option<TransporterType>,
        /// Output.
        product: Product,
        /// Output units per batch.
        batch_yield: u8,
    },
    /// Alternative inputs, exhausted strictly in order. Each tier turns
    /// `ratio` units of its resource into one output unit.
    Tiered {
        /// `(type, ratio)` in consumption order.
        tiers: &'static [(ResourceType, usize)],
        /// Output.
        output: ResourceType,
    },
}

const fn convert(inputs: &'static [(ResourceType, usize)], product: Product, batch_yield: u8) -> Recipe {
    Recipe::Convert {
        inputs,
        harness: None,
        product,
        batch_yield,
    }
}

impl BuildingType {
    /// Recipe for this type, or `None` for the sentinel.
    #[must_use]
    pub const fn recipe(self) -> Option<Recipe> {
        use Product::{Resource, Transporter};

        let recipe = match self {
            Self::Woodcutter => Recipe::Extract(Trunks),
            Self::OilRig => Recipe::Extract(Fuel),
            Self::Quarry => Recipe::Extract(ResourceType::Stone),
            Self::ClayPit => Recipe::Extract(Clay),
            Self::Mine => Recipe::Shaft,
            Self::Sawmill => convert(&[(Trunks, 1)], Resource(Boards), 2),
            Self::CoalBurner => Recipe::Tiered {
                tiers: &[(Boards, 2), (Trunks, 2)],
                output: Fuel,
            },
            Self::Papermill => Recipe::Tiered {
                tiers: &[(Boards, 2), (Trunks, 2)],
                output: Paper,
            },
            Self::StoneFactory => convert(&[(Clay, 1)], Resource(ResourceType::Stone), 2),
            Self::Mint => convert(&[(Gold, 2), (Fuel, 1)], Resource(Coins), 1),
            Self::StockExchange => convert(&[(Coins, 2), (Paper, 1)], Resource(ResourceType::Stock), 1),
            Self::RaftFactory => convert(&[(Trunks, 2)], Transporter(TransporterType::Raft), 1),
            Self::RowboatFactory => convert(&[(Boards, 5)], Transporter(TransporterType::Rowboat), 1),
            Self::SteamerFactory => {
                convert(&[(Iron, 1), (Fuel, 2)], Transporter(TransporterType::Steamer), 1)
            }
            Self::TruckFactory => convert(&[(Iron, 1), (Fuel, 1)], Transporter(TransporterType::Truck), 1),
            Self::WagonFactory => Recipe::Convert {
                inputs: &[(Boards, 2)],
                harness: Some(TransporterType::Donkey),
                product: Transporter(TransporterType::Wagon),
                batch_yield: 1,
            },
            Self::Invalid => return None,
        };
        Some(recipe)
    }
}

/// Whole batches the cache can pay for.
#[must_use]
pub fn affordable_batches(cache: &Cache, inputs: &[(ResourceType, usize)]) -> usize {
    inputs
        .iter()
        .map(|&(resource_type, per_batch)| {
            if per_batch == 0 {
                usize::MAX
            } else {
                cache.count(resource_type) / per_batch
            }
        })
        .min()
        .unwrap_or(usize::MAX)
}

/// Indices of nearby transporters that can be harnessed, in list order.
#[must_use]
pub fn harnessable(transporters: &[&dyn Transporter], kind: TransporterType) -> Vec<usize> {
    transporters
        .iter()
        .enumerate()
        .filter(|(_, t)| t.transporter_type() == kind && t.is_available())
        .map(|(index, _)| index)
        .collect()
}

/// Output of one tier in a tiered production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStep {
    /// Input consumed by this tier.
    pub input: ResourceType,
    /// Units of input consumed.
    pub consumed: usize,
    /// Output units produced.
    pub produced: u8,
}

/// Plan a tiered production: fill `remaining` slots from each tier in turn.
#[must_use]
pub fn plan_tiers(cache: &Cache, tiers: &[(ResourceType, usize)], remaining: u8) -> Vec<TierStep> {
    let mut left = remaining;
    let mut steps = Vec::new();
    for &(input, ratio) in tiers {
        if left == 0 {
            break;
        }
        if ratio == 0 {
            continue;
        }
        let possible = cache.count(input) / ratio;
        let produced = u8::try_from(possible).map_or(left, |p| p.min(left));
        if produced == 0 {
            continue;
        }
        steps.push(TierStep {
            input,
            consumed: usize::from(produced) * ratio,
            produced,
        });
        left -= produced;
    }
    steps
}

/// Number of batches a conversion can run this call.
#[must_use]
pub fn plan_batches(
    cache: &Cache,
    transporters: &[&dyn Transporter],
    inputs: &[(ResourceType, usize)],
    harness: Option<TransporterType>,
    batch_yield: u8,
    remaining: u8,
) -> u8 {
    if batch_yield == 0 {
        return 0;
    }
    let by_capacity = remaining / batch_yield;
    let by_inputs = affordable_batches(cache, inputs);
    let by_harness = harness.map_or(usize::MAX, |kind| harnessable(transporters, kind).len());
    let batches = by_inputs.min(by_harness);
    u8::try_from(batches).map_or(by_capacity, |b| b.min(by_capacity))
}
