//! The building value and its per-round production.

use rand::Rng;

use crate::cache::Cache;
use crate::error::{GameError, Result};
use crate::resource::{Resource, ResourceType};
use crate::transporter::{Transporter, TransporterOrder, TransporterType};

use super::mine::{MineShaft, MineVariant};
use super::recipe::{harnessable, plan_batches, plan_tiers, Product, Recipe, TierStep};
use super::state::ProductionState;
use super::{BoostKind, BuildingType};

/// One item handed back by [`Building::produce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductionOutput {
    /// A new resource unit.
    Resource(Resource),
    /// A transporter to be placed by the caller.
    Transporter(TransporterOrder),
}

/// A constructed building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    building_type: BuildingType,
    state: ProductionState,
    /// Only mines carry a shaft.
    shaft: Option<MineShaft>,
}

/// What a single `produce` call is going to do.
enum Plan {
    Extract {
        output: ResourceType,
        units: u8,
    },
    Shaft {
        units: u8,
    },
    Convert {
        inputs: Vec<(ResourceType, usize)>,
        harnessed: Vec<usize>,
        product: Product,
        units: u8,
    },
    Tiered {
        steps: Vec<TierStep>,
        output: ResourceType,
    },
}

impl Building {
    /// Construct a fresh building. Mines get a bag for `variant` shuffled
    /// with `rng`; every other type ignores both.
    pub fn create<R: Rng + ?Sized>(
        building_type: BuildingType,
        variant: MineVariant,
        rng: &mut R,
    ) -> Result<Self> {
        let spec = building_type.spec().ok_or(GameError::InvalidBuildingType)?;
        let shaft = (building_type == BuildingType::Mine).then(|| MineShaft::new(variant, rng));
        Ok(Self {
            building_type,
            state: ProductionState::new(spec.production_max, spec.boost_kind()),
            shaft,
        })
    }

    pub(crate) fn from_parts(
        building_type: BuildingType,
        state: ProductionState,
        shaft: Option<MineShaft>,
    ) -> Self {
        Self {
            building_type,
            state,
            shaft,
        }
    }

    /// Type tag.
    #[must_use]
    pub const fn building_type(&self) -> BuildingType {
        self.building_type
    }

    /// Production counters and boost flag.
    #[must_use]
    pub const fn state(&self) -> &ProductionState {
        &self.state
    }

    /// Units produced this round.
    #[must_use]
    pub const fn production_current(&self) -> u8 {
        self.state.production_current()
    }

    /// Unboosted limit per round.
    #[must_use]
    pub const fn production_max(&self) -> u8 {
        self.state.production_max()
    }

    /// Limit for this round, doubled while boosted.
    #[must_use]
    pub const fn effective_max(&self) -> u8 {
        self.state.effective_max()
    }

    /// Units that may still be produced this round.
    #[must_use]
    pub const fn count_remaining_production(&self) -> u8 {
        self.state.remaining()
    }

    /// Boost this building accepts.
    #[must_use]
    pub const fn boost_kind(&self) -> BoostKind {
        self.state.boost_kind()
    }

    /// Whether the boost is active.
    #[must_use]
    pub const fn is_boosted(&self) -> bool {
        self.state.is_boosted()
    }

    /// Primary producer with electricity this round.
    #[must_use]
    pub const fn is_powered(&self) -> bool {
        self.is_boosted() && matches!(self.boost_kind(), BoostKind::Electricity)
    }

    /// Secondary producer with a manager this round.
    #[must_use]
    pub const fn has_manager(&self) -> bool {
        self.is_boosted() && matches!(self.boost_kind(), BoostKind::Manager)
    }

    /// The mine's bag, if this is a mine.
    #[must_use]
    pub const fn mine(&self) -> Option<&MineShaft> {
        self.shaft.as_ref()
    }

    /// Start a new round: counter back to zero, boost off.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Whether a boost of `kind` can be added right now.
    #[must_use]
    pub fn can_add_boost(&self, kind: BoostKind) -> bool {
        self.state.can_add_boost(kind)
    }

    /// Double this round's limit.
    pub fn add_boost(&mut self, kind: BoostKind) -> Result<()> {
        if self.state.add_boost(kind) {
            return Ok(());
        }
        let reason = if self.state.is_boosted() {
            "already boosted"
        } else {
            "boost kind not accepted"
        };
        Err(GameError::BoostRefused {
            building: self.building_type.name(),
            reason,
        })
    }

    /// Power a primary producer.
    pub fn add_electricity(&mut self) -> Result<()> {
        self.add_boost(BoostKind::Electricity)
    }

    /// Staff a secondary producer.
    pub fn add_manager(&mut self) -> Result<()> {
        self.add_boost(BoostKind::Manager)
    }

    /// Whether the boost can be removed right now.
    #[must_use]
    pub const fn can_remove_boost(&self) -> bool {
        self.state.can_remove_boost()
    }

    /// Take the boost away. Refused once anything was produced this round.
    pub fn remove_boost(&mut self) -> Result<()> {
        if self.state.remove_boost() {
            return Ok(());
        }
        let reason = if self.state.is_boosted() {
            "production already started this round"
        } else {
            "not boosted"
        };
        Err(GameError::BoostRefused {
            building: self.building_type.name(),
            reason,
        })
    }

    /// Whether [`Building::produce`] would succeed.
    #[must_use]
    pub fn can_produce(&self, cache: &Cache, transporters: &[&dyn Transporter]) -> bool {
        self.plan(cache, transporters).is_ok()
    }

    /// Run this building's recipe as far as capacity and inputs allow.
    ///
    /// Inputs are taken from `cache`; outputs are handed back. On error
    /// neither the cache nor the building has changed.
    pub fn produce(
        &mut self,
        cache: &mut Cache,
        transporters: &[&dyn Transporter],
    ) -> Result<Vec<ProductionOutput>> {
        let plan = self.plan(cache, transporters)?;
        let outputs = match plan {
            Plan::Extract { output, units } => {
                self.commit(units)?;
                fresh(output, units)
            }
            Plan::Shaft { units } => self.drain_shaft(units)?,
            Plan::Convert {
                inputs,
                harnessed,
                product,
                units,
            } => {
                cache.remove_all(&inputs)?;
                self.commit(units)?;
                match product {
                    Product::Resource(output) => fresh(output, units),
                    Product::Transporter(kind) => transporter_orders(kind, units, &harnessed),
                }
            }
            Plan::Tiered { steps, output } => {
                let mut outputs = Vec::new();
                for step in steps {
                    cache.remove(step.input, step.consumed)?;
                    self.commit(step.produced)?;
                    outputs.extend(fresh(output, step.produced));
                }
                outputs
            }
        };

        tracing::debug!(
            building = %self.building_type,
            produced = outputs.len(),
            current = self.state.production_current(),
            max = self.state.effective_max(),
            "Production complete"
        );
        Ok(outputs)
    }

    /// Like [`Building::produce`], but resource outputs go straight back
    /// into `cache`. Transporter orders are returned.
    pub fn produce_into(
        &mut self,
        cache: &mut Cache,
        transporters: &[&dyn Transporter],
    ) -> Result<Vec<TransporterOrder>> {
        let outputs = self.produce(cache, transporters)?;
        let mut resources = Vec::new();
        let mut orders = Vec::new();
        for output in outputs {
            match output {
                ProductionOutput::Resource(resource) => resources.push(resource),
                ProductionOutput::Transporter(order) => orders.push(order),
            }
        }
        cache.add_batch(resources)?;
        Ok(orders)
    }

    /// Whether the mine may sink a new shaft: bag empty and one iron plus
    /// one fuel on hand. Always `false` for other types.
    #[must_use]
    pub fn can_build_shaft(&self, cache: &Cache) -> bool {
        self.shaft.as_ref().is_some_and(MineShaft::is_empty) && cache.has(&SHAFT_COST)
    }

    /// Sink a new shaft, paying one iron and one fuel from `cache`.
    pub fn build_shaft<R: Rng + ?Sized>(
        &mut self,
        variant: MineVariant,
        cache: &mut Cache,
        rng: &mut R,
    ) -> Result<()> {
        let building = self.building_type.name();
        let Some(shaft) = self.shaft.as_mut() else {
            return Err(GameError::Unsupported {
                operation: "build_shaft",
                building,
            });
        };
        if !shaft.is_empty() {
            return Err(GameError::PreconditionNotMet(format!(
                "{building} still has {} units in its shaft",
                shaft.len()
            )));
        }
        cache.remove_all(&SHAFT_COST)?;
        shaft.refill(variant, rng);
        tracing::debug!(%variant, gold = shaft.gold(), iron = shaft.iron(), "Mine shaft built");
        Ok(())
    }

    fn plan(&self, cache: &Cache, transporters: &[&dyn Transporter]) -> Result<Plan> {
        let remaining = self.state.remaining();
        if remaining == 0 {
            return Err(GameError::ProductionLimitReached {
                building: self.building_type.name(),
            });
        }
        let recipe = self
            .building_type
            .recipe()
            .ok_or(GameError::InvalidBuildingType)?;

        match recipe {
            Recipe::Extract(output) => Ok(Plan::Extract {
                output,
                units: remaining,
            }),
            Recipe::Shaft => {
                let left = self.shaft.as_ref().map_or(0, MineShaft::len);
                let units = u8::try_from(left).map_or(remaining, |left| left.min(remaining));
                if units == 0 {
                    return Err(self.cannot_produce("mine shaft is exhausted".to_string()));
                }
                Ok(Plan::Shaft { units })
            }
            Recipe::Convert {
                inputs,
                harness,
                product,
                batch_yield,
            } => {
                let batches =
                    plan_batches(cache, transporters, inputs, harness, batch_yield, remaining);
                if batches == 0 {
                    let reason = shortfall(cache, transporters, inputs, harness, batch_yield, remaining);
                    return Err(self.cannot_produce(reason));
                }
                let scale = usize::from(batches);
                let harnessed = harness.map_or_else(Vec::new, |kind| {
                    harnessable(transporters, kind)
                        .into_iter()
                        .take(scale)
                        .collect()
                });
                Ok(Plan::Convert {
                    inputs: inputs
                        .iter()
                        .map(|&(resource_type, per_batch)| (resource_type, per_batch * scale))
                        .collect(),
                    harnessed,
                    product,
                    units: batches * batch_yield,
                })
            }
            Recipe::Tiered { tiers, output } => {
                let steps = plan_tiers(cache, tiers, remaining);
                if steps.is_empty() {
                    let wanted: Vec<String> = tiers
                        .iter()
                        .map(|(resource_type, ratio)| format!("{ratio} {resource_type}"))
                        .collect();
                    return Err(self.cannot_produce(format!("needs {}", wanted.join(" or "))));
                }
                Ok(Plan::Tiered { steps, output })
            }
        }
    }

    fn cannot_produce(&self, reason: String) -> GameError {
        GameError::CannotProduce {
            building: self.building_type.name(),
            reason,
        }
    }

    fn commit(&mut self, units: u8) -> Result<()> {
        if self.state.record(units) {
            Ok(())
        } else {
            Err(GameError::invariant(format!(
                "{} planned {units} units with only {} remaining",
                self.building_type,
                self.state.remaining()
            )))
        }
    }

    fn drain_shaft(&mut self, units: u8) -> Result<Vec<ProductionOutput>> {
        let Some(shaft) = self.shaft.as_mut() else {
            return Err(GameError::invariant("mine has no shaft"));
        };
        let drawn: Vec<ResourceType> = (0..units).map_while(|_| shaft.draw()).collect();
        if drawn.len() != usize::from(units) {
            return Err(GameError::invariant(format!(
                "mine planned {units} units but drew {}",
                drawn.len()
            )));
        }
        self.commit(units)?;
        Ok(drawn
            .into_iter()
            .map(|resource_type| ProductionOutput::Resource(Resource::new(resource_type)))
            .collect())
    }
}

const SHAFT_COST: [(ResourceType, usize); 2] = [(ResourceType::Iron, 1), (ResourceType::Fuel, 1)];

fn fresh(output: ResourceType, units: u8) -> Vec<ProductionOutput> {
    (0..units)
        .map(|_| ProductionOutput::Resource(Resource::new(output)))
        .collect()
}

fn transporter_orders(kind: TransporterType, units: u8, harnessed: &[usize]) -> Vec<ProductionOutput> {
    (0..usize::from(units))
        .map(|i| {
            let order = harnessed
                .get(i)
                .map_or_else(|| TransporterOrder::new(kind), |&index| TransporterOrder::replacing(kind, index));
            ProductionOutput::Transporter(order)
        })
        .collect()
}

/// Describe why a conversion cannot run even one batch.
fn shortfall(
    cache: &Cache,
    transporters: &[&dyn Transporter],
    inputs: &[(ResourceType, usize)],
    harness: Option<TransporterType>,
    batch_yield: u8,
    remaining: u8,
) -> String {
    if let Some(&(resource_type, per_batch)) = inputs
        .iter()
        .find(|&&(resource_type, per_batch)| cache.count(resource_type) < per_batch)
    {
        return format!(
            "needs {per_batch} {resource_type}, has {}",
            cache.count(resource_type)
        );
    }
    if let Some(kind) = harness {
        if harnessable(transporters, kind).is_empty() {
            return format!("needs an available {kind} nearby");
        }
    }
    format!("{remaining} units of capacity left, one batch yields {batch_yield}")
}
