//! Resource cache - the pool of goods lying on a tile.
//!
//! A [`Cache`] is a multiset of [`Resource`] units keyed by type. Every
//! mutating operation is all-or-nothing: if it fails, the cache is left
//! exactly as it was.
//!
//! Units are kept in insertion order per type and always taken from the
//! tail, so repeated runs over the same cache remove the same units.

use std::collections::BTreeMap;

use crate::error::{DecodeError, GameError, Result};
use crate::player::PlayerColor;
use crate::resource::{Resource, ResourceType};

/// Ownership-aware pool of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache {
    /// Units by type. A key is only present while its list is non-empty.
    resources: BTreeMap<ResourceType, Vec<Resource>>,
}

impl Cache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single unit.
    pub fn add(&mut self, resource: Resource) -> Result<()> {
        if !resource.resource_type().is_valid() {
            return Err(GameError::InvalidResourceType);
        }
        self.resources
            .entry(resource.resource_type())
            .or_default()
            .push(resource);
        Ok(())
    }

    /// Add a batch of units.
    ///
    /// If any unit has the invalid type the whole batch is rejected and the
    /// cache is untouched.
    pub fn add_batch(&mut self, resources: impl IntoIterator<Item = Resource>) -> Result<()> {
        let resources: Vec<Resource> = resources.into_iter().collect();
        if resources.iter().any(|r| !r.resource_type().is_valid()) {
            return Err(GameError::InvalidResourceType);
        }
        for resource in resources {
            self.resources
                .entry(resource.resource_type())
                .or_default()
                .push(resource);
        }
        Ok(())
    }

    /// Add `amount` fresh, unclaimed units of `resource_type`.
    pub fn add_new(&mut self, resource_type: ResourceType, amount: usize) -> Result<()> {
        self.add_batch(std::iter::repeat_with(|| Resource::new(resource_type)).take(amount))
    }

    /// Delete exactly `amount` units of `resource_type`.
    pub fn remove(&mut self, resource_type: ResourceType, amount: usize) -> Result<()> {
        self.get(resource_type, amount).map(drop)
    }

    /// Check whether every `(type, amount)` requirement is covered.
    ///
    /// A type listed more than once must cover the sum of its amounts.
    #[must_use]
    pub fn has(&self, requirements: &[(ResourceType, usize)]) -> bool {
        totals(requirements)
            .into_iter()
            .all(|(resource_type, amount)| self.count(resource_type) >= amount)
    }

    /// Delete several resource amounts in one step.
    ///
    /// Every requirement is checked before anything is removed, so either all
    /// of them are deducted or none is.
    pub fn remove_all(&mut self, requirements: &[(ResourceType, usize)]) -> Result<()> {
        let totals = totals(requirements);
        for (&resource_type, &amount) in &totals {
            if !resource_type.is_valid() {
                return Err(GameError::InvalidResourceType);
            }
            let available = self.count(resource_type);
            if available < amount {
                return Err(GameError::InsufficientResources {
                    resource: resource_type.name(),
                    required: amount,
                    available,
                });
            }
        }
        for (resource_type, amount) in totals {
            if let Err(err) = self.remove(resource_type, amount) {
                return Err(GameError::invariant(format!(
                    "removing {amount} {resource_type} failed after a passing check: {err}"
                )));
            }
        }
        Ok(())
    }

    /// Remove and return `amount` units of `resource_type`, regardless of
    /// who carried them.
    pub fn get(&mut self, resource_type: ResourceType, amount: usize) -> Result<Vec<Resource>> {
        if !resource_type.is_valid() {
            return Err(GameError::InvalidResourceType);
        }
        let available = self.count(resource_type);
        if available < amount {
            return Err(GameError::InsufficientResources {
                resource: resource_type.name(),
                required: amount,
                available,
            });
        }
        if amount == 0 {
            return Ok(Vec::new());
        }

        let Some(list) = self.resources.get_mut(&resource_type) else {
            return Err(GameError::invariant(format!(
                "{resource_type} counted {available} but has no list"
            )));
        };
        let taken = list.split_off(list.len() - amount);
        if list.is_empty() {
            self.resources.remove(&resource_type);
        }
        Ok(taken)
    }

    /// Pick up `amount` units of `resource_type` on behalf of `player`.
    ///
    /// Only units `player` has not carried this round are eligible. Each
    /// returned unit is marked as carried by `player`.
    pub fn get_moveable(
        &mut self,
        resource_type: ResourceType,
        player: PlayerColor,
        amount: usize,
    ) -> Result<Vec<Resource>> {
        if !resource_type.is_valid() {
            return Err(GameError::InvalidResourceType);
        }
        if !player.is_player() {
            return Err(GameError::InvalidPlayer(player.name()));
        }
        let available = self.count_moveable(resource_type, player);
        if available < amount {
            return Err(GameError::InsufficientResources {
                resource: resource_type.name(),
                required: amount,
                available,
            });
        }
        if amount == 0 {
            return Ok(Vec::new());
        }

        let Some(list) = self.resources.get_mut(&resource_type) else {
            return Err(GameError::invariant(format!(
                "{resource_type} has {available} moveable units but no list"
            )));
        };

        // Descending, so removing one index never shifts a later one.
        let picked: Vec<usize> = list
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, resource)| !resource.is_carried_by(player))
            .map(|(index, _)| index)
            .take(amount)
            .collect();

        let mut taken = Vec::with_capacity(picked.len());
        for index in picked {
            let mut resource = list.remove(index);
            resource.add_carrier(player)?;
            taken.push(resource);
        }
        if list.is_empty() {
            self.resources.remove(&resource_type);
        }
        Ok(taken)
    }

    /// Number of units of `resource_type`.
    #[must_use]
    pub fn count(&self, resource_type: ResourceType) -> usize {
        self.resources.get(&resource_type).map_or(0, Vec::len)
    }

    /// Number of units of `resource_type` that `player` may pick up.
    ///
    /// Colours that cannot carry anything can move nothing.
    #[must_use]
    pub fn count_moveable(&self, resource_type: ResourceType, player: PlayerColor) -> usize {
        if !player.is_player() {
            return 0;
        }
        self.resources.get(&resource_type).map_or(0, |list| {
            list.iter().filter(|r| !r.is_carried_by(player)).count()
        })
    }

    /// Every unit in the cache, grouped by type.
    pub fn all(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values().flatten()
    }

    /// Every unit `player` may pick up.
    pub fn all_moveable(&self, player: PlayerColor) -> impl Iterator<Item = &Resource> {
        let can_carry = player.is_player();
        self.all()
            .filter(move |r| can_carry && !r.is_carried_by(player))
    }

    /// Resource types currently present.
    pub fn types(&self) -> impl Iterator<Item = ResourceType> + '_ {
        self.resources.keys().copied()
    }

    /// Start a new round: forget every carrier, keep every unit.
    pub fn reset(&mut self) {
        for resource in self.resources.values_mut().flatten() {
            resource.clear_carriers();
        }
    }

    /// Destroy all contents.
    pub fn clear(&mut self) {
        self.resources.clear();
    }

    /// Total number of units.
    #[must_use]
    pub fn size(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }

    /// Whether the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Encode as a JSON array of resources.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.all().map(Resource::to_json).collect())
    }

    /// Decode a JSON array of resources. Any bad entry rejects the whole cache.
    pub fn from_json(value: &serde_json::Value) -> std::result::Result<Self, DecodeError> {
        let entries = value
            .as_array()
            .ok_or_else(|| DecodeError::new("cache must be an array of resources", value))?;
        let mut cache = Self::new();
        for entry in entries {
            let resource = Resource::from_json(entry)?;
            cache
                .resources
                .entry(resource.resource_type())
                .or_default()
                .push(resource);
        }
        Ok(cache)
    }
}

/// Sum the amounts asked of each type.
fn totals(requirements: &[(ResourceType, usize)]) -> BTreeMap<ResourceType, usize> {
    let mut totals = BTreeMap::new();
    for &(resource_type, amount) in requirements {
        *totals.entry(resource_type).or_insert(0) += amount;
    }
    totals
}
