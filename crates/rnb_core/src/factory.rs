//! Building construction by type tag.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use crate::buildings::{Building, BuildingType, MineVariant};
use crate::cache::Cache;
use crate::config::{EngineConfig, MineShuffle};
use crate::error::Result;

/// Make a fresh building of `building_type`.
///
/// Mines get a regular shaft shuffled from OS entropy. Use a
/// [`BuildingFactory`] for reproducible mines or another default variant.
pub fn make_building(building_type: BuildingType) -> Result<Building> {
    Building::create(building_type, MineVariant::default(), &mut rand::thread_rng())
}

/// Configured source of buildings.
///
/// Owns the random stream used for every mine bag it fills, so a seeded
/// factory produces the same draws on every run.
#[derive(Debug, Clone)]
pub struct BuildingFactory {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl BuildingFactory {
    /// Create a factory from `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.mine_shuffle {
            MineShuffle::Entropy => ChaCha8Rng::from_entropy(),
            MineShuffle::Seeded(seed) => ChaCha8Rng::seed_from_u64(seed),
        };
        Self { config, rng }
    }

    /// Seeded factory with otherwise default settings.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(EngineConfig {
            mine_shuffle: MineShuffle::Seeded(seed),
            ..EngineConfig::default()
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Make a fresh building.
    pub fn make(&mut self, building_type: BuildingType) -> Result<Building> {
        Building::create(building_type, self.config.default_mine_variant, &mut self.rng)
    }

    /// Make a mine with a specific shaft.
    pub fn make_mine(&mut self, variant: MineVariant) -> Result<Building> {
        Building::create(BuildingType::Mine, variant, &mut self.rng)
    }

    /// Independent copy of `building`.
    #[must_use]
    pub fn copy(&self, building: &Building) -> Building {
        building.clone()
    }

    /// Decode any building type.
    pub fn from_json(&mut self, value: &Value) -> Result<Building> {
        Ok(Building::decode(value, None, &mut self.rng)?)
    }

    /// Decode, insisting on `expected` as the type.
    pub fn from_json_as(&mut self, expected: BuildingType, value: &Value) -> Result<Building> {
        Ok(Building::decode(value, Some(expected), &mut self.rng)?)
    }

    /// Sink a new shaft in `mine`, naming the variant as on the wire.
    pub fn build_shaft(&mut self, mine: &mut Building, variant: &str, cache: &mut Cache) -> Result<()> {
        let variant: MineVariant = variant.parse()?;
        mine.build_shaft(variant, cache, &mut self.rng)
    }
}
