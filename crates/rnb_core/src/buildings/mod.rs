//! Production buildings.
//!
//! Every building is a [`Building`] value tagged with a [`BuildingType`].
//! Behaviour is looked up by type rather than inherited:
//!
//! - [`catalog`] - static facts per type (class, limits, construction cost,
//!   where it may stand)
//! - [`recipe`] - what each type consumes and produces
//! - [`state`] - the per-round production counter and boost flag
//! - [`mine`] - the gold/iron bag owned by mines
//! - [`construction`] - construction legality and cost deduction
//! - [`persist`] - JSON encoding with strict validation
//!
//! Primary producers (woodcutter, oil rig, quarry, clay pit, mine) need no
//! inputs and are boosted by electricity. Secondary producers convert
//! resources from a [`Cache`](crate::cache::Cache) and are boosted by a
//! manager.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod building;
pub mod catalog;
pub mod construction;
pub mod mine;
pub mod persist;
pub mod recipe;
pub mod state;

pub use building::{Building, ProductionOutput};
pub use catalog::{BuildingSpec, SiteRule};
pub use mine::{MineShaft, MineVariant};
pub use recipe::{Product, Recipe};
pub use state::ProductionState;

/// Concrete building types, plus an `Invalid` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    /// Forest trunks.
    Woodcutter,
    /// Fuel from the sea floor.
    OilRig,
    /// Stone from rock.
    Quarry,
    /// Clay from a river bank.
    ClayPit,
    /// Gold and iron from a mountain.
    Mine,
    /// Trunks into boards.
    Sawmill,
    /// Boards or trunks into fuel.
    CoalBurner,
    /// Boards or trunks into paper.
    Papermill,
    /// Clay into stone.
    StoneFactory,
    /// Gold and fuel into coins.
    Mint,
    /// Coins and paper into stock.
    StockExchange,
    /// Builds rafts.
    RaftFactory,
    /// Builds rowboats.
    RowboatFactory,
    /// Builds steamers.
    SteamerFactory,
    /// Builds trucks.
    TruckFactory,
    /// Harnesses donkeys to wagons.
    WagonFactory,
    /// Sentinel for unknown types.
    #[serde(rename = "unknown")]
    Invalid,
}

/// Canonical names, indexed in declaration order.
const BUILDING_NAMES: [&str; 16] = [
    "woodcutter",
    "oil_rig",
    "quarry",
    "clay_pit",
    "mine",
    "sawmill",
    "coal_burner",
    "papermill",
    "stone_factory",
    "mint",
    "stock_exchange",
    "raft_factory",
    "rowboat_factory",
    "steamer_factory",
    "truck_factory",
    "wagon_factory",
];

impl BuildingType {
    /// Every real building type, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Woodcutter,
        Self::OilRig,
        Self::Quarry,
        Self::ClayPit,
        Self::Mine,
        Self::Sawmill,
        Self::CoalBurner,
        Self::Papermill,
        Self::StoneFactory,
        Self::Mint,
        Self::StockExchange,
        Self::RaftFactory,
        Self::RowboatFactory,
        Self::SteamerFactory,
        Self::TruckFactory,
        Self::WagonFactory,
    ];

    /// Canonical name. Total: the sentinel maps to `"unknown"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "unknown",
            other => BUILDING_NAMES[other as usize],
        }
    }

    /// Inverse of [`BuildingType::name`]; unknown names map to `Invalid`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        BUILDING_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map_or(Self::Invalid, |index| Self::ALL[index])
    }

    /// Whether this is a real type rather than the sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of the building hierarchy a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProducerClass {
    /// Produces from nothing (or its own reserves); powered by electricity.
    Primary,
    /// Converts inputs from a cache; run by a manager.
    Secondary,
}

impl ProducerClass {
    /// The only boost this class accepts.
    #[must_use]
    pub const fn boost_kind(self) -> BoostKind {
        match self {
            Self::Primary => BoostKind::Electricity,
            Self::Secondary => BoostKind::Manager,
        }
    }
}

/// Ways to double a building's production for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoostKind {
    /// Powers a primary producer.
    Electricity,
    /// Staffs a secondary producer.
    Manager,
}

impl BoostKind {
    /// JSON key holding the boost flag.
    #[must_use]
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::Electricity => "is_powered",
            Self::Manager => "has_manager",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_total_and_invertible() {
        for building_type in BuildingType::ALL {
            assert_eq!(BuildingType::from_name(building_type.name()), building_type);
        }
        assert_eq!(BuildingType::Invalid.name(), "unknown");
        assert_eq!(BuildingType::from_name("castle"), BuildingType::Invalid);
        assert_eq!(BuildingType::StockExchange.to_string(), "stock_exchange");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        for building_type in BuildingType::ALL {
            assert_eq!(serde_json::json!(building_type), building_type.name());
        }
        assert_eq!(serde_json::json!(BuildingType::Invalid), "unknown");
    }

    #[test]
    fn test_class_boosts() {
        assert_eq!(ProducerClass::Primary.boost_kind(), BoostKind::Electricity);
        assert_eq!(ProducerClass::Secondary.boost_kind(), BoostKind::Manager);
        assert_eq!(BoostKind::Manager.json_key(), "has_manager");
    }
}
