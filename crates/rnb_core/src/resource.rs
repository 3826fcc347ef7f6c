//! Resource units and resource types.
//!
//! A [`Resource`] is a single good lying in a cache. Besides its type it
//! remembers which players carried it this round, so that a player cannot
//! pick up again what they just dropped.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, GameError, Result};
use crate::player::PlayerColor;

/// Every kind of good in the game, plus an `Invalid` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Raw timber from a woodcutter.
    Trunks,
    /// Sawn boards.
    Boards,
    /// Paper from a papermill.
    Paper,
    /// Geese.
    Goose,
    /// Clay from a clay pit.
    Clay,
    /// Stone.
    Stone,
    /// Fuel.
    Fuel,
    /// Iron ore.
    Iron,
    /// Gold.
    Gold,
    /// Minted coins.
    Coins,
    /// Shares from a stock exchange.
    Stock,
    /// Bombs.
    Bomb,
    /// Managers.
    Manager,
    /// Pearls.
    Pearl,
    /// Marble.
    Marble,
    /// Wood carvings.
    WoodCarving,
    /// Rings.
    Ring,
    /// Sketches.
    Sketch,
    /// Pottery.
    Pottery,
    /// Statues.
    Statue,
    /// Sentinel; never stored in a cache.
    #[serde(rename = "unknown")]
    Invalid,
}

/// Canonical names, indexed in declaration order.
const RESOURCE_NAMES: [&str; 20] = [
    "trunks",
    "boards",
    "paper",
    "goose",
    "clay",
    "stone",
    "fuel",
    "iron",
    "gold",
    "coins",
    "stock",
    "bomb",
    "manager",
    "pearl",
    "marble",
    "wood_carving",
    "ring",
    "sketch",
    "pottery",
    "statue",
];

impl ResourceType {
    /// All real resource types, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Trunks,
        Self::Boards,
        Self::Paper,
        Self::Goose,
        Self::Clay,
        Self::Stone,
        Self::Fuel,
        Self::Iron,
        Self::Gold,
        Self::Coins,
        Self::Stock,
        Self::Bomb,
        Self::Manager,
        Self::Pearl,
        Self::Marble,
        Self::WoodCarving,
        Self::Ring,
        Self::Sketch,
        Self::Pottery,
        Self::Statue,
    ];

    /// Canonical name. Total: the sentinel maps to `"unknown"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "unknown",
            other => RESOURCE_NAMES[other as usize],
        }
    }

    /// Inverse of [`ResourceType::name`]; unknown names map to `Invalid`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        RESOURCE_NAMES
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

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single unit of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    resource_type: ResourceType,
    carriers: BTreeSet<PlayerColor>,
}

impl Resource {
    /// Create an unclaimed unit.
    #[must_use]
    pub const fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            carriers: BTreeSet::new(),
        }
    }

    /// The unit's type.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Players that moved this unit this round.
    #[must_use]
    pub fn carriers(&self) -> &BTreeSet<PlayerColor> {
        &self.carriers
    }

    /// Whether `player` has carried this unit this round.
    #[must_use]
    pub fn is_carried_by(&self, player: PlayerColor) -> bool {
        self.carriers.contains(&player)
    }

    /// Whether nobody has touched this unit this round.
    #[must_use]
    pub fn is_unclaimed(&self) -> bool {
        self.carriers.is_empty()
    }

    /// Mark the unit as carried by `player`.
    ///
    /// Fails with an invalid-player error for `Neutral`/`Invalid`.
    pub fn add_carrier(&mut self, player: PlayerColor) -> Result<()> {
        if !player.is_player() {
            return Err(GameError::InvalidPlayer(player.name()));
        }
        self.carriers.insert(player);
        Ok(())
    }

    /// Forget every carrier.
    pub fn clear_carriers(&mut self) {
        self.carriers.clear();
    }

    /// Encode as `{ "type": ..., "carriers": [...] }`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(ResourceRecord {
            resource_type: self.resource_type,
            carriers: self.carriers.iter().copied().collect(),
        })
    }

    /// Decode a unit, rejecting unknown types and non-player carriers.
    pub fn from_json(value: &serde_json::Value) -> std::result::Result<Self, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::new("resource must be a JSON object", value));
        }
        let record = ResourceRecord::deserialize(value)
            .map_err(|e| DecodeError::new(format!("malformed resource: {e}"), value))?;

        if !record.resource_type.is_valid() {
            return Err(DecodeError::new("unknown resource type", value));
        }

        let mut resource = Self::new(record.resource_type);
        for color in record.carriers {
            if !color.is_player() {
                return Err(DecodeError::new(
                    format!("'{color}' cannot carry resources"),
                    value,
                ));
            }
            resource.carriers.insert(color);
        }
        Ok(resource)
    }
}

/// Wire shape of a [`Resource`].
#[derive(Debug, Serialize, Deserialize)]
struct ResourceRecord {
    #[serde(rename = "type")]
    resource_type: ResourceType,
    #[serde(default)]
    carriers: Vec<PlayerColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_total_and_invertible() {
        for resource_type in ResourceType::ALL {
            assert_eq!(ResourceType::from_name(resource_type.name()), resource_type);
        }
        assert_eq!(ResourceType::Invalid.name(), "unknown");
        assert_eq!(ResourceType::from_name("unknown"), ResourceType::Invalid);
        assert_eq!(ResourceType::from_name("granite"), ResourceType::Invalid);
        assert_eq!(ResourceType::WoodCarving.name(), "wood_carving");
    }

    #[test]
    fn test_new_resource_is_unclaimed() {
        let resource = Resource::new(ResourceType::Trunks);
        assert!(resource.is_unclaimed());
        assert_eq!(resource.resource_type(), ResourceType::Trunks);
    }

    #[test]
    fn test_carriers() {
        let mut resource = Resource::new(ResourceType::Clay);
        resource.add_carrier(PlayerColor::Red).unwrap();
        resource.add_carrier(PlayerColor::Red).unwrap();
        assert_eq!(resource.carriers().len(), 1);
        assert!(resource.is_carried_by(PlayerColor::Red));
        assert!(!resource.is_carried_by(PlayerColor::Blue));

        assert!(matches!(
            resource.add_carrier(PlayerColor::Neutral),
            Err(GameError::InvalidPlayer("neutral"))
        ));

        resource.clear_carriers();
        assert!(resource.is_unclaimed());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut resource = Resource::new(ResourceType::Gold);
        resource.add_carrier(PlayerColor::Yellow).unwrap();
        resource.add_carrier(PlayerColor::Black).unwrap();

        let value = resource.to_json();
        assert_eq!(value["type"], "gold");
        assert_eq!(value["carriers"], serde_json::json!(["black", "yellow"]));
        assert_eq!(Resource::from_json(&value).unwrap(), resource);
    }

    #[test]
    fn test_json_rejects_bad_input() {
        let unknown_type = serde_json::json!({ "type": "granite", "carriers": [] });
        assert!(Resource::from_json(&unknown_type).is_err());

        let neutral = serde_json::json!({ "type": "gold", "carriers": ["neutral"] });
        let err = Resource::from_json(&neutral).unwrap_err();
        assert!(err.message.contains("neutral"));

        let invalid = serde_json::json!({ "type": "gold", "carriers": ["mauve"] });
        assert!(Resource::from_json(&invalid).is_err());

        let not_an_object = serde_json::json!(["gold"]);
        let err = Resource::from_json(&not_an_object).unwrap_err();
        assert!(err.message.contains("object"));

        let sentinel = serde_json::json!({ "type": "unknown", "carriers": [] });
        assert!(Resource::from_json(&sentinel).is_err());
    }

    #[test]
    fn test_serde_names_match_canonical_names() {
        for resource_type in ResourceType::ALL {
            assert_eq!(serde_json::json!(resource_type), resource_type.name());
        }
        assert_eq!(serde_json::json!(ResourceType::Invalid), "unknown");
    }
}
