//! JSON encoding of buildings.
//!
//! ```json
//! { "type": "sawmill", "production_current": 4, "production_max": 12, "has_manager": true }
//! { "type": "mine", "production_current": 0, "production_max": 1, "is_powered": false, "gold": 2, "iron": 3 }
//! ```
//!
//! `production_max` is the limit in force for the round, so it already
//! includes the boost. Decoding never clamps: any value that does not match
//! what the type and boost flag imply is rejected.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::DecodeError;

use super::building::Building;
use super::mine::MineShaft;
use super::recipe::Recipe;
use super::state::ProductionState;
use super::{BoostKind, BuildingType};

type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Wire shape of a [`Building`].
#[derive(Debug, Serialize, Deserialize)]
struct BuildingRecord {
    #[serde(rename = "type")]
    building_type: BuildingType,
    production_current: u8,
    production_max: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_manager: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_powered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gold: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iron: Option<u8>,
}

impl Building {
    /// Encode as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let boosted = Some(self.is_boosted());
        let (has_manager, is_powered) = match self.boost_kind() {
            BoostKind::Manager => (boosted, None),
            BoostKind::Electricity => (None, boosted),
        };
        json!(BuildingRecord {
            building_type: self.building_type(),
            production_current: self.production_current(),
            production_max: self.effective_max(),
            has_manager,
            is_powered,
            gold: self.mine().map(MineShaft::gold),
            iron: self.mine().map(MineShaft::iron),
        })
    }

    /// Decode any building type.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        Self::decode(value, None, &mut rand::thread_rng())
    }

    /// Decode, insisting on `expected` as the type.
    pub fn from_json_as(expected: BuildingType, value: &Value) -> DecodeResult<Self> {
        Self::decode(value, Some(expected), &mut rand::thread_rng())
    }

    pub(crate) fn decode<R: Rng + ?Sized>(
        value: &Value,
        expected: Option<BuildingType>,
        rng: &mut R,
    ) -> DecodeResult<Self> {
        if !value.is_object() {
            return Err(DecodeError::new("building must be a JSON object", value));
        }
        let record = BuildingRecord::deserialize(value)
            .map_err(|err| DecodeError::new(format!("malformed building: {err}"), value))?;

        let building_type = record.building_type;
        let spec = building_type
            .spec()
            .ok_or_else(|| DecodeError::new("unknown building type", value))?;
        if let Some(expected) = expected {
            if expected != building_type {
                return Err(DecodeError::new(
                    format!("expected a {expected}, found a {building_type}"),
                    value,
                ));
            }
        }

        let boost_kind = spec.boost_kind();
        let (flag, foreign) = match boost_kind {
            BoostKind::Electricity => (record.is_powered, record.has_manager),
            BoostKind::Manager => (record.has_manager, record.is_powered),
        };
        let key = boost_kind.json_key();
        let Some(boosted) = flag else {
            return Err(DecodeError::new(format!("missing `{key}`"), value));
        };
        if foreign.is_some() {
            return Err(DecodeError::new(
                format!("{building_type} only accepts `{key}`"),
                value,
            ));
        }

        let base = spec.production_max;
        let implied = if boosted { base.saturating_mul(2) } else { base };
        if record.production_max != implied {
            return Err(DecodeError::new(
                format!(
                    "production_max {} does not match {implied} implied by `{key}`",
                    record.production_max
                ),
                value,
            ));
        }
        let current = record.production_current;
        if let Some(Recipe::Convert { batch_yield, .. }) = building_type.recipe() {
            if batch_yield > 1 && current % batch_yield != 0 {
                return Err(DecodeError::new(
                    format!("production_current {current} is not a whole number of batches of {batch_yield}"),
                    value,
                ));
            }
        }
        let state = ProductionState::restore(base, current, boost_kind, boosted).ok_or_else(|| {
            DecodeError::new(
                format!("production_current {current} exceeds production_max {implied}"),
                value,
            )
        })?;

        let shaft = match (building_type, record.gold, record.iron) {
            (BuildingType::Mine, Some(gold), Some(iron)) => Some(MineShaft::from_counts(gold, iron, rng)),
            (BuildingType::Mine, _, _) => {
                return Err(DecodeError::new("mine needs `gold` and `iron`", value));
            }
            (_, None, None) => None,
            _ => {
                return Err(DecodeError::new(
                    format!("{building_type} has no shaft"),
                    value,
                ));
            }
        };

        Ok(Self::from_parts(building_type, state, shaft))
    }
}
