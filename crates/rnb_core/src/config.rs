//! Engine configuration.
//!
//! Plain data, deserialized from RON. The engine never reads files itself;
//! callers load the text and hand it to [`EngineConfig::from_ron`].
//!
//! ```ron
//! (
//!     mine_shuffle: Seeded(42),
//!     default_mine_variant: big,
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::buildings::MineVariant;
use crate::error::{GameError, Result};

/// How mine bags are shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MineShuffle {
    /// Fresh OS entropy; draw order is not reproducible.
    #[default]
    Entropy,
    /// Fixed seed; every run draws in the same order.
    Seeded(u64),
}

/// Engine-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shuffle policy for mine bags.
    pub mine_shuffle: MineShuffle,
    /// Shaft variant given to newly made mines.
    pub default_mine_variant: MineVariant,
}

impl EngineConfig {
    /// Parse from a RON string.
    pub fn from_ron(ron: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| GameError::ConfigParseError(e.to_string()))
    }

    /// Serialize to pretty RON.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| GameError::ConfigParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.mine_shuffle, MineShuffle::Entropy);
        assert_eq!(config.default_mine_variant, MineVariant::Regular);
        assert_eq!(EngineConfig::from_ron("()").unwrap(), config);
    }

    #[test]
    fn test_parse() {
        let config = EngineConfig::from_ron(
            "(mine_shuffle: Seeded(42), default_mine_variant: specialized_iron)",
        )
        .unwrap();
        assert_eq!(config.mine_shuffle, MineShuffle::Seeded(42));
        assert_eq!(config.default_mine_variant, MineVariant::SpecializedIron);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = EngineConfig {
            mine_shuffle: MineShuffle::Seeded(7),
            default_mine_variant: MineVariant::Big,
        };
        let text = config.to_ron().unwrap();
        assert_eq!(EngineConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_ron("(mine_shuffle: Sometimes)").unwrap_err();
        assert!(matches!(err, GameError::ConfigParseError(_)));
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }
}
