//! Mine shafts: the gold/iron bag a mine draws from.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::resource::ResourceType;

/// Shaft variants and what they put into the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineVariant {
    /// 3 gold, 3 iron.
    #[default]
    Regular,
    /// 5 gold, 5 iron.
    Big,
    /// 4 gold.
    SpecializedGold,
    /// 4 iron.
    SpecializedIron,
}

impl MineVariant {
    /// Every variant.
    pub const ALL: [Self; 4] = [
        Self::Regular,
        Self::Big,
        Self::SpecializedGold,
        Self::SpecializedIron,
    ];

    /// `(gold, iron)` placed in the bag.
    #[must_use]
    pub const fn contents(self) -> (u8, u8) {
        match self {
            Self::Regular => (3, 3),
            Self::Big => (5, 5),
            Self::SpecializedGold => (4, 0),
            Self::SpecializedIron => (0, 4),
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Big => "big",
            Self::SpecializedGold => "specialized_gold",
            Self::SpecializedIron => "specialized_iron",
        }
    }
}

impl fmt::Display for MineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MineVariant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| GameError::InvalidMineVariant(s.to_string()))
    }
}

/// Shuffled bag of gold and iron.
///
/// Draw order is random; only the totals are meaningful, so equality
/// compares counts.
#[derive(Debug, Clone, Default)]
pub struct MineShaft {
    remaining: Vec<ResourceType>,
}

impl MineShaft {
    /// Fill a bag for `variant`, shuffled with `rng`.
    pub fn new<R: Rng + ?Sized>(variant: MineVariant, rng: &mut R) -> Self {
        let (gold, iron) = variant.contents();
        Self::from_counts(gold, iron, rng)
    }

    /// Fill a bag with explicit counts, shuffled with `rng`.
    pub fn from_counts<R: Rng + ?Sized>(gold: u8, iron: u8, rng: &mut R) -> Self {
        let mut remaining = Vec::with_capacity(usize::from(gold) + usize::from(iron));
        remaining.extend(std::iter::repeat(ResourceType::Gold).take(usize::from(gold)));
        remaining.extend(std::iter::repeat(ResourceType::Iron).take(usize::from(iron)));
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Fill a bag with a reproducible order.
    #[must_use]
    pub fn seeded(variant: MineVariant, seed: u64) -> Self {
        Self::new(variant, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Gold left.
    #[must_use]
    pub fn gold(&self) -> u8 {
        self.count(ResourceType::Gold)
    }

    /// Iron left.
    #[must_use]
    pub fn iron(&self) -> u8 {
        self.count(ResourceType::Iron)
    }

    fn count(&self, resource_type: ResourceType) -> u8 {
        let n = self.remaining.iter().filter(|&&r| r == resource_type).count();
        u8::try_from(n).unwrap_or(u8::MAX)
    }

    /// Units left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether the bag is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Take the next unit.
    pub fn draw(&mut self) -> Option<ResourceType> {
        self.remaining.pop()
    }

    /// Replace the contents with a fresh bag for `variant`.
    pub fn refill<R: Rng + ?Sized>(&mut self, variant: MineVariant, rng: &mut R) {
        *self = Self::new(variant, rng);
    }
}

impl PartialEq for MineShaft {
    fn eq(&self, other: &Self) -> bool {
        self.gold() == other.gold() && self.iron() == other.iron()
    }
}

impl Eq for MineShaft {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_contents() {
        assert_eq!(MineVariant::Regular.contents(), (3, 3));
        assert_eq!(MineVariant::Big.contents(), (5, 5));
        assert_eq!(MineVariant::SpecializedGold.contents(), (4, 0));
        assert_eq!(MineVariant::SpecializedIron.contents(), (0, 4));
    }

    #[test]
    fn test_variant_names() {
        for variant in MineVariant::ALL {
            assert_eq!(variant.name().parse::<MineVariant>().unwrap(), variant);
        }
        let err = "diamond".parse::<MineVariant>().unwrap_err();
        assert!(matches!(err, GameError::InvalidMineVariant(name) if name == "diamond"));
    }

    #[test]
    fn test_variant_deserializes_snake_case() {
        let variant: MineVariant = ron::from_str("specialized_gold").unwrap();
        assert_eq!(variant, MineVariant::SpecializedGold);
    }

    #[test]
    fn test_shaft_drains() {
        let mut shaft = MineShaft::seeded(MineVariant::Regular, 7);
        assert_eq!((shaft.gold(), shaft.iron()), (3, 3));

        let mut drawn = Vec::new();
        while let Some(resource) = shaft.draw() {
            drawn.push(resource);
        }
        assert!(shaft.is_empty());
        assert_eq!(drawn.len(), 6);
        assert_eq!(drawn.iter().filter(|&&r| r == ResourceType::Gold).count(), 3);
        assert!(shaft.draw().is_none());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = MineShaft::seeded(MineVariant::Big, 42);
        let mut b = MineShaft::seeded(MineVariant::Big, 42);
        for _ in 0..10 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = MineShaft::from_counts(2, 1, &mut rng);
        let b = MineShaft::from_counts(2, 1, &mut rng);
        assert_eq!(a, b);
        assert_ne!(a, MineShaft::from_counts(1, 2, &mut rng));
    }

    #[test]
    fn test_refill() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shaft = MineShaft::default();
        assert!(shaft.is_empty());
        shaft.refill(MineVariant::SpecializedIron, &mut rng);
        assert_eq!((shaft.gold(), shaft.iron()), (0, 4));
    }
}
