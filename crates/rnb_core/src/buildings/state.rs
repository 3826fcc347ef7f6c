//! Per-round production counter and boost flag.

use super::BoostKind;

/// Production bookkeeping shared by every building.
///
/// `current` counts output units produced this round and never exceeds
/// [`ProductionState::effective_max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductionState {
    /// Unboosted limit per round.
    max: u8,
    /// Produced so far this round.
    current: u8,
    /// Boost accepted by the owning building.
    boost_kind: BoostKind,
    /// Whether the boost is active.
    boosted: bool,
}

impl ProductionState {
    /// Fresh state: nothing produced, not boosted.
    #[must_use]
    pub const fn new(max: u8, boost_kind: BoostKind) -> Self {
        Self {
            max,
            current: 0,
            boost_kind,
            boosted: false,
        }
    }

    /// Rebuild a state from persisted values.
    ///
    /// Returns `None` when `current` exceeds the effective limit.
    #[must_use]
    pub const fn restore(max: u8, current: u8, boost_kind: BoostKind, boosted: bool) -> Option<Self> {
        let state = Self {
            max,
            current,
            boost_kind,
            boosted,
        };
        if current > state.effective_max() {
            None
        } else {
            Some(state)
        }
    }

    /// Unboosted limit.
    #[must_use]
    pub const fn production_max(&self) -> u8 {
        self.max
    }

    /// Produced this round.
    #[must_use]
    pub const fn production_current(&self) -> u8 {
        self.current
    }

    /// Limit for this round, doubled while boosted.
    #[must_use]
    pub const fn effective_max(&self) -> u8 {
        if self.boosted {
            self.max.saturating_mul(2)
        } else {
            self.max
        }
    }

    /// Units that may still be produced this round.
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.effective_max().saturating_sub(self.current)
    }

    /// Boost accepted by this building.
    #[must_use]
    pub const fn boost_kind(&self) -> BoostKind {
        self.boost_kind
    }

    /// Whether the boost is active.
    #[must_use]
    pub const fn is_boosted(&self) -> bool {
        self.boosted
    }

    /// A boost of `kind` can be added right now.
    #[must_use]
    pub fn can_add_boost(&self, kind: BoostKind) -> bool {
        !self.boosted && kind == self.boost_kind
    }

    /// The boost can be taken away right now. Once anything was produced
    /// the doubled capacity may already be spent, so removal is refused.
    #[must_use]
    pub const fn can_remove_boost(&self) -> bool {
        self.boosted && self.current == 0
    }

    /// Activate the boost. Returns whether it changed anything.
    pub fn add_boost(&mut self, kind: BoostKind) -> bool {
        if !self.can_add_boost(kind) {
            return false;
        }
        self.boosted = true;
        true
    }

    /// Deactivate the boost. Returns whether it changed anything.
    pub fn remove_boost(&mut self) -> bool {
        if !self.can_remove_boost() {
            return false;
        }
        self.boosted = false;
        true
    }

    /// Record `amount` produced units. Returns `false`, without recording,
    /// if that would pass the limit.
    pub fn record(&mut self, amount: u8) -> bool {
        if amount > self.remaining() {
            return false;
        }
        self.current += amount;
        true
    }

    /// Start a new round.
    pub fn reset(&mut self) {
        self.current = 0;
        self.boosted = false;
    }
}
