//! Transporter handles seen by the production engine.
//!
//! Movement, cargo and placement of transporters happen elsewhere. The
//! engine only needs to know which transporters stand next to a building
//! (the wagon factory converts a donkey) and how to describe a newly built
//! one to the caller.

use std::fmt;

/// Kind of transporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransporterType {
    /// Donkey, the starting land transporter.
    Donkey,
    /// Wagon.
    Wagon,
    /// Truck.
    Truck,
    /// Raft.
    Raft,
    /// Rowboat.
    Rowboat,
    /// Steamer.
    Steamer,
}

impl TransporterType {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Donkey => "donkey",
            Self::Wagon => "wagon",
            Self::Truck => "truck",
            Self::Raft => "raft",
            Self::Rowboat => "rowboat",
            Self::Steamer => "steamer",
        }
    }

    /// Whether this transporter travels on water.
    #[must_use]
    pub const fn is_boat(self) -> bool {
        matches!(self, Self::Raft | Self::Rowboat | Self::Steamer)
    }
}

impl fmt::Display for TransporterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A transporter standing near a building.
pub trait Transporter {
    /// Kind of this transporter.
    fn transporter_type(&self) -> TransporterType;

    /// Whether the transporter can be used by a building this round.
    fn is_available(&self) -> bool {
        true
    }
}

impl Transporter for TransporterType {
    fn transporter_type(&self) -> TransporterType {
        *self
    }
}

/// Request to put a new transporter on the map, produced by a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransporterOrder {
    /// Kind to create.
    pub kind: TransporterType,
    /// Index into the nearby transporter list of the transporter this one
    /// replaces (the donkey harnessed to a new wagon).
    pub replaces: Option<usize>,
}

impl TransporterOrder {
    /// Order for a brand-new transporter.
    #[must_use]
    pub const fn new(kind: TransporterType) -> Self {
        Self {
            kind,
            replaces: None,
        }
    }

    /// Order that upgrades an existing transporter.
    #[must_use]
    pub const fn replacing(kind: TransporterType, index: usize) -> Self {
        Self {
            kind,
            replaces: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tired;

    impl Transporter for Tired {
        fn transporter_type(&self) -> TransporterType {
            TransporterType::Donkey
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_type_is_its_own_handle() {
        let handle: &dyn Transporter = &TransporterType::Raft;
        assert_eq!(handle.transporter_type(), TransporterType::Raft);
        assert!(handle.is_available());
        assert!(!Tired.is_available());
    }

    #[test]
    fn test_orders() {
        assert_eq!(TransporterOrder::new(TransporterType::Truck).replaces, None);
        assert_eq!(
            TransporterOrder::replacing(TransporterType::Wagon, 3).replaces,
            Some(3)
        );
        assert!(TransporterType::Steamer.is_boat());
        assert!(!TransporterType::Wagon.is_boat());
    }
}
