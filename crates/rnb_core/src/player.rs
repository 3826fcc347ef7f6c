//! Player colours.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour identifying a player.
///
/// `Neutral` marks unowned things and `Invalid` is the sentinel returned by
/// failed lookups. Neither may carry resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerColor {
    /// No owner.
    Neutral,
    /// Black player.
    Black,
    /// Blue player.
    Blue,
    /// Green player.
    Green,
    /// Red player.
    Red,
    /// Yellow player.
    Yellow,
    /// Sentinel for unknown colours.
    Invalid,
}

impl PlayerColor {
    /// Colours that belong to an actual player.
    pub const PLAYERS: [Self; 5] = [Self::Black, Self::Blue, Self::Green, Self::Red, Self::Yellow];

    /// Canonical name used for serialization.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Invalid => "invalid",
        }
    }

    /// Inverse of [`PlayerColor::name`]; unknown names map to `Invalid`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "neutral" => Self::Neutral,
            "black" => Self::Black,
            "blue" => Self::Blue,
            "green" => Self::Green,
            "red" => Self::Red,
            "yellow" => Self::Yellow,
            _ => Self::Invalid,
        }
    }

    /// Whether this colour may carry (move) resources.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Self::Neutral | Self::Invalid)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
