//! Terrain queries used by construction checks.
//!
//! The map itself lives outside the engine. Buildings only need to know
//! what a tile is made of and whether it touches water, which is what
//! [`TileInfo`] exposes.

use std::fmt;

/// Terrain of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Open grassland.
    Pasture,
    /// Woods.
    Forest,
    /// Rocky ground.
    Rock,
    /// Mountains.
    Mountain,
    /// Desert.
    Desert,
    /// Open water.
    Sea,
    /// Sentinel for unknown terrain.
    Invalid,
}

impl TerrainKind {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pasture => "pasture",
            Self::Forest => "forest",
            Self::Rock => "rock",
            Self::Mountain => "mountain",
            Self::Desert => "desert",
            Self::Sea => "sea",
            Self::Invalid => "invalid",
        }
    }

    /// Land that ordinary buildings may stand on.
    #[must_use]
    pub const fn is_buildable_land(self) -> bool {
        !matches!(self, Self::Sea | Self::Desert | Self::Invalid)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What construction checks need to know about a tile.
pub trait TileInfo {
    /// Terrain the building would stand on.
    fn terrain(&self) -> TerrainKind;

    /// Whether the site borders a river or the coast.
    fn is_shore(&self) -> bool;
}

/// Plain terrain description, for callers without a map of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// Terrain.
    pub terrain: TerrainKind,
    /// Shore flag.
    pub shore: bool,
}

impl Site {
    /// Inland site.
    #[must_use]
    pub const fn inland(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            shore: false,
        }
    }

    /// Site on a river bank or coast.
    #[must_use]
    pub const fn shore(terrain: TerrainKind) -> Self {
        Self {
            terrain,
            shore: true,
        }
    }
}

impl TileInfo for Site {
    fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    fn is_shore(&self) -> bool {
        self.shore
    }
}
