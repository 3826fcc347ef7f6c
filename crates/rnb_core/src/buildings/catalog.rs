//! Static building catalog.
//!
//! One [`BuildingSpec`] per [`BuildingType`], indexed in declaration order.
//! The catalog is the single place that says how much a building may
//! produce per round, what it costs to build and where it may stand.

use crate::resource::ResourceType;
use crate::terrain::{TerrainKind, TileInfo};

use super::ProducerClass::{Primary, Secondary};
use super::{BoostKind, BuildingType, ProducerClass};
use crate::resource::ResourceType::{Boards, Stone};

/// Where a building may be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRule {
    /// Only on this exact terrain.
    Terrain(TerrainKind),
    /// On buildable land bordering water.
    Shore,
    /// On any buildable land.
    Land,
}

impl SiteRule {
    /// Check a tile against this rule.
    #[must_use]
    pub fn allows<T: TileInfo + ?Sized>(self, tile: &T) -> bool {
        let terrain = tile.terrain();
        match self {
            Self::Terrain(required) => terrain == required,
            Self::Shore => tile.is_shore() && terrain.is_buildable_land(),
            Self::Land => terrain.is_buildable_land(),
        }
    }
}

/// Static facts about one building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingSpec {
    /// The type described.
    pub building_type: BuildingType,
    /// Primary or secondary producer.
    pub class: ProducerClass,
    /// Unboosted production limit per round, in output units.
    pub production_max: u8,
    /// Resources consumed by construction.
    pub construction_cost: &'static [(ResourceType, usize)],
    /// Where it may stand.
    pub site: SiteRule,
}

impl BuildingSpec {
    /// The boost this building accepts.
    #[must_use]
    pub const fn boost_kind(&self) -> BoostKind {
        self.class.boost_kind()
    }
}

const fn spec(
    building_type: BuildingType,
    class: ProducerClass,
    production_max: u8,
    construction_cost: &'static [(ResourceType, usize)],
    site: SiteRule,
) -> BuildingSpec {
    BuildingSpec {
        building_type,
        class,
        production_max,
        construction_cost,
        site,
    }
}

/// Catalog entries, in [`BuildingType`] declaration order.
const CATALOG: [BuildingSpec; 16] = [
    spec(
        BuildingType::Woodcutter,
        Primary,
        1,
        &[(Boards, 1)],
        SiteRule::Terrain(TerrainKind::Forest),
    ),
    spec(
        BuildingType::OilRig,
        Primary,
        1,
        &[(Boards, 3), (Stone, 1)],
        SiteRule::Terrain(TerrainKind::Sea),
    ),
    spec(
        BuildingType::Quarry,
        Primary,
        1,
        &[(Boards, 1)],
        SiteRule::Terrain(TerrainKind::Rock),
    ),
    spec(BuildingType::ClayPit, Primary, 1, &[(Boards, 3)], SiteRule::Shore),
    spec(
        BuildingType::Mine,
        Primary,
        1,
        &[(Boards, 3), (Stone, 1)],
        SiteRule::Terrain(TerrainKind::Mountain),
    ),
    spec(BuildingType::Sawmill, Secondary, 6, &[(Boards, 2), (Stone, 1)], SiteRule::Land),
    spec(BuildingType::CoalBurner, Secondary, 6, &[(Boards, 3), (Stone, 1)], SiteRule::Land),
    spec(BuildingType::Papermill, Secondary, 1, &[(Boards, 1), (Stone, 1)], SiteRule::Land),
    spec(BuildingType::StoneFactory, Secondary, 6, &[(Boards, 2)], SiteRule::Land),
    spec(BuildingType::Mint, Secondary, 1, &[(Boards, 3), (Stone, 1)], SiteRule::Land),
    spec(BuildingType::StockExchange, Secondary, 6, &[(Boards, 3), (Stone, 2)], SiteRule::Land),
    spec(BuildingType::RaftFactory, Secondary, 1, &[(Boards, 1), (Stone, 1)], SiteRule::Shore),
    spec(BuildingType::RowboatFactory, Secondary, 1, &[(Boards, 2), (Stone, 1)], SiteRule::Shore),
    spec(BuildingType::SteamerFactory, Secondary, 1, &[(Boards, 2), (Stone, 2)], SiteRule::Shore),
    spec(BuildingType::TruckFactory, Secondary, 1, &[(Boards, 2), (Stone, 2)], SiteRule::Land),
    spec(BuildingType::WagonFactory, Secondary, 1, &[(Boards, 2), (Stone, 1)], SiteRule::Land),
];

impl BuildingType {
    /// Catalog entry, or `None` for the sentinel.
    #[must_use]
    pub fn spec(self) -> Option<&'static BuildingSpec> {
        CATALOG.get(self as usize)
    }

    /// Producer class, or `None` for the sentinel.
    #[must_use]
    pub fn class(self) -> Option<ProducerClass> {
        self.spec().map(|spec| spec.class)
    }
}

/// Iterate over every catalog entry.
pub fn all_specs() -> impl Iterator<Item = &'static BuildingSpec> {
    CATALOG.iter()
}
