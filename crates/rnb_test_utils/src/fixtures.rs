//! Test fixtures and helpers.
//!
//! Pre-built caches, sites and factories for consistent testing.

use std::sync::Once;

use rnb_core::buildings::{Building, BuildingType};
use rnb_core::cache::Cache;
use rnb_core::factory::BuildingFactory;
use rnb_core::resource::ResourceType;
use rnb_core::terrain::{Site, TerrainKind};
use tracing_subscriber::EnvFilter;

/// Seed used by [`factory`].
pub const TEST_SEED: u64 = 0x5EED;

/// Build a cache holding fresh units.
///
/// # Panics
///
/// Panics if `contents` names the invalid resource type.
#[must_use]
pub fn cache_with(contents: &[(ResourceType, usize)]) -> Cache {
    let mut cache = Cache::new();
    for &(resource_type, amount) in contents {
        cache
            .add_new(resource_type, amount)
            .unwrap_or_else(|e| panic!("cannot add {amount} {resource_type}: {e}"));
    }
    cache
}

/// A seeded factory with default settings.
#[must_use]
pub fn factory() -> BuildingFactory {
    BuildingFactory::seeded(TEST_SEED)
}

/// A fresh building from the seeded factory.
///
/// # Panics
///
/// Panics for the invalid building type.
#[must_use]
pub fn building(building_type: BuildingType) -> Building {
    factory()
        .make(building_type)
        .unwrap_or_else(|e| panic!("cannot make {building_type}: {e}"))
}

/// Inland tile.
#[must_use]
pub const fn inland(terrain: TerrainKind) -> Site {
    Site::inland(terrain)
}

/// Tile bordering water.
#[must_use]
pub const fn shore(terrain: TerrainKind) -> Site {
    Site::shore(terrain)
}

/// A site every building type in the catalog accepts, for its terrain.
#[must_use]
pub fn site_for(building_type: BuildingType) -> Site {
    match building_type {
        BuildingType::Woodcutter => inland(TerrainKind::Forest),
        BuildingType::OilRig => inland(TerrainKind::Sea),
        BuildingType::Quarry => inland(TerrainKind::Rock),
        BuildingType::Mine => inland(TerrainKind::Mountain),
        _ => shore(TerrainKind::Pasture),
    }
}

static TRACING: Once = Once::new();

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_with() {
        let cache = cache_with(&[(ResourceType::Boards, 2), (ResourceType::Clay, 1)]);
        assert_eq!(cache.size(), 3);
    }

    #[test]
    fn test_site_for_accepts_every_type() {
        let cache = cache_with(&[(ResourceType::Boards, 5), (ResourceType::Stone, 5)]);
        for building_type in BuildingType::ALL {
            assert!(building_type.can_build(&cache, &site_for(building_type)), "{building_type}");
        }
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
